pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::state::AppState;
use crate::upload::handlers;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/upload",
            get(handlers::handle_upload_page).post(handlers::handle_upload),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
