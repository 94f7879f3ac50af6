use crate::config::Config;
use crate::parser::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Field extractor. Its language model is read-only and shared by every request.
    pub parser: ResumeParser,
}
