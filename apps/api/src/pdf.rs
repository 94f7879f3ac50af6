//! PDF text extraction: the only fallible step before field extraction.

use std::path::Path;

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to extract text from {path}: {message}")]
    Extract { path: String, message: String },
}

/// Reads the file at `path` and returns its raw text content.
pub fn extract_text_from_pdf(path: &Path) -> Result<String, PdfError> {
    let bytes = std::fs::read(path).map_err(|source| PdfError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| PdfError::Extract {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    debug!(path = %path.display(), chars = text.len(), "extracted pdf text");
    Ok(text)
}
