//! Error types
//!
//! The label core is total; only reading input and exporting can fail.

use thiserror::Error;

/// Label export error types
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid nutrition record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PDF error: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("Drawing error: {0}")]
    Drawing(String),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Invalid value '{value}' for {var}: {reason}")]
    InvalidConfig {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Result type for export operations
pub type LabelResult<T> = Result<T, LabelError>;

impl LabelError {
    /// Wrap a plotters backend error, which is generic over the backend
    pub fn drawing(err: impl std::fmt::Display) -> Self {
        LabelError::Drawing(err.to_string())
    }
}
