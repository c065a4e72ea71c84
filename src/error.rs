// src/error.rs
use offerpdf_layout::{FontError, LayoutError};
use offerpdf_render_lopdf::PdfWriteError;
use thiserror::Error;

/// A comprehensive error type for offer rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Font could not be loaded: {0}")]
    Font(#[from] FontError),

    #[error("Layout failed: {0}")]
    Layout(LayoutError),

    #[error("Rendering failed: {0}")]
    Pdf(#[from] PdfWriteError),

    #[error("No offer document was provided")]
    MissingDocument,

    #[error("Offer document is invalid: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error("Layout configuration is invalid: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

// Font failures surface as `Font` whichever crate reports them.
impl From<LayoutError> for RenderError {
    fn from(e: LayoutError) -> Self {
        match e {
            LayoutError::Font(font) => RenderError::Font(font),
            other => RenderError::Layout(other),
        }
    }
}
