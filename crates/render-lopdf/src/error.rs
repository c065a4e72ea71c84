use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfWriteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Document was never started with begin_document")]
    NotStarted,
}

impl From<lopdf::Error> for PdfWriteError {
    fn from(err: lopdf::Error) -> Self {
        PdfWriteError::Pdf(err.to_string())
    }
}
