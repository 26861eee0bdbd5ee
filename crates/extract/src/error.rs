use thiserror::Error;

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur during text extraction
#[derive(Error, Debug)]
pub enum ExtractError {
    /// PDF parsing failed
    #[error("PDF parse error: {0}")]
    Pdf(String),

    /// DOCX parsing failed
    #[error("DOCX parse error: {0}")]
    Docx(String),
}

impl ExtractError {
    /// Create a PDF parse error
    pub fn pdf(msg: impl Into<String>) -> Self {
        Self::Pdf(msg.into())
    }

    /// Create a DOCX parse error
    pub fn docx(msg: impl Into<String>) -> Self {
        Self::Docx(msg.into())
    }
}
