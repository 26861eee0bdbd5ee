use thiserror::Error;

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in a vector store
#[derive(Error, Debug)]
pub enum StoreError {
    /// The request to the remote store never produced a response
    #[error("Store request failed: {0}")]
    Request(String),

    /// The remote store answered with a non-success status
    #[error("Store request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// The remote store's response did not match the expected shape
    #[error("Failed to parse store response: {0}")]
    Parse(String),
}
