use thiserror::Error;

/// Result type for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;

/// Errors that can occur talking to the model services
#[derive(Error, Debug)]
pub enum ProviderError {
    /// No API key was configured
    #[error("Missing API key: {0}")]
    MissingApiKey(String),

    /// The request never produced a response (connect, TLS, timeout)
    #[error("Request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Parse(String),
}
