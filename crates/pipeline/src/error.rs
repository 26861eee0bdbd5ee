use docrag_providers::ProviderError;
use docrag_vector_store::StoreError;
use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur during ingest or ask
#[derive(Error, Debug)]
pub enum PipelineError {
    /// An embedding or completion call failed
    #[error("Model service error: {0}")]
    Provider(#[from] ProviderError),

    /// A vector store call failed
    #[error("Vector store error: {0}")]
    Store(#[from] StoreError),
}
