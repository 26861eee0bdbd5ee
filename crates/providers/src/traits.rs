use crate::error::Result;
use async_trait::async_trait;

/// Maps text to a fixed-length numeric vector via an external model.
///
/// Every vector returned by one implementation has the same
/// dimensionality, determined by the model in use.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Model identifier, used in log lines
    fn model(&self) -> &str;

    /// Embed a single text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Generates an answer from a system instruction and a user prompt.
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    /// Run a completion and return the generated text verbatim
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}
