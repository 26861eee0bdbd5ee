//! Mock providers for testing pipeline and HTTP flows.
//!
//! Deterministic, in-process stand-ins for the embedding and
//! chat-completion services, with call-history tracking so tests can
//! assert which external calls would have been made.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::traits::{AnswerGenerator, Embedder};

/// Call-history storage type
type CallHistory = Arc<Mutex<Vec<String>>>;

fn record(history: &CallHistory, entry: String) {
    let mut calls = history.lock().unwrap_or_else(|e| e.into_inner());
    calls.push(entry);
}

fn snapshot(history: &CallHistory) -> Vec<String> {
    let calls = history.lock().unwrap_or_else(|e| e.into_inner());
    calls.clone()
}

/// Mock embedder producing deterministic vectors without any network call.
///
/// The vector is a character histogram over `dimension` buckets: equal
/// texts embed identically and share cosine similarity 1.0, which is all
/// retrieval tests need.
#[derive(Clone)]
pub struct MockEmbedder {
    /// Output vector dimensionality
    dimension: usize,
    /// Fail every call from this index on (0-based)
    fail_from: Option<usize>,
    /// Texts embedded so far
    calls: CallHistory,
}

impl MockEmbedder {
    /// Create a mock embedder with the given output dimensionality.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            fail_from: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Make every call starting at `index` (0-based) return an error.
    #[must_use]
    pub fn failing_from(mut self, index: usize) -> Self {
        self.fail_from = Some(index);
        self
    }

    /// Texts embedded so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        snapshot(&self.calls)
    }

    /// Number of embed calls made.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls().len()
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];
        for (position, byte) in text.bytes().enumerate() {
            vector[(byte as usize + position) % self.dimension] += 1.0;
        }
        vector
    }
}

#[async_trait]
impl Embedder for MockEmbedder {
    fn model(&self) -> &str {
        "mock-embedder"
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let call_index = self.call_count();
        record(&self.calls, text.to_owned());

        if let Some(fail_from) = self.fail_from {
            if call_index >= fail_from {
                return Err(ProviderError::Request("mock embedder failure".to_owned()));
            }
        }

        Ok(self.vector_for(text))
    }
}

/// Mock answer generator returning a canned answer and recording prompts.
#[derive(Clone)]
pub struct MockAnswerGenerator {
    /// Canned answer text
    answer: String,
    /// Recorded `system\n---\nuser` prompt pairs
    prompts: CallHistory,
}

impl MockAnswerGenerator {
    /// Create a mock generator that always answers with `answer`.
    #[must_use]
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// User prompts received so far, in call order.
    #[must_use]
    pub fn user_prompts(&self) -> Vec<String> {
        snapshot(&self.prompts)
    }

    /// Number of completion calls made.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.user_prompts().len()
    }
}

#[async_trait]
impl AnswerGenerator for MockAnswerGenerator {
    async fn complete(&self, _system_prompt: &str, user_prompt: &str) -> Result<String> {
        record(&self.prompts, user_prompt.to_owned());
        Ok(self.answer.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_embedder_deterministic() {
        let embedder = MockEmbedder::new(16);
        let first = embedder.embed("hello").await.unwrap();
        let second = embedder.embed("hello").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 16);
        assert_eq!(embedder.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_embedder_failing_from() {
        let embedder = MockEmbedder::new(8).failing_from(1);
        assert!(embedder.embed("first").await.is_ok());
        assert!(embedder.embed("second").await.is_err());
        assert_eq!(embedder.calls(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_mock_generator_records_prompts() {
        let generator = MockAnswerGenerator::new("canned");
        let answer = generator.complete("system", "user question").await.unwrap();
        assert_eq!(answer, "canned");
        assert_eq!(generator.user_prompts(), vec!["user question"]);
    }
}
