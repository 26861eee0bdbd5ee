use std::env;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{ProviderError, Result};
use crate::traits::{AnswerGenerator, Embedder};

/// Base URL for the OpenAI API.
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
/// Default embedding model.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
/// Default chat-completion model.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4o-mini";
/// Env var key for the OpenAI API key.
const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Client for the OpenAI embeddings and chat-completions endpoints.
///
/// Implements both [`Embedder`] and [`AnswerGenerator`]. Calls are not
/// retried; any failure is surfaced to the caller with the underlying
/// message attached.
#[derive(Debug)]
pub struct OpenAiClient {
    /// HTTP client for API requests.
    client: Client,
    /// OpenAI API key.
    api_key: String,
    /// API base URL, overridable for OpenAI-compatible services.
    base_url: String,
    /// Model used for embeddings.
    embedding_model: String,
    /// Model used for chat completions.
    chat_model: String,
}

impl OpenAiClient {
    /// Creates a new client with the given API key.
    ///
    /// # Errors
    /// Returns an error if the provided API key is empty.
    pub fn new(api_key: String) -> Result<Self> {
        if api_key.is_empty() {
            return Err(ProviderError::MissingApiKey(ENV_OPENAI_API_KEY.to_owned()));
        }

        Ok(Self {
            client: Client::default(),
            api_key,
            base_url: OPENAI_API_BASE.to_owned(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_owned(),
            chat_model: DEFAULT_CHAT_MODEL.to_owned(),
        })
    }

    /// Creates a new client from environment variables.
    ///
    /// # Errors
    /// Returns an error if the env var is missing.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(ENV_OPENAI_API_KEY)
            .map_err(|_| ProviderError::MissingApiKey(ENV_OPENAI_API_KEY.to_owned()))?;
        Self::new(api_key)
    }

    /// Sets the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    /// Sets the embedding model.
    #[must_use]
    pub fn with_embedding_model(mut self, model: String) -> Self {
        self.embedding_model = model;
        self
    }

    /// Sets the chat-completion model.
    #[must_use]
    pub fn with_chat_model(mut self, model: String) -> Self {
        self.chat_model = model;
        self
    }

    /// Builds the message list for a chat completion
    fn build_messages(system_prompt: &str, user_prompt: &str) -> Vec<Value> {
        vec![
            json!({ "role": "system", "content": system_prompt }),
            json!({ "role": "user", "content": user_prompt }),
        ]
    }

    async fn post_json<T: for<'de> Deserialize<'de>>(&self, path: &str, body: &Value) -> Result<T> {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(body)
            .send()
            .await
            .map_err(|err| ProviderError::Request(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, message });
        }

        response
            .json()
            .await
            .map_err(|err| ProviderError::Parse(err.to_string()))
    }
}

/// Response payload returned by the embeddings endpoint.
#[derive(Deserialize)]
struct EmbeddingResponse {
    /// One entry per input text.
    data: Vec<EmbeddingData>,
}

/// Single embedding result.
#[derive(Deserialize)]
struct EmbeddingData {
    /// The vector itself.
    embedding: Vec<f32>,
}

/// Response payload returned by the chat-completions endpoint.
#[derive(Deserialize)]
struct ChatResponse {
    /// List of generated choices.
    choices: Vec<Choice>,
}

/// Individual completion choice.
#[derive(Deserialize)]
struct Choice {
    /// Message payload representing the completion text.
    message: ChatMessage,
}

/// Message structure containing generated content.
#[derive(Deserialize)]
struct ChatMessage {
    /// Text content produced by the model.
    content: String,
}

#[async_trait]
impl Embedder for OpenAiClient {
    fn model(&self) -> &str {
        &self.embedding_model
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let body = json!({
            "model": self.embedding_model,
            "input": text,
        });

        let response: EmbeddingResponse = self.post_json("/embeddings", &body).await?;

        response
            .data
            .into_iter()
            .next()
            .map(|data| data.embedding)
            .ok_or_else(|| ProviderError::Parse("empty embedding data".to_owned()))
    }
}

#[async_trait]
impl AnswerGenerator for OpenAiClient {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.chat_model,
            "messages": Self::build_messages(system_prompt, user_prompt),
        });

        let response: ChatResponse = self.post_json("/chat/completions", &body).await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::Parse("no choices in completion".to_owned()))
    }
}
