use crate::error::{Result, StoreError};
use crate::store::ChunkStore;
use crate::types::StoredChunk;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde_json::json;

/// Chroma's tenant default
pub const DEFAULT_TENANT: &str = "default_tenant";
/// Chroma's database default
pub const DEFAULT_DATABASE: &str = "default_database";
/// Collection name used when none is configured
pub const DEFAULT_COLLECTION: &str = "docs";

/// Addressing and credentials for a remote Chroma collection
#[derive(Debug, Clone)]
pub struct ChromaConfig {
    /// Base URL of the Chroma server
    pub url: String,
    /// API token, sent as `X-Chroma-Token` when present
    pub api_key: Option<String>,
    pub tenant: String,
    pub database: String,
    pub collection: String,
}

impl ChromaConfig {
    /// Config for `url` with default tenant, database and collection
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            tenant: DEFAULT_TENANT.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

/// Remote store variant backed by a Chroma collection over its v2 HTTP API.
///
/// The collection is resolved (get-or-create) exactly once at connect
/// time; add and query calls address it by id afterwards.
#[derive(Debug)]
pub struct ChromaStore {
    client: Client,
    config: ChromaConfig,
    collection_id: String,
}

/// Collection resource returned by the collections endpoint
#[derive(Deserialize)]
struct CollectionResponse {
    id: String,
}

/// Result rows returned by the query endpoint.
///
/// Documents come back as one row per query embedding; entries can be
/// null when a chunk was stored without a document body.
#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    documents: Option<Vec<Vec<Option<String>>>>,
}

impl ChromaStore {
    /// Connect to the configured collection, creating it if absent.
    ///
    /// This is the only moment the remote store can be rejected; callers
    /// treat a failure here as the signal to fall back.
    pub async fn connect(config: ChromaConfig) -> Result<Self> {
        let client = Client::default();

        let url = format!(
            "{}/api/v2/tenants/{}/databases/{}/collections",
            config.url.trim_end_matches('/'),
            config.tenant,
            config.database
        );
        let body = json!({
            "name": config.collection,
            "get_or_create": true,
        });

        let request = Self::authorize(client.post(&url), &config).json(&body);
        let collection: CollectionResponse = Self::execute(request).await?;

        log::info!(
            "Using Chroma collection '{}' ({})",
            config.collection,
            collection.id
        );

        Ok(Self {
            client,
            config,
            collection_id: collection.id,
        })
    }

    fn authorize(request: RequestBuilder, config: &ChromaConfig) -> RequestBuilder {
        match &config.api_key {
            Some(key) => request.header("X-Chroma-Token", key),
            None => request,
        }
    }

    fn collection_url(&self, suffix: &str) -> String {
        format!(
            "{}/api/v2/tenants/{}/databases/{}/collections/{}/{suffix}",
            self.config.url.trim_end_matches('/'),
            self.config.tenant,
            self.config.database,
            self.collection_id
        )
    }

    async fn execute<T: for<'de> Deserialize<'de>>(request: RequestBuilder) -> Result<T> {
        let response = Self::check_status(request).await?;
        response
            .json()
            .await
            .map_err(|err| StoreError::Parse(err.to_string()))
    }

    /// Send and verify the status, discarding the body
    async fn execute_ok(request: RequestBuilder) -> Result<()> {
        Self::check_status(request).await?;
        Ok(())
    }

    async fn check_status(request: RequestBuilder) -> Result<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|err| StoreError::Request(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api { status, message });
        }

        Ok(response)
    }
}

#[async_trait]
impl ChunkStore for ChromaStore {
    async fn add(&self, chunks: Vec<StoredChunk>) -> Result<()> {
        if chunks.is_empty() {
            return Ok(());
        }

        let ids: Vec<&str> = chunks.iter().map(|c| c.id.as_str()).collect();
        let embeddings: Vec<&[f32]> = chunks.iter().map(|c| c.embedding.as_slice()).collect();
        let documents: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();

        let body = json!({
            "ids": ids,
            "embeddings": embeddings,
            "documents": documents,
        });

        let request = Self::authorize(self.client.post(self.collection_url("add")), &self.config)
            .json(&body);
        Self::execute_ok(request).await
    }

    async fn nearest_k(&self, query: &[f32], k: usize) -> Result<Vec<String>> {
        let body = json!({
            "query_embeddings": [query],
            "n_results": k,
            "include": ["documents"],
        });

        let request = Self::authorize(self.client.post(self.collection_url("query")), &self.config)
            .json(&body);
        let response: QueryResponse = Self::execute(request).await?;

        let documents = response
            .documents
            .and_then(|mut rows| if rows.is_empty() { None } else { Some(rows.remove(0)) })
            .unwrap_or_default();

        Ok(documents.into_iter().flatten().collect())
    }

    async fn count(&self) -> Result<usize> {
        let request = Self::authorize(self.client.get(self.collection_url("count")), &self.config);
        Self::execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ChromaConfig::new("http://localhost:8000");
        assert_eq!(config.tenant, "default_tenant");
        assert_eq!(config.database, "default_database");
        assert_eq!(config.collection, "docs");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_parse_query_response() {
        let raw = r#"{"ids":[["a","b"]],"documents":[["first text",null,"second text"]],"distances":[[0.1,0.2,0.3]]}"#;
        let parsed: QueryResponse = serde_json::from_str(raw).unwrap();
        let row = parsed.documents.unwrap().remove(0);
        let texts: Vec<String> = row.into_iter().flatten().collect();
        assert_eq!(texts, vec!["first text", "second text"]);
    }

    #[test]
    fn test_parse_query_response_without_documents() {
        let parsed: QueryResponse = serde_json::from_str(r#"{"ids":[[]]}"#).unwrap();
        assert!(parsed.documents.is_none());
    }

    #[tokio::test]
    async fn test_connect_unreachable_server_errors() {
        // Nothing listens on port 1; connect must fail, not hang.
        let config = ChromaConfig::new("http://127.0.0.1:1");
        let err = ChromaStore::connect(config).await.unwrap_err();
        assert!(matches!(err, StoreError::Request(_)));
    }
}
