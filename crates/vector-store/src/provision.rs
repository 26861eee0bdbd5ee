use crate::chroma::{ChromaConfig, ChromaStore};
use crate::memory::MemoryStore;
use crate::store::ChunkStore;
use std::sync::Arc;

/// Which store variant a process ended up with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Remote,
    InMemory,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::InMemory => "in-memory",
        }
    }
}

/// Select the store variant for this process.
///
/// Two-state startup sequence: with a remote config, attempt the
/// connection once; any failure falls back permanently to the in-memory
/// variant. The transition is one-way — there is no retry or
/// reconnection later, and callers of the returned store never observe
/// which variant is active.
pub async fn provision(config: Option<&ChromaConfig>) -> (Arc<dyn ChunkStore>, Backend) {
    if let Some(config) = config {
        match ChromaStore::connect(config.clone()).await {
            Ok(store) => {
                log::info!("Connected to Chroma at {}", config.url);
                return (Arc::new(store), Backend::Remote);
            }
            Err(err) => {
                log::warn!("Chroma unavailable; falling back to in-memory store: {err}");
            }
        }
    } else {
        log::info!("No vector database configured; using in-memory store");
    }

    (Arc::new(MemoryStore::new()), Backend::InMemory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_config_selects_memory() {
        let (_, backend) = provision(None).await;
        assert_eq!(backend, Backend::InMemory);
    }

    #[tokio::test]
    async fn test_unreachable_remote_falls_back() {
        let config = ChromaConfig::new("http://127.0.0.1:1");
        let (store, backend) = provision(Some(&config)).await;
        assert_eq!(backend, Backend::InMemory);

        // The fallback store is fully usable.
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
