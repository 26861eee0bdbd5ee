use crate::error::Result;
use crate::similarity::cosine_similarity;
use crate::store::ChunkStore;
use crate::types::StoredChunk;
use async_trait::async_trait;
use std::cmp::Ordering;
use tokio::sync::RwLock;

/// In-process store variant: append-only sequence, linear cosine scan.
///
/// Queries are O(n) in the number of stored chunks and there is no
/// persistence across restarts. The RwLock makes append and scan safe
/// under the multi-threaded runtime; a reader may still observe a store
/// between two appends of an in-flight ingest.
#[derive(Default)]
pub struct MemoryStore {
    chunks: RwLock<Vec<StoredChunk>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChunkStore for MemoryStore {
    async fn add(&self, chunks: Vec<StoredChunk>) -> Result<()> {
        let mut store = self.chunks.write().await;
        store.extend(chunks);
        log::debug!("In-memory store now holds {} chunks", store.len());
        Ok(())
    }

    async fn nearest_k(&self, query: &[f32], k: usize) -> Result<Vec<String>> {
        let store = self.chunks.read().await;

        let mut scored: Vec<(f32, &StoredChunk)> = store
            .iter()
            .map(|chunk| (cosine_similarity(query, &chunk.embedding), chunk))
            .collect();

        // Stable sort: equal scores keep insertion order.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        Ok(scored
            .into_iter()
            .take(k)
            .map(|(_, chunk)| chunk.text.clone())
            .collect())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.chunks.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chunk(id: &str, text: &str, embedding: Vec<f32>) -> StoredChunk {
        StoredChunk::new(id.to_string(), text.to_string(), embedding)
    }

    async fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .add(vec![
                chunk("a", "alpha", vec![1.0, 0.0, 0.0]),
                chunk("b", "beta", vec![0.0, 1.0, 0.0]),
                chunk("c", "gamma", vec![0.9, 0.1, 0.0]),
            ])
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_add_and_count() {
        let store = seeded_store().await;
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_nearest_k_orders_by_similarity() {
        let store = seeded_store().await;
        let results = store.nearest_k(&[1.0, 0.0, 0.0], 3).await.unwrap();
        assert_eq!(results, vec!["alpha", "gamma", "beta"]);
    }

    #[tokio::test]
    async fn test_nearest_k_clamps_to_store_size() {
        let store = seeded_store().await;
        let results = store.nearest_k(&[1.0, 0.0, 0.0], 10).await.unwrap();
        assert_eq!(results.len(), 3);
    }

    #[tokio::test]
    async fn test_nearest_k_respects_k() {
        let store = seeded_store().await;
        let results = store.nearest_k(&[1.0, 0.0, 0.0], 1).await.unwrap();
        assert_eq!(results, vec!["alpha"]);
    }

    #[tokio::test]
    async fn test_nearest_k_empty_store() {
        let store = MemoryStore::new();
        let results = store.nearest_k(&[1.0, 0.0], 4).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_queries_identical() {
        let store = seeded_store().await;
        let first = store.nearest_k(&[0.5, 0.5, 0.0], 3).await.unwrap();
        let second = store.nearest_k(&[0.5, 0.5, 0.0], 3).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_ties_keep_insertion_order() {
        let store = MemoryStore::new();
        store
            .add(vec![
                chunk("1", "first", vec![1.0, 0.0]),
                chunk("2", "second", vec![1.0, 0.0]),
                chunk("3", "third", vec![1.0, 0.0]),
            ])
            .await
            .unwrap();

        let results = store.nearest_k(&[1.0, 0.0], 3).await.unwrap();
        assert_eq!(results, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_zero_query_vector_is_harmless() {
        let store = seeded_store().await;
        let results = store.nearest_k(&[0.0, 0.0, 0.0], 2).await.unwrap();
        // All scores are 0.0; insertion order wins.
        assert_eq!(results, vec!["alpha", "beta"]);
    }
}
