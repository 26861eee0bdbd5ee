use crate::error::Result;
use crate::types::StoredChunk;
use async_trait::async_trait;

/// Capability interface shared by both store variants.
///
/// The retrieval pipeline depends only on this trait and never learns
/// which variant is active.
#[async_trait]
pub trait ChunkStore: Send + Sync {
    /// Append chunks to the store. There is no update or delete.
    async fn add(&self, chunks: Vec<StoredChunk>) -> Result<()>;

    /// Return the texts of the `k` chunks most similar to `query`,
    /// ordered by descending similarity. Returns fewer than `k` results
    /// when the store holds fewer chunks.
    async fn nearest_k(&self, query: &[f32], k: usize) -> Result<Vec<String>>;

    /// Total number of stored chunks
    async fn count(&self) -> Result<usize>;
}
