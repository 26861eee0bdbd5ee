use crate::error::Result;
use docrag_chunker::Chunker;
use docrag_providers::{AnswerGenerator, Embedder};
use docrag_vector_store::{ChunkStore, StoredChunk};
use std::sync::Arc;
use uuid::Uuid;

/// Number of chunks retrieved per question when the caller does not say
pub const DEFAULT_TOP_K: usize = 4;

/// Separator between retrieved chunk texts in the assembled context
const CONTEXT_DELIMITER: &str = "\n---\n";

/// Instruction given to the answer model on every ask
const SYSTEM_PROMPT: &str =
    "Answer using only the provided context. If unsure, say you don't know.";

/// Orchestrates chunking, embedding, storage and answer generation.
///
/// Holds the collaborators behind their traits; it never learns which
/// store variant or model service implementation is active.
pub struct RetrievalPipeline {
    chunker: Chunker,
    embedder: Arc<dyn Embedder>,
    generator: Arc<dyn AnswerGenerator>,
    store: Arc<dyn ChunkStore>,
}

impl RetrievalPipeline {
    pub fn new(
        chunker: Chunker,
        embedder: Arc<dyn Embedder>,
        generator: Arc<dyn AnswerGenerator>,
        store: Arc<dyn ChunkStore>,
    ) -> Self {
        Self {
            chunker,
            embedder,
            generator,
            store,
        }
    }

    /// Chunk `text`, embed each chunk and append it to the store.
    ///
    /// Embedding calls run strictly sequentially, one store append per
    /// chunk. A failure aborts the call and leaves the chunks stored so
    /// far in place — there is no rollback. Returns the chunk count.
    pub async fn ingest(&self, text: &str) -> Result<usize> {
        let chunks = self.chunker.chunk(text);
        if chunks.is_empty() {
            return Ok(0);
        }

        log::info!(
            "Ingesting {} chunks via '{}'",
            chunks.len(),
            self.embedder.model()
        );

        // One id prefix per ingest call keeps ids collision-free across
        // concurrent uploads.
        let batch = Uuid::new_v4();
        for (index, chunk_text) in chunks.iter().enumerate() {
            let embedding = self.embedder.embed(chunk_text).await?;
            let chunk = StoredChunk::new(
                format!("chunk-{batch}-{index}"),
                chunk_text.clone(),
                embedding,
            );
            self.store.add(vec![chunk]).await?;
        }

        Ok(chunks.len())
    }

    /// Answer `query` from the `k` most similar stored chunks.
    ///
    /// The retrieved texts are joined into a single delimited context
    /// string and submitted together with the question; the generated
    /// answer is returned verbatim.
    pub async fn ask(&self, query: &str, k: usize) -> Result<String> {
        let query_embedding = self.embedder.embed(query).await?;
        let documents = self.store.nearest_k(&query_embedding, k).await?;

        log::debug!("Retrieved {} context chunks for question", documents.len());

        let context = documents.join(CONTEXT_DELIMITER);
        let user_prompt = format!("Context:\n{context}\n\nQuestion:\n{query}");

        let answer = self.generator.complete(SYSTEM_PROMPT, &user_prompt).await?;
        Ok(answer)
    }
}
