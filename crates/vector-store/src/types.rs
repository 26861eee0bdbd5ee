use serde::{Deserialize, Serialize};

/// A chunk of document text together with its embedding.
///
/// Created during ingest, one per chunking window; never mutated or
/// deleted afterwards. Ids are unique within a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredChunk {
    pub id: String,
    pub text: String,
    pub embedding: Vec<f32>,
}

impl StoredChunk {
    pub fn new(id: String, text: String, embedding: Vec<f32>) -> Self {
        Self {
            id,
            text,
            embedding,
        }
    }
}
