//! # DocRAG Vector Store
//!
//! Storage and nearest-neighbor retrieval for embedded document chunks.
//!
//! ## Architecture
//!
//! ```text
//! StoredChunk[]
//!     │
//!     ├──> ChunkStore trait (add / nearest_k / count)
//!     │      ├─> MemoryStore   — linear cosine scan, process-local
//!     │      └─> ChromaStore   — remote Chroma collection over HTTP
//!     │
//!     └──> provision()
//!            └─> remote when configured and reachable,
//!                one-way fallback to in-memory otherwise
//! ```
//!
//! The variant is selected exactly once at startup. A failed remote
//! connection falls back to the in-memory store for the whole process
//! lifetime; there is no retry path and callers never see the difference.

mod chroma;
mod error;
mod memory;
mod provision;
mod similarity;
mod store;
mod types;

pub use chroma::{ChromaConfig, ChromaStore};
pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use provision::{provision, Backend};
pub use similarity::cosine_similarity;
pub use store::ChunkStore;
pub use types::StoredChunk;
