//! # DocRAG Chunker
//!
//! Sliding-window text splitting for document ingestion.
//!
//! ## Architecture
//!
//! ```text
//! Document Text
//!     │
//!     ├──> Window Scan (size chars, step = size - overlap)
//!     │      └─> overlapping substrings
//!     │
//!     └──> Blank Filter
//!            └─> Vec<String> ready for embedding
//! ```
//!
//! ## Example
//!
//! ```rust
//! use docrag_chunker::{Chunker, ChunkerConfig};
//!
//! let chunker = Chunker::new(ChunkerConfig::default()).unwrap();
//! let chunks = chunker.chunk("The sky is blue. Grass is green.");
//! assert_eq!(chunks.len(), 1);
//! ```

mod chunker;
mod config;
mod error;

pub use chunker::Chunker;
pub use config::{ChunkerConfig, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
pub use error::{ChunkerError, Result};
