//! # DocRAG Pipeline
//!
//! Orchestration of the two core flows:
//!
//! ```text
//! ingest: text ──> Chunker ──> Embedder (per chunk, sequential) ──> ChunkStore.add
//! ask:    query ──> Embedder ──> ChunkStore.nearest_k ──> context join ──> AnswerGenerator
//! ```
//!
//! All collaborators are injected at construction, so both store
//! variants (and the mock providers) run under the same pipeline in
//! tests without any process-global state.

mod error;
mod pipeline;

pub use error::{PipelineError, Result};
pub use pipeline::{RetrievalPipeline, DEFAULT_TOP_K};
