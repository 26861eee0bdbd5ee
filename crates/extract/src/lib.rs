//! # DocRAG Extract
//!
//! Text extraction from uploaded documents.
//!
//! ## Architecture
//!
//! ```text
//! Upload (bytes + MIME + filename)
//!     │
//!     ├──> Format Detection (MIME first, extension fallback)
//!     │      └─> Pdf | Docx | Text
//!     │
//!     └──> Extraction
//!          ├─> PDF: pdf-extract
//!          ├─> DOCX: word/document.xml text runs
//!          └─> Text/Markdown: lossy UTF-8 decode
//! ```
//!
//! Extraction is synchronous and CPU-bound; async callers should wrap it
//! in `tokio::task::spawn_blocking`.

mod docx;
mod error;
mod extract;
mod format;

pub use error::{ExtractError, Result};
pub use extract::extract;
pub use format::DocumentFormat;
