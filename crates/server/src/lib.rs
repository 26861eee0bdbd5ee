//! # DocRAG Server
//!
//! HTTP boundary for the retrieval pipeline.
//!
//! ## Endpoints
//!
//! - `POST /upload` — multipart `file` field; extract, chunk, embed, store
//! - `POST /ask` — JSON `{query}`; retrieve context and generate an answer
//! - `GET /health` — liveness only
//!
//! Anything not matching a route falls through to the static frontend
//! directory. Per-request failures convert to JSON error responses and
//! never crash the process.

mod config;
mod error;
mod routes;
mod state;

pub use config::AppConfig;
pub use error::ApiError;
pub use routes::{router, AskRequest, AskResponse, UploadResponse};
pub use state::AppState;
