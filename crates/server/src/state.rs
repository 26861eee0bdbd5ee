use docrag_pipeline::RetrievalPipeline;
use std::sync::Arc;

/// Shared handler state: the pipeline built once at startup
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<RetrievalPipeline>,
}

impl AppState {
    pub fn new(pipeline: Arc<RetrievalPipeline>) -> Self {
        Self { pipeline }
    }
}
