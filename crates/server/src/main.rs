//! DocRAG server binary.
//!
//! Reads configuration from the environment, provisions the vector store
//! (remote Chroma when configured and reachable, in-memory otherwise),
//! wires the retrieval pipeline and serves the HTTP API.

use anyhow::Result;
use docrag_chunker::Chunker;
use docrag_pipeline::RetrievalPipeline;
use docrag_providers::OpenAiClient;
use docrag_server::{router, AppConfig, AppState};
use docrag_vector_store::provision;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load()?;

    let mut client = OpenAiClient::new(config.openai_api_key.clone())?;
    if let Some(base_url) = config.openai_base_url.clone() {
        client = client.with_base_url(base_url);
    }
    let client = Arc::new(client);

    let (store, backend) = provision(config.chroma.as_ref()).await;
    log::info!("Vector store: {}", backend.as_str());

    let chunker = Chunker::new(config.chunker)?;
    let pipeline = Arc::new(RetrievalPipeline::new(
        chunker,
        client.clone(),
        client,
        store,
    ));

    let app = router(AppState::new(pipeline), &config.static_dir);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("RAG server on http://localhost:{}", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}
