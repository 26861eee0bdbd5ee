use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Multipart, State},
    routing::{get, post},
    Json, Router,
};
use docrag_extract::{extract, DocumentFormat};
use docrag_pipeline::DEFAULT_TOP_K;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tower_http::{cors::CorsLayer, services::ServeDir};

/// Response body for a successful upload
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
}

/// Request body for `/ask`
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub query: Option<String>,
}

/// Response body for a successful ask
#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Build the application router.
///
/// Unmatched paths fall through to the static frontend directory, which
/// may be absent (requests then 404).
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/upload", post(upload))
        .route("/ask", post(ask))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file: Option<(String, String, Bytes)> = None;
    while let Some(field) = multipart.next_field().await.map_err(ApiError::upload)? {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            let data = field.bytes().await.map_err(ApiError::upload)?;
            file = Some((file_name, content_type, data));
            break;
        }
    }
    let (file_name, content_type, data) = file.ok_or(ApiError::MissingFile)?;

    let format = DocumentFormat::detect(&content_type, &file_name)
        .ok_or(ApiError::UnsupportedFormat)?;

    log::info!(
        "Upload '{}' ({}, {} bytes)",
        file_name,
        format.as_str(),
        data.len()
    );

    // Extraction is CPU-bound; keep it off the async workers.
    let text = tokio::task::spawn_blocking(move || extract(&data, format))
        .await
        .map_err(ApiError::upload)?
        .map_err(ApiError::upload)?;

    if text.trim().is_empty() {
        return Err(ApiError::EmptyDocument);
    }

    let count = state.pipeline.ingest(&text).await.map_err(ApiError::upload)?;

    Ok(Json(UploadResponse {
        message: format!("Uploaded. Indexed {count} chunks."),
    }))
}

async fn ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    let query = request.query.unwrap_or_default();
    if query.trim().is_empty() {
        return Err(ApiError::MissingQuery);
    }

    let answer = state
        .pipeline
        .ask(&query, DEFAULT_TOP_K)
        .await
        .map_err(ApiError::ask)?;

    Ok(Json(AskResponse { answer }))
}
