use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Per-request errors surfaced by the HTTP boundary.
///
/// Every variant converts to a JSON response; nothing here crashes the
/// process.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Multipart request without a `file` field
    #[error("No file uploaded.")]
    MissingFile,

    /// Upload with a MIME type / extension the service cannot extract
    #[error("Unsupported file type. Use PDF, DOCX, TXT, or MD.")]
    UnsupportedFormat,

    /// Extraction produced no usable text
    #[error("No extractable text in file.")]
    EmptyDocument,

    /// Ask request with a missing or blank query
    #[error("Query is required.")]
    MissingQuery,

    /// Anything downstream: extraction, embedding, storage, completion
    #[error("{message}")]
    Internal { message: String, detail: String },
}

impl ApiError {
    /// Wrap a failure on the upload path
    pub fn upload(err: impl std::fmt::Display) -> Self {
        Self::Internal {
            message: "Upload failed.".to_string(),
            detail: err.to_string(),
        }
    }

    /// Wrap a failure on the ask path
    pub fn ask(err: impl std::fmt::Display) -> Self {
        Self::Internal {
            message: "Ask failed.".to_string(),
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingFile | Self::EmptyDocument | Self::MissingQuery => {
                StatusCode::BAD_REQUEST
            }
            Self::UnsupportedFormat => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match self {
            Self::Internal { message, detail } => {
                log::error!("{message} {detail}");
                json!({ "message": message, "error": detail })
            }
            other => json!({ "message": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::MissingFile.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::UnsupportedFormat.into_response().status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            ApiError::MissingQuery.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::upload("boom").into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
