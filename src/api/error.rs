use crate::search::SearchError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Outcome taxonomy for the read-only HTTP operations.
///
/// Validation failures are client-caused and never reach the engine; search
/// failures are backend-caused and carry the engine's message for diagnosis.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Search(#[from] SearchError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Validation(message) => (StatusCode::UNPROCESSABLE_ENTITY, message),
            ApiError::Search(err) => {
                tracing::error!("engine call failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(json!({"detail": detail}))).into_response()
    }
}
