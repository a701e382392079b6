//! Error types for Lexiscan API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Scan not found: {0}")]
    ScanNotFound(String),

    #[error("No rule record for {jurisdiction}/{document_type}")]
    RuleNotFound {
        jurisdiction: String,
        document_type: String,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::ScanNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Scan not found: {}", id))
            }
            ApiError::RuleNotFound {
                jurisdiction,
                document_type,
            } => (
                StatusCode::NOT_FOUND,
                format!("No rule record for {}/{}", jurisdiction, document_type),
            ),
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
