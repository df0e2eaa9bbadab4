use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum AlmanacError {
    /// Request body was not a JSON object.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// A recognized action was missing a field or carried a mistyped one.
    #[error("Invalid input for {action}: {message}")]
    InvalidInput {
        action: &'static str,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for AlmanacError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            AlmanacError::MalformedBody(message) => (
                StatusCode::BAD_REQUEST,
                ApiErrorObject {
                    code: "MALFORMED_BODY".to_string(),
                    message,
                    details: None,
                },
            ),

            AlmanacError::InvalidInput { action, message } => (
                StatusCode::BAD_REQUEST,
                ApiErrorObject {
                    code: "INVALID_INPUT".to_string(),
                    message,
                    details: Some(serde_json::json!({ "action": action })),
                },
            ),

            AlmanacError::Config(_) | AlmanacError::IoError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorObject {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                    details: None,
                },
            ),
        };
        (status, Json(ApiErrorBody { inner: error_body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}
