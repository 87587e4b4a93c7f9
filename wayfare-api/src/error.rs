use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// HTTP-facing error: every service failure is converted to the response
/// envelope here, nothing propagates as a crash.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    NotFound(String),
    Internal(String),
}

impl From<wayfare_core::Error> for ApiError {
    fn from(err: wayfare_core::Error) -> Self {
        match err {
            wayfare_core::Error::Validation(msg) => Self::Validation(msg),
            wayfare_core::Error::NotFound(_) => Self::NotFound(err.to_string()),
            wayfare_core::Error::Store(source) => Self::Internal(source.to_string()),
            wayfare_core::Error::Render(msg) => Self::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            ApiError::Internal(details) => {
                tracing::error!("Internal Server Error: {}", details);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Server Error", "details": details }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
