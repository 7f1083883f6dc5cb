use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use service::auth::errors::AuthError;
use service::booking::errors::BookingError;

const INTERNAL_MESSAGE: &str = "internal server error";

/// Error body every handler answers with: `{"error", "message", "code"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: String,
    pub code: u16,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>, code: u16) -> Self {
        Self { status, error: status.canonical_reason().unwrap_or("Error"), message: message.into(), code }
    }

    pub fn bad_request(message: impl Into<String>) -> Self { Self::new(StatusCode::BAD_REQUEST, message, 1000) }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message, AuthError::Unauthorized.code())
    }

    /// Storage and crypto failures: full detail goes to the log only.
    fn internal(detail: &str, code: u16) -> Self {
        error!(code, error = %detail, "request failed unexpectedly");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE, code)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({"error": self.error, "message": self.message, "code": self.code});
        (self.status, Json(body)).into_response()
    }
}

impl From<AuthError> for JsonApiError {
    fn from(e: AuthError) -> Self {
        let code = e.code();
        match &e {
            AuthError::Validation(_) => Self::new(StatusCode::BAD_REQUEST, e.to_string(), code),
            AuthError::Unauthorized | AuthError::TokenExpired => Self::new(StatusCode::UNAUTHORIZED, e.to_string(), code),
            AuthError::Forbidden(_) => Self::new(StatusCode::FORBIDDEN, e.to_string(), code),
            AuthError::NotFound => Self::new(StatusCode::NOT_FOUND, e.to_string(), code),
            AuthError::Conflict => Self::new(StatusCode::CONFLICT, e.to_string(), code),
            AuthError::HashError(d) | AuthError::TokenError(d) | AuthError::Repository(d) => Self::internal(d, code),
        }
    }
}

impl From<BookingError> for JsonApiError {
    fn from(e: BookingError) -> Self {
        let code = e.code();
        match &e {
            BookingError::Validation(_) => Self::new(StatusCode::BAD_REQUEST, e.to_string(), code),
            BookingError::Forbidden(_) => Self::new(StatusCode::FORBIDDEN, e.to_string(), code),
            BookingError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, e.to_string(), code),
            BookingError::Conflict(_) => Self::new(StatusCode::CONFLICT, e.to_string(), code),
            BookingError::Repository(d) => Self::internal(d, code),
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(e: JsonRejection) -> Self { Self::bad_request(e.body_text()) }
}

impl From<QueryRejection> for JsonApiError {
    fn from(e: QueryRejection) -> Self { Self::bad_request(e.body_text()) }
}

impl From<PathRejection> for JsonApiError {
    fn from(e: PathRejection) -> Self { Self::bad_request(e.body_text()) }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_http_statuses() {
        let cases: Vec<(JsonApiError, StatusCode)> = vec![
            (BookingError::Validation("x".into()).into(), StatusCode::BAD_REQUEST),
            (AuthError::TokenExpired.into(), StatusCode::UNAUTHORIZED),
            (BookingError::Forbidden("x".into()).into(), StatusCode::FORBIDDEN),
            (BookingError::NotFound("appointment".into()).into(), StatusCode::NOT_FOUND),
            (BookingError::Conflict("x".into()).into(), StatusCode::CONFLICT),
            (AuthError::Conflict.into(), StatusCode::CONFLICT),
        ];
        for (err, status) in cases {
            assert_eq!(err.status, status);
        }
    }

    #[test]
    fn storage_failures_hide_detail() {
        let err: JsonApiError = BookingError::Repository("relation \"appointment\" does not exist".into()).into();
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, INTERNAL_MESSAGE);
        assert_eq!(err.code, 2200);
    }
}
