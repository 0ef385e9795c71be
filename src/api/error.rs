//! Error types and response handling for the calculator API.
//!
//! Every failure becomes exactly one `{"detail": ...}` JSON response.
//! Internal failures are logged in full and reported with a generic message.

use axum::extract::rejection::BytesRejection;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::api::dto::ErrorBody;
use crate::api::validate::ValidationError;
use crate::calc::{DomainError, UnknownOperation};

/// Message returned to callers for any unexpected failure.
pub const INTERNAL_ERROR_DETAIL: &str = "Internal error";

/// Header carrying the id under which an internal failure was logged.
pub const ERROR_ID_HEADER: &str = "x-error-id";

/// Errors that can occur while serving a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing operands
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Mathematically undefined operation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Path does not name one of the six operations
    #[error(transparent)]
    UnknownOperation(#[from] UnknownOperation),

    /// No route matched
    #[error("Not Found")]
    NotFound,

    /// Route exists but not for this method
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Body could not be buffered (too large or interrupted)
    #[error(transparent)]
    Body(#[from] BytesRejection),

    /// Anything else; the message is logged, never returned
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Map error variant to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Domain(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownOperation(_) => StatusCode::NOT_FOUND,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the `detail` field of the response body.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Internal(_) => INTERNAL_ERROR_DETAIL.to_string(),
            ApiError::Body(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
                "Request body is too large".to_string()
            }
            ApiError::Body(_) => "Failed to read request body".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody {
            detail: self.detail(),
        });

        if let ApiError::Internal(message) = &self {
            let error_id = uuid::Uuid::new_v4().to_string();
            tracing::error!(error_id = %error_id, error = %message, "Unexpected failure");
            let mut response = (status, body).into_response();
            if let Ok(value) = HeaderValue::from_str(&error_id) {
                response.headers_mut().insert(ERROR_ID_HEADER, value);
            }
            return response;
        }

        tracing::warn!(status = status.as_u16(), detail = %self, "Request rejected");
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::validate::ValidationReason;

    #[test]
    fn test_validation_error_is_bad_request() {
        let err = ApiError::from(ValidationError::new("a", ValidationReason::WrongType));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.detail(), "Field 'a' must be a number");
    }

    #[test]
    fn test_domain_error_keeps_literal_message() {
        let err = ApiError::from(DomainError::DivisionByZero);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.detail(), "Division by zero is not allowed");
    }

    #[test]
    fn test_unknown_operation_is_not_found() {
        let err = ApiError::from(UnknownOperation("sqrt".to_string()));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.detail(), "Operation 'sqrt' not found");
    }

    #[test]
    fn test_method_not_allowed() {
        let err = ApiError::MethodNotAllowed;
        assert_eq!(err.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.detail(), "Method Not Allowed");
    }

    #[test]
    fn test_internal_error_hides_detail() {
        let err = ApiError::Internal("db password leaked in stack".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.detail(), INTERNAL_ERROR_DETAIL);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().contains_key(ERROR_ID_HEADER));
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }
}
