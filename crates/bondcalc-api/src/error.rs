//! API error types.
//!
//! Handlers return [`ApiError`]. Its response carries the error body both as
//! JSON and as a response extension; [`error_envelope`](crate::server::error_envelope)
//! uses the extension to stamp the request path onto the final payload, and
//! builds a body with [`ErrorBody::from_status`] for error responses that
//! axum produces itself.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bondcalc_core::BondCalcError;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A single rejected request field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Name of the offending field, as sent by the caller.
    pub field: String,
    /// Human-readable reason.
    pub message: String,
}

impl FieldError {
    /// Creates a field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// API error type.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed validation; every violation is listed.
    #[error("Validation failed: {} invalid field(s)", .0.len())]
    Validation(Vec<FieldError>),

    /// Valid-looking input the engine could not process.
    #[error("Business rule violated: {0}")]
    BusinessRule(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error. The message is logged, never returned.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status and machine-readable code for this error.
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::BusinessRule(_) => (StatusCode::UNPROCESSABLE_ENTITY, "BUSINESS_RULE_ERROR"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// Error body details.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    /// Field-level violations, present for validation errors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
    /// RFC 3339 time the error was produced.
    pub timestamp: String,
    /// Request path that produced the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl ErrorBody {
    fn from_error(err: ApiError) -> Self {
        let (_, code) = err.status_and_code();
        let message = match &err {
            ApiError::Internal(_) => "An unexpected error occurred".to_string(),
            other => other.to_string(),
        };
        let errors = match err {
            ApiError::Validation(errors) => errors,
            _ => Vec::new(),
        };

        Self {
            code: code.to_string(),
            message,
            errors,
            timestamp: now(),
            path: None,
        }
    }

    /// Body for an error status produced outside the handlers, such as a
    /// method mismatch or an oversized request body.
    pub fn from_status(status: StatusCode) -> Self {
        let reason = status.canonical_reason().unwrap_or("Request failed");
        let message = if status.is_server_error() {
            "An unexpected error occurred".to_string()
        } else {
            reason.to_string()
        };

        Self {
            code: reason.to_ascii_uppercase().replace([' ', '-'], "_"),
            message,
            errors: Vec::new(),
            timestamp: now(),
            path: None,
        }
    }

    /// Attaches the request path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Renders the body with the given status.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        let mut response = (status, Json(ErrorResponse { error: self.clone() })).into_response();
        response.extensions_mut().insert(self);
        response
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, _) = self.status_and_code();
        match &self {
            ApiError::Internal(detail) => tracing::error!(%detail, "internal error"),
            ApiError::BusinessRule(reason) => tracing::warn!(%reason, "business rule violated"),
            ApiError::Validation(errors) => {
                tracing::info!(violations = errors.len(), "request failed validation");
            }
            ApiError::NotFound(what) => tracing::debug!(%what, "not found"),
        }

        ErrorBody::from_error(self).into_response_with(status)
    }
}

// Conversions from domain errors
impl From<BondCalcError> for ApiError {
    fn from(err: BondCalcError) -> Self {
        ApiError::BusinessRule(err.to_string())
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation(vec![]).status_and_code().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::BusinessRule("x".into()).status_and_code().0,
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status_and_code().0,
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("x".into()).status_and_code().0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_is_opaque() {
        let body = ErrorBody::from_error(ApiError::Internal("db password leaked".into()));
        assert_eq!(body.code, "INTERNAL_ERROR");
        assert!(!body.message.contains("password"));
    }

    #[test]
    fn test_validation_body_lists_fields() {
        let body = ErrorBody::from_error(ApiError::Validation(vec![
            FieldError::new("faceValue", "faceValue must not be less than 1"),
            FieldError::new("couponRate", "couponRate is required"),
        ]));
        assert_eq!(body.errors.len(), 2);
        assert!(body.message.contains("2 invalid field(s)"));
        assert!(!body.timestamp.is_empty());
    }

    #[test]
    fn test_engine_error_is_business_rule() {
        let err: ApiError = BondCalcError::business_rule("period count overflow").into();
        assert!(matches!(err, ApiError::BusinessRule(_)));
    }

    #[test]
    fn test_body_from_framework_status() {
        let body = ErrorBody::from_status(StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body.code, "METHOD_NOT_ALLOWED");
        assert_eq!(body.message, "Method Not Allowed");

        let body = ErrorBody::from_status(StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body.code, "PAYLOAD_TOO_LARGE");

        let body = ErrorBody::from_status(StatusCode::BAD_GATEWAY);
        assert_eq!(body.message, "An unexpected error occurred");
    }

    #[test]
    fn test_response_carries_body_extension() {
        let response = ApiError::NotFound("route".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(response.extensions().get::<ErrorBody>().is_some());
    }
}
