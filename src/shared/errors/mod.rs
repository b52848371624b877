//! Error Types
//!
//! Fixed catalog of API error codes plus the structured error returned to
//! clients, with proper HTTP status code mapping.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Enumerable catalog of client-facing error codes and their default messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    BadRequest,
    ValidationFailed,
    Unauthorized,
    NotFound,
    InternalServerError,
    SomethingWentWrong,
}

impl ErrorCode {
    /// Stable machine-readable code string
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::ValidationFailed => "VALIDATION_FAILED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::NotFound => "NOT_FOUND",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
            Self::SomethingWentWrong => "SOMETHING_WENT_WRONG",
        }
    }

    /// Default human-readable message
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad request",
            Self::ValidationFailed => "Validation failed",
            Self::Unauthorized => "Unauthorized: user not authenticated",
            Self::NotFound => "Resource not found",
            Self::InternalServerError => "Internal server error",
            Self::SomethingWentWrong => "Something went wrong",
        }
    }
}

/// Repository-level errors for data access failures
///
/// "Zero rows matched" is reported as `NotFound` so callers can tell it apart
/// from a query execution failure.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("entity not found: {0}")]
    NotFound(String),
}

/// Structured API error carrying a catalog entry, an HTTP status, optional
/// details, and an operational flag
///
/// Operational errors are expected client-facing conditions (400/401/404);
/// non-operational errors are unexpected server faults (500). The flag drives
/// log severity when the error is rendered.
#[derive(Debug, Error)]
#[error("{}: {}", .code.code(), .code.message())]
pub struct ApiError {
    code: ErrorCode,
    status: StatusCode,
    details: Option<serde_json::Value>,
    operational: bool,
}

impl ApiError {
    fn new(
        status: StatusCode,
        code: ErrorCode,
        details: Option<serde_json::Value>,
        operational: bool,
    ) -> Self {
        Self {
            code,
            status,
            details,
            operational,
        }
    }

    /// 400 Bad Request (operational)
    #[must_use]
    pub fn bad_request(code: ErrorCode, details: Option<serde_json::Value>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, code, details, true)
    }

    /// 401 Unauthorized (operational)
    #[must_use]
    pub fn authentication(code: ErrorCode, details: Option<serde_json::Value>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, code, details, true)
    }

    /// 404 Not Found (operational)
    #[must_use]
    pub fn not_found(code: ErrorCode, details: Option<serde_json::Value>) -> Self {
        Self::new(StatusCode::NOT_FOUND, code, details, true)
    }

    /// 500 Internal Server Error (non-operational)
    #[must_use]
    pub fn internal_server(code: ErrorCode, details: Option<serde_json::Value>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, code, details, false)
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    #[must_use]
    pub fn is_operational(&self) -> bool {
        self.operational
    }
}

/// Error envelope body
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    code: &'static str,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.operational {
            tracing::warn!(code = self.code.code(), status = %self.status, "request failed");
        } else {
            tracing::error!(code = self.code.code(), status = %self.status, "request failed");
        }

        let body = ErrorBody {
            success: false,
            code: self.code.code(),
            message: self.code.message(),
            details: self.details,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<uuid::Error> for ApiError {
    fn from(err: uuid::Error) -> Self {
        Self::bad_request(
            ErrorCode::BadRequest,
            Some(serde_json::json!(format!("invalid UUID: {err}"))),
        )
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let details: Vec<serde_json::Value> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    serde_json::json!({
                        "field": field,
                        "message": e.message.as_ref().map_or("invalid", |m| m.as_ref()),
                    })
                })
            })
            .collect();
        Self::bad_request(ErrorCode::ValidationFailed, Some(serde_json::json!(details)))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        Self::bad_request(
            ErrorCode::BadRequest,
            Some(serde_json::json!(err.body_text())),
        )
    }
}

impl From<QueryRejection> for ApiError {
    fn from(err: QueryRejection) -> Self {
        Self::bad_request(
            ErrorCode::BadRequest,
            Some(serde_json::json!(err.body_text())),
        )
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(what) => {
                Self::not_found(ErrorCode::NotFound, Some(serde_json::json!(what)))
            }
            // Storage failures stay opaque to clients
            RepositoryError::Database(db_err) => {
                tracing::error!(error = %db_err, "storage failure");
                Self::internal_server(ErrorCode::InternalServerError, None)
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!(error = %err, "unhandled error");
        Self::internal_server(ErrorCode::InternalServerError, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_codes_are_stable() {
        assert_eq!(ErrorCode::BadRequest.code(), "BAD_REQUEST");
        assert_eq!(ErrorCode::ValidationFailed.code(), "VALIDATION_FAILED");
        assert_eq!(ErrorCode::Unauthorized.code(), "UNAUTHORIZED");
        assert_eq!(ErrorCode::NotFound.code(), "NOT_FOUND");
        assert_eq!(ErrorCode::InternalServerError.code(), "INTERNAL_SERVER_ERROR");
        assert_eq!(ErrorCode::SomethingWentWrong.code(), "SOMETHING_WENT_WRONG");
    }

    #[test]
    fn factories_pin_status_and_operational_flag() {
        let bad = ApiError::bad_request(ErrorCode::BadRequest, None);
        assert_eq!(bad.status(), StatusCode::BAD_REQUEST);
        assert!(bad.is_operational());

        let auth = ApiError::authentication(ErrorCode::Unauthorized, None);
        assert_eq!(auth.status(), StatusCode::UNAUTHORIZED);
        assert!(auth.is_operational());

        let missing = ApiError::not_found(ErrorCode::NotFound, None);
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert!(missing.is_operational());

        let internal = ApiError::internal_server(ErrorCode::InternalServerError, None);
        assert_eq!(internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!internal.is_operational());
    }

    #[test]
    fn repository_not_found_maps_to_404() {
        let err = ApiError::from(RepositoryError::NotFound("example".to_string()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[test]
    fn repository_database_error_maps_to_500_without_details() {
        let err = ApiError::from(RepositoryError::Database(sqlx::Error::RowNotFound));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.is_operational());
        assert!(err.details.is_none());
    }

    #[test]
    fn invalid_uuid_maps_to_400() {
        let parse_err = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
        let err = ApiError::from(parse_err);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code(), ErrorCode::BadRequest);
    }
}
