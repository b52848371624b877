//! Response Envelope
//!
//! Canonical JSON success wrapper for API responses. The failure counterpart
//! is rendered by `ApiError` so that exactly one of `data` or the error
//! fields is populated per response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Success envelope body
#[derive(Debug, Serialize)]
pub struct SuccessBody<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

/// A successful API response: payload plus status and an optional message
#[derive(Debug)]
pub struct ApiSuccess<T> {
    status: StatusCode,
    message: Option<String>,
    data: T,
}

impl<T> ApiSuccess<T> {
    /// 200 OK with the given payload
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            message: None,
            data,
        }
    }

    /// 201 Created with the given payload
    #[must_use]
    pub fn created(data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            message: None,
            data,
        }
    }

    /// Attach a human-readable message to the envelope
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        let body = SuccessBody {
            success: true,
            message: self.message,
            data: self.data,
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_serializes_flag_and_data() {
        let body = SuccessBody {
            success: true,
            message: None,
            data: serde_json::json!({"name": "test"}),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["name"], "test");
        assert!(json.get("message").is_none());
    }

    #[test]
    fn success_body_includes_message_when_set() {
        let body = SuccessBody {
            success: true,
            message: Some("created".to_string()),
            data: serde_json::Value::Null,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["message"], "created");
        assert_eq!(json["data"], serde_json::Value::Null);
    }
}
