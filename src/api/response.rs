//! Response types for the payroll API.
//!
//! Every failure the API can report is an [`ApiFailure`]: status 400 with the
//! underlying error's message as a plain-text body. Store faults, overflow and
//! unreadable request bodies look the same to callers.

use axum::{
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::EngineError;

/// The single failure result of the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    /// Human-readable error message returned as the response body.
    pub message: String,
}

impl ApiFailure {
    /// Creates a failure carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The status code every failure maps to.
    pub const STATUS: StatusCode = StatusCode::BAD_REQUEST;
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (
            Self::STATUS,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.message,
        )
            .into_response()
    }
}

impl From<EngineError> for ApiFailure {
    fn from(error: EngineError) -> Self {
        Self::new(error.to_string())
    }
}

impl From<JsonRejection> for ApiFailure {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_failure_is_400_with_plain_text_message() {
        let response = ApiFailure::new("Something broke").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/plain; charset=utf-8"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Something broke");
    }

    #[test]
    fn test_every_engine_error_collapses_to_its_message() {
        let errors = vec![
            EngineError::data_access("attendance records", "offline"),
            EngineError::overflow("base salary"),
            EngineError::ConfigNotFound {
                path: "settings.yaml".to_string(),
            },
        ];

        for error in errors {
            let expected = error.to_string();
            let failure: ApiFailure = error.into();
            assert_eq!(failure.message, expected);
        }
    }
}
