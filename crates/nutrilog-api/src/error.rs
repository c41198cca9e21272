//! Webhook error handling.
//!
//! The chat platform expects a well-formed envelope for every call, so
//! failures are logged and rendered as a fixed "server error" reply with
//! status 200 rather than as an HTTP error.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::envelope::SkillResponse;

/// Reply sent for any failure while handling a webhook call.
pub const SERVER_ERROR_MESSAGE: &str = "⚠️ 서버 오류가 발생했습니다.";

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The body could not be read or is not a skill request envelope.
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    /// Unexpected failure inside the service.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for WebhookError {
    fn from(err: serde_json::Error) -> Self {
        WebhookError::MalformedRequest(err.to_string())
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        match &self {
            WebhookError::MalformedRequest(msg) => {
                tracing::warn!(error = %msg, "Rejected malformed webhook request")
            }
            WebhookError::Internal(msg) => {
                tracing::error!(error = %msg, "Webhook handler failed")
            }
        }

        (
            StatusCode::OK,
            Json(SkillResponse::simple_text(SERVER_ERROR_MESSAGE)),
        )
            .into_response()
    }
}

/// Panic handler for `CatchPanicLayer`: turns a panic into the server-error
/// envelope.
pub fn panic_reply(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    WebhookError::Internal(format!("panic: {detail}")).into_response()
}
