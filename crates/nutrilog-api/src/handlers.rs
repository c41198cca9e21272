//! Webhook handler for nutrition queries.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use uuid::Uuid;

use crate::envelope::{SkillRequest, SkillResponse};
use crate::error::WebhookError;
use crate::state::AppState;

/// POST webhook - answer a nutrition question from the chat platform.
///
/// The body is decoded by hand so that unreadable or non-JSON bodies reach
/// [`WebhookError`] instead of axum's default 4xx rejections.
pub async fn nutrition(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SkillResponse>, WebhookError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("webhook", %request_id);
    span.in_scope(|| handle(&state, body))
}

fn handle(
    state: &AppState,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SkillResponse>, WebhookError> {
    let body = body.map_err(|e| WebhookError::MalformedRequest(e.body_text()))?;
    let request: SkillRequest = serde_json::from_slice(&body)?;

    let reply = match request.user_request.utterance_text() {
        Some(utterance) => state.assistant.respond(utterance),
        None => {
            tracing::debug!("Request has no text utterance");
            state.assistant.respond_without_utterance()
        }
    };

    let date = reply
        .date
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    tracing::info!(kind = ?reply.kind, date = %date, "Nutrition reply sent");

    Ok(Json(SkillResponse::simple_text(reply.text)))
}
