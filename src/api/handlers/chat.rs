use crate::{
    AppState,
    api::handlers::{AppJson, require_text},
    types::{ChatRequest, ChatResponse, ErrorBody, FeedbackRequest, Result},
};
use axum::{Json, extract::State};

/// Ask a new question and receive a structured answer
#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Structured answer as pretty-printed JSON text", body = ChatResponse),
        (status = 400, description = "Empty message or unreadable body", body = ErrorBody),
        (status = 502, description = "Model output was not JSON", body = ErrorBody),
        (status = 503, description = "Model API call failed", body = ErrorBody)
    ),
    tag = "chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let message = require_text("message", &payload.message)?;
    tracing::info!(chars = message.chars().count(), "Chat request");

    let response = state
        .assistant
        .generate(&state.conversation, message)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Chat request failed"))?;

    Ok(Json(ChatResponse { response }))
}

/// Correct one field of the previous answer
#[utoipa::path(
    post,
    path = "/feedback",
    request_body = FeedbackRequest,
    responses(
        (status = 200, description = "Corrected answer as pretty-printed JSON text", body = ChatResponse),
        (status = 400, description = "Empty feedback or unreadable body", body = ErrorBody),
        (status = 422, description = "Feedback changed more than one field (reject policy)", body = ErrorBody),
        (status = 502, description = "Model output was not JSON", body = ErrorBody),
        (status = 503, description = "Model API call failed", body = ErrorBody)
    ),
    tag = "chat"
)]
pub async fn feedback(
    State(state): State<AppState>,
    AppJson(payload): AppJson<FeedbackRequest>,
) -> Result<Json<ChatResponse>> {
    let feedback = require_text("feedback", &payload.feedback)?;
    tracing::info!(chars = feedback.chars().count(), "Feedback request");

    let response = state
        .assistant
        .reconcile(&state.conversation, feedback)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Feedback request failed"))?;

    Ok(Json(ChatResponse { response }))
}
