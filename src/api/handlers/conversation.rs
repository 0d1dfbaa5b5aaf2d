use crate::{
    AppState,
    types::{ConversationResponse, Result},
};
use axum::{Json, extract::State};

/// Snapshot of the conversation log, oldest turn first
#[utoipa::path(
    get,
    path = "/conversation",
    responses(
        (status = 200, description = "All recorded turns", body = ConversationResponse)
    ),
    tag = "conversation"
)]
pub async fn get_conversation(State(state): State<AppState>) -> Result<Json<ConversationResponse>> {
    Ok(Json(ConversationResponse {
        turns: state.conversation.snapshot(),
    }))
}
