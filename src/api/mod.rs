//! HTTP API Handlers and Routes
//!
//! Built on Axum. Every endpoint is public; there is no authentication.
//!
//! # API Endpoints
//!
//! - `POST /chat` - `{"message": ...}` -> `{"response": ...}`
//! - `POST /feedback` - `{"feedback": ...}` -> `{"response": ...}`
//! - `GET /conversation` - recorded turns
//! - `GET /health` - liveness check
//! - `GET /api-docs/openapi.json` - OpenAPI document
//!
//! `response` is the structured answer serialized as indented JSON text,
//! not a nested object. Errors use `{"error": ..., "kind": ...}` with a
//! status per [`AppError`](crate::types::AppError) variant.

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

use crate::structured::StructuredAnswer;
use crate::types::{
    ChatRequest, ChatResponse, ChatTurn, ConversationResponse, ErrorBody, FeedbackRequest,
    MessageRole,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "structured-chat", description = "Structured-answer chat with feedback correction"),
    paths(
        handlers::chat::chat,
        handlers::chat::feedback,
        handlers::conversation::get_conversation,
    ),
    components(schemas(
        ChatRequest,
        FeedbackRequest,
        ChatResponse,
        ConversationResponse,
        ChatTurn,
        MessageRole,
        ErrorBody,
        StructuredAnswer,
    )),
    tags(
        (name = "chat", description = "Questions and feedback"),
        (name = "conversation", description = "Conversation log")
    )
)]
pub struct ApiDoc;
