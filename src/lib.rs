//! # structured-chat
//!
//! A small chat server that forwards questions and feedback to a hosted
//! LLM, forces every answer into a fixed four-field JSON contract, and keeps
//! a conversation log so feedback can correct the previous answer.
//!
//! ## Answer contract
//!
//! ```json
//! {
//!   "part_a": "definition",
//!   "part_b": "explanation",
//!   "part_c": "examples",
//!   "summary": "short summary"
//! }
//! ```
//!
//! ## Library usage
//!
//! ```rust,ignore
//! use structured_chat::{AppConfig, ConversationLog, StructuredAssistant};
//! use std::sync::Arc;
//!
//! let config = AppConfig::default();
//! let llm = Arc::from(config.provider().create_client()?);
//! let assistant = StructuredAssistant::new(llm, config.feedback.clone());
//! let conversation = ConversationLog::new();
//!
//! let answer = assistant.generate(&conversation, "What is recursion?").await?;
//! let fixed = assistant.reconcile(&conversation, "part_c needs a Rust example").await?;
//! ```
//!
//! ## Modules
//!
//! - [`agents`] - Response generator and feedback reconciler
//! - [`api`] - REST handlers and routes
//! - [`llm`] - LLM client implementations
//! - [`memory`] - Conversation log
//! - [`structured`] - Answer contract and JSON coercion
//! - [`types`] - Request/response types and errors

#![warn(rustdoc::missing_crate_level_docs)]

/// Response generation and feedback reconciliation.
pub mod agents;
/// HTTP API handlers and routes.
pub mod api;
/// Command-line interface.
pub mod cli;
/// LLM provider clients and abstractions.
pub mod llm;
/// Conversation log.
pub mod memory;
/// Structured answer contract and JSON coercion.
pub mod structured;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use agents::{EditPolicy, StructuredAssistant};
pub use llm::{LLMClient, Provider};
pub use memory::ConversationLog;
pub use structured::{Coercion, StructuredAnswer};
pub use types::{AppError, Result};
pub use utils::config::AppConfig;

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Resolved configuration
    pub config: Arc<AppConfig>,
    /// Generator and reconciler bound to the model client
    pub assistant: Arc<StructuredAssistant>,
    /// The conversation this server instance records
    pub conversation: Arc<ConversationLog>,
}

impl AppState {
    /// Builds state around an existing client with an empty conversation.
    pub fn new(config: AppConfig, llm: Arc<dyn LLMClient>) -> Self {
        let assistant = StructuredAssistant::new(llm, config.feedback.clone());
        Self {
            config: Arc::new(config),
            assistant: Arc::new(assistant),
            conversation: Arc::new(ConversationLog::new()),
        }
    }
}
