//! Structured-answer assistant
//!
//! [`StructuredAssistant`] owns the model client and the feedback settings.
//! The conversation log is not part of it: callers pass the
//! [`ConversationLog`](crate::memory::ConversationLog) they own into
//! [`generate`](StructuredAssistant::generate) and
//! [`reconcile`](StructuredAssistant::reconcile).

pub mod generator;
pub mod prompts;
pub mod reconciler;

use crate::llm::LLMClient;
use crate::structured::{self, Coercion};
use crate::types::Result;
use crate::utils::config::FeedbackConfig;
use std::sync::Arc;

pub use reconciler::EditPolicy;

pub struct StructuredAssistant {
    llm: Arc<dyn LLMClient>,
    feedback: FeedbackConfig,
}

impl StructuredAssistant {
    pub fn new(llm: Arc<dyn LLMClient>, feedback: FeedbackConfig) -> Self {
        Self { llm, feedback }
    }

    pub fn feedback_config(&self) -> &FeedbackConfig {
        &self.feedback
    }

    pub fn model_name(&self) -> &str {
        self.llm.model_name()
    }

    /// Sends `prompt` under the JSON contract and coerces the reply.
    async fn invoke(&self, prompt: &str) -> Result<Coercion> {
        let raw = self
            .llm
            .generate_with_system(prompts::SYSTEM_PROMPT, prompt)
            .await?;

        let coerced = structured::coerce(&raw)?;
        if coerced.is_recovered() {
            tracing::debug!(
                model = self.llm.model_name(),
                "Model output needed outermost-brace recovery"
            );
        }
        Ok(coerced)
    }
}
