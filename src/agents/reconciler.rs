use super::{prompts, StructuredAssistant};
use crate::memory::ConversationLog;
use crate::structured::{self, StructuredAnswer};
use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What to do when a feedback turn changes more than one field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditPolicy {
    /// Accept the model output as-is.
    Trust,
    /// Accept, but log the extra edits.
    #[default]
    Warn,
    /// Fail the request with [`AppError::EditViolation`]; nothing is recorded.
    Reject,
}

impl StructuredAssistant {
    /// Applies user feedback to the most recent structured answer.
    ///
    /// With fewer than two turns in the log there is nothing to correct: the
    /// model is sent [`prompts::NO_HISTORY_PROMPT`] instead, and the exchange
    /// is only recorded when `record_fallback` is enabled.
    pub async fn reconcile(&self, conversation: &ConversationLog, feedback: &str) -> Result<String> {
        let last = match conversation.last_exchange() {
            Some(last) if conversation.len() >= 2 => last,
            _ => return self.reconcile_without_history(conversation, feedback).await,
        };

        let prompt = prompts::feedback_prompt(&last.question, &last.response, feedback);
        let coerced = self.invoke(&prompt).await?;

        self.check_single_field_edit(&last.response, coerced.value())?;

        let output = structured::serialize(coerced.value())?;
        conversation.append_exchange(feedback, output.as_str());
        Ok(output)
    }

    async fn reconcile_without_history(
        &self,
        conversation: &ConversationLog,
        feedback: &str,
    ) -> Result<String> {
        tracing::info!(
            turns = conversation.len(),
            "Feedback received without a previous answer"
        );

        let coerced = self.invoke(prompts::NO_HISTORY_PROMPT).await?;
        let output = structured::serialize(coerced.value())?;

        if self.feedback.record_fallback {
            conversation.append_exchange(feedback, output.as_str());
        }
        Ok(output)
    }

    /// Compares the corrected answer against the previous one and applies
    /// the configured [`EditPolicy`].
    ///
    /// Answers that do not decode into the four-field shape are let through;
    /// the policy only judges well-formed pairs.
    fn check_single_field_edit(&self, previous: &str, corrected: &Value) -> Result<()> {
        if self.feedback.edit_policy == EditPolicy::Trust {
            return Ok(());
        }

        let before = structured::coerce(previous)
            .and_then(|c| StructuredAnswer::from_value(c.value()));
        let after = StructuredAnswer::from_value(corrected);

        let (before, after) = match (before, after) {
            (Ok(b), Ok(a)) => (b, a),
            _ => {
                tracing::debug!("Skipping edit check: answer is not in the four-field shape");
                return Ok(());
            }
        };

        let changed = before.changed_fields(&after);
        match changed.len() {
            0 => {
                tracing::debug!("Feedback left every field unchanged");
                Ok(())
            }
            1 => {
                tracing::debug!(field = changed[0], "Feedback edited a single field");
                Ok(())
            }
            _ => {
                let fields = changed.join(", ");
                match self.feedback.edit_policy {
                    EditPolicy::Reject => Err(AppError::EditViolation(format!(
                        "feedback changed {} fields: {}",
                        changed.len(),
                        fields
                    ))),
                    _ => {
                        tracing::warn!(fields = %fields, "Feedback edited more than one field");
                        Ok(())
                    }
                }
            }
        }
    }
}
