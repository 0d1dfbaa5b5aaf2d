use super::{prompts, StructuredAssistant};
use crate::memory::ConversationLog;
use crate::structured;
use crate::types::Result;

impl StructuredAssistant {
    /// Answers a new question in the structured format.
    ///
    /// The prompt carries the full transcript so follow-ups resolve against
    /// earlier answers. On success the question and the serialized answer
    /// are appended to `conversation` as one user/assistant pair; on failure
    /// nothing is recorded.
    pub async fn generate(&self, conversation: &ConversationLog, question: &str) -> Result<String> {
        let history = conversation.snapshot();
        let prompt = prompts::generation_prompt(&history, question);

        tracing::debug!(history_turns = history.len(), "Generating structured answer");

        let coerced = self.invoke(&prompt).await?;
        let output = structured::serialize(coerced.value())?;

        conversation.append_exchange(question, output.as_str());
        Ok(output)
    }
}
