//! Prompt text for the structured-answer assistant.

use crate::memory::format_transcript;
use crate::types::ChatTurn;

/// System instruction sent with every request: the JSON contract.
pub const SYSTEM_PROMPT: &str = r#"You are an expert AI assistant.

You MUST ALWAYS respond ONLY in valid JSON.

JSON format:
{
  "part_a": "definition",
  "part_b": "explanation",
  "part_c": "examples",
  "summary": "short summary"
}

Rules:
- Always answer based on the user's original question.
- Always correct factual errors when feedback is provided.
- If feedback refers to a specific part, modify ONLY that part.
- Keep the other parts unchanged.
- Never output anything outside JSON."#;

/// Prompt used for feedback when the log holds no previous exchange.
pub const NO_HISTORY_PROMPT: &str = "No previous response available.";

/// Builds the prompt for a new question: transcript first, then the question.
pub fn generation_prompt(history: &[ChatTurn], question: &str) -> String {
    format!(
        "Conversation history:\n{}\nOriginal user question:\n{}\n\nGenerate accurate structured response.\n",
        format_transcript(history),
        question
    )
}

/// Builds the corrective prompt for a feedback turn.
///
/// `previous` is embedded verbatim so the model can copy untouched fields.
pub fn feedback_prompt(question: &str, previous: &str, feedback: &str) -> String {
    format!(
        r#"Original user question:
{question}

Previous JSON response:
{previous}

User feedback:
{feedback}

Instructions:

1. Identify which part (part_a, part_b, part_c, summary) the feedback refers to.
2. Modify ONLY that part based on the feedback.
3. Keep the other parts EXACTLY the same.
4. Return the FULL corrected JSON.

Return ONLY JSON.
"#
    )
}
