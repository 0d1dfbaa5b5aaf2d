//! LLM client abstraction
//!
//! The assistant only ever needs one call shape: a fixed system instruction
//! plus a single user prompt, answered with the text of the top choice.
//! Providers implement [`LLMClient`] so handlers and tests can swap the
//! hosted API for a mock.

use crate::types::Result;
use async_trait::async_trait;

/// Generic LLM client trait for provider abstraction
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Generate a completion for `prompt` under the `system` instruction
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String>;

    /// Get the model name/identifier
    fn model_name(&self) -> &str;
}

/// Sampling and transport parameters applied to every request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Sampling temperature; 0 asks for deterministic output
    pub temperature: f32,
    /// Whole-request timeout in seconds; `None` waits indefinitely
    pub timeout_secs: Option<u64>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.0,
            timeout_secs: Some(60),
        }
    }
}

/// Provider enum for runtime selection
#[derive(Debug, Clone)]
pub enum Provider {
    /// Any OpenAI-compatible chat-completions endpoint (OpenAI, Groq, ...)
    ///
    /// # Example
    /// ```rust,ignore
    /// let provider = Provider::OpenAI {
    ///     api_key: std::env::var("GROQ_API_KEY").ok(),
    ///     api_base: "https://api.groq.com/openai/v1".to_string(),
    ///     model: "llama-3.3-70b-versatile".to_string(),
    ///     params: GenerationParams::default(),
    /// };
    /// ```
    OpenAI {
        /// Missing keys are tolerated here and reported on first request
        api_key: Option<String>,
        api_base: String,
        model: String,
        params: GenerationParams,
    },
}

impl Provider {
    /// Create a client instance for this provider
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn create_client(&self) -> Result<Box<dyn LLMClient>> {
        match self {
            Provider::OpenAI {
                api_key,
                api_base,
                model,
                params,
            } => Ok(Box::new(super::openai::OpenAIClient::new(
                api_key.clone(),
                api_base.clone(),
                model.clone(),
                params.clone(),
            )?)),
        }
    }

    /// Get a human-readable name for this provider
    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAI { .. } => "OpenAI",
        }
    }

    pub fn model(&self) -> &str {
        match self {
            Provider::OpenAI { model, .. } => model,
        }
    }
}
