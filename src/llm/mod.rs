//! LLM Provider Clients and Abstractions
//!
//! - [`LLMClient`] - The core trait that providers implement
//! - [`Provider`] - Runtime provider selection
//! - [`openai::OpenAIClient`] - OpenAI-compatible chat completions over `reqwest`
//!
//! # Example
//!
//! ```ignore
//! use structured_chat::llm::{GenerationParams, Provider};
//!
//! let provider = Provider::OpenAI {
//!     api_key: std::env::var("GROQ_API_KEY").ok(),
//!     api_base: "https://api.groq.com/openai/v1".to_string(),
//!     model: "llama-3.3-70b-versatile".to_string(),
//!     params: GenerationParams::default(),
//! };
//! let client = provider.create_client()?;
//! let text = client.generate_with_system("Reply in JSON.", "What is 2+2?").await?;
//! ```

/// Core LLM client trait and provider selection.
pub mod client;
/// OpenAI-compatible HTTP client.
pub mod openai;

pub use client::{GenerationParams, LLMClient, Provider};
