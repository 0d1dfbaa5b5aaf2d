//! Mock implementations for testing.
//!
//! `MockLLMClient` replays scripted replies and records every prompt it is
//! sent, so tests can assert on prompt contents without a network.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use structured_chat::llm::LLMClient;
use structured_chat::types::{AppError, Result};

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    Text(String),
    Fail,
}

/// A prompt the mock received.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub prompt: String,
}

pub struct MockLLMClient {
    replies: Mutex<VecDeque<MockReply>>,
    fallback: MockReply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockLLMClient {
    /// Create a mock client that always returns the given response.
    pub fn new(response: &str) -> Self {
        Self::with_fallback(MockReply::Text(response.to_string()))
    }

    /// Create a mock client that always returns an error.
    pub fn failing() -> Self {
        Self::with_fallback(MockReply::Fail)
    }

    /// Replies in order, then keeps repeating the last one.
    pub fn scripted(responses: &[&str]) -> Self {
        let fallback = responses
            .last()
            .map(|r| MockReply::Text(r.to_string()))
            .unwrap_or(MockReply::Fail);
        let client = Self::with_fallback(fallback);
        client
            .replies
            .lock()
            .extend(responses.iter().map(|r| MockReply::Text(r.to_string())));
        client
    }

    fn with_fallback(fallback: MockReply) -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            fallback,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().last().map(|c| c.prompt.clone())
    }

    fn reply(&self, system: &str, prompt: &str) -> Result<String> {
        self.calls.lock().push(RecordedCall {
            system: system.to_string(),
            prompt: prompt.to_string(),
        });

        let next = self
            .replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        match next {
            MockReply::Text(text) => Ok(text),
            MockReply::Fail => Err(AppError::LLM("Mock LLM failure".to_string())),
        }
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String> {
        self.reply(system, prompt)
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// A well-formed four-field answer as compact JSON text.
pub fn answer_json(a: &str, b: &str, c: &str, summary: &str) -> String {
    serde_json::json!({
        "part_a": a,
        "part_b": b,
        "part_c": c,
        "summary": summary,
    })
    .to_string()
}

/// The same answer in the server's canonical (pretty) form.
pub fn answer_pretty(a: &str, b: &str, c: &str, summary: &str) -> String {
    let value: serde_json::Value = serde_json::from_str(&answer_json(a, b, c, summary)).unwrap();
    serde_json::to_string_pretty(&value).unwrap()
}
