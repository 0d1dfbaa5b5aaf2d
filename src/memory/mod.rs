//! Conversation memory for the structured-answer assistant.
//!
//! The [`ConversationLog`] is an ordered, append-only record of chat turns.
//! It is owned by the application state and handed explicitly to the
//! generator and reconciler; nothing in this crate reaches it through a
//! global.
//!
//! Turns are never removed. Restarting the process is the only reset.

use crate::types::{ChatTurn, MessageRole};
use parking_lot::RwLock;

/// The most recent user question and assistant answer in the log.
///
/// The two turns are not required to be adjacent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastExchange {
    pub question: String,
    pub response: String,
}

/// Ordered, append-only log of [`ChatTurn`]s.
#[derive(Debug, Default)]
pub struct ConversationLog {
    turns: RwLock<Vec<ChatTurn>>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single turn to the end of the log.
    pub fn append(&self, role: MessageRole, content: impl Into<String>) {
        self.turns.write().push(ChatTurn {
            role,
            content: content.into(),
        });
    }

    /// Appends a user turn followed by an assistant turn.
    ///
    /// Both turns are pushed under one write lock, so concurrent requests
    /// cannot interleave inside a pair.
    pub fn append_exchange(&self, question: impl Into<String>, response: impl Into<String>) {
        let mut turns = self.turns.write();
        turns.push(ChatTurn::user(question));
        turns.push(ChatTurn::assistant(response));
    }

    /// Returns an owned copy of every turn, oldest first.
    pub fn snapshot(&self) -> Vec<ChatTurn> {
        self.turns.read().clone()
    }

    pub fn len(&self) -> usize {
        self.turns.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.read().is_empty()
    }

    /// Scans from newest to oldest for the latest assistant answer and the
    /// latest user question, stopping once both are found.
    ///
    /// Returns `None` when either role is missing from the log.
    pub fn last_exchange(&self) -> Option<LastExchange> {
        let turns = self.turns.read();
        let mut question: Option<&str> = None;
        let mut response: Option<&str> = None;

        for turn in turns.iter().rev() {
            match turn.role {
                MessageRole::Assistant if response.is_none() => {
                    response = Some(turn.content.as_str())
                }
                MessageRole::User if question.is_none() => {
                    question = Some(turn.content.as_str())
                }
                _ => {}
            }

            if question.is_some() && response.is_some() {
                break;
            }
        }

        Some(LastExchange {
            question: question?.to_string(),
            response: response?.to_string(),
        })
    }
}

/// Renders turns as a plain transcript, one `"<role>: <content>"` line each.
pub fn format_transcript(turns: &[ChatTurn]) -> String {
    turns
        .iter()
        .map(|t| format!("{}: {}\n", t.role, t.content))
        .collect()
}
