//! Structured-answer contract and JSON coercion.
//!
//! Model output is not guaranteed to be pure JSON: it may be wrapped in
//! prose or code fences. [`coerce`] recovers the object in two stages:
//!
//! 1. parse the whole text as JSON;
//! 2. parse the slice from the first `{` to the last `}` (inclusive).
//!
//! The fallback is a pragmatic heuristic, not a JSON-in-text extractor. It
//! fails on stray braces outside the intended object and on text holding
//! several objects.
//!
//! Coercion does not check the four-field shape. [`StructuredAnswer`] is the
//! strict form, used where the shape actually matters (edit-policy checks).

use crate::types::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Names of the four fields, in canonical order.
pub const FIELD_NAMES: [&str; 4] = ["part_a", "part_b", "part_c", "summary"];

/// The fixed four-field answer contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct StructuredAnswer {
    /// Definition
    pub part_a: String,
    /// Explanation
    pub part_b: String,
    /// Examples
    pub part_c: String,
    /// Short summary
    pub summary: String,
}

impl StructuredAnswer {
    /// Strictly decodes a JSON value: exactly the four string fields.
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::deserialize(value).map_err(|e| {
            AppError::MalformedModelOutput(format!("not a structured answer: {}", e))
        })
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "part_a" => Some(self.part_a.as_str()),
            "part_b" => Some(self.part_b.as_str()),
            "part_c" => Some(self.part_c.as_str()),
            "summary" => Some(self.summary.as_str()),
            _ => None,
        }
    }

    /// Names of the fields whose text differs between `self` and `other`.
    pub fn changed_fields(&self, other: &StructuredAnswer) -> Vec<&'static str> {
        FIELD_NAMES
            .iter()
            .copied()
            .filter(|name| self.field(name) != other.field(name))
            .collect()
    }
}

/// Outcome of a successful coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Coercion {
    /// The whole text parsed as JSON.
    Direct(Value),
    /// Only the outermost-brace slice parsed.
    Recovered(Value),
}

impl Coercion {
    pub fn value(&self) -> &Value {
        match self {
            Coercion::Direct(v) | Coercion::Recovered(v) => v,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Coercion::Direct(v) | Coercion::Recovered(v) => v,
        }
    }

    pub fn is_recovered(&self) -> bool {
        matches!(self, Coercion::Recovered(_))
    }
}

/// Extracts a JSON value from raw model text.
pub fn coerce(text: &str) -> Result<Coercion> {
    let direct_err = match serde_json::from_str::<Value>(text) {
        Ok(value) => return Ok(Coercion::Direct(value)),
        Err(e) => e,
    };

    let slice = outermost_braces(text).ok_or_else(|| {
        AppError::MalformedModelOutput(format!(
            "no JSON object found in model output ({})",
            direct_err
        ))
    })?;

    serde_json::from_str::<Value>(slice)
        .map(Coercion::Recovered)
        .map_err(|e| {
            AppError::MalformedModelOutput(format!(
                "model output is not valid JSON: {} (fallback: {})",
                direct_err, e
            ))
        })
}

/// Slice from the first `{` through the last `}`, if they are in order.
fn outermost_braces(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Canonical text form: pretty-printed JSON with 2-space indentation.
pub fn serialize(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::Internal(format!("Failed to serialize answer: {}", e)))
}
