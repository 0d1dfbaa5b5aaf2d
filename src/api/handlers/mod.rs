//! API request handlers.

/// Question and feedback handlers.
pub mod chat;
/// Read-only conversation view.
pub mod conversation;

use crate::types::{AppError, Result};
use axum::extract::FromRequest;

/// JSON body extractor whose rejections render as [`AppError::InvalidInput`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Rejects whitespace-only input before any model call.
pub(crate) fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(value)
}
