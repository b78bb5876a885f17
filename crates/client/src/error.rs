//! Normalized error taxonomy for coordinator operations.
//!
//! Every HTTP outcome a coordinator can observe collapses into one
//! [`ApiError`] before it reaches a caller: field-keyed validation failures,
//! not-found lookups, server failures, and transport failures. Coordinators
//! never leak `reqwest` errors or raw response bodies past this boundary.

use std::collections::BTreeMap;

use thiserror::Error;

/// Field-keyed validation messages, e.g. `{"email": "Email is required."}`.
///
/// Single-message failures use the `"message"` key, matching the server's
/// `{"errors": {"message": "..."}}` envelope.
pub type FieldErrors = BTreeMap<String, String>;

/// The generic message shown for server and network failures.
///
/// These are not locally recoverable, so callers get a retry-later notice
/// rather than the underlying detail (which goes to the log instead).
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again";

/// A failed coordinator operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server rejected the request with field-keyed messages (4xx, or a
    /// 2xx body carrying an `errors` payload). Recoverable: shown inline on
    /// the originating form. The cache is untouched.
    #[error("validation failed: {}", format_fields(.0))]
    Validation(FieldErrors),

    /// The requested entity does not exist (404). Recoverable: renders a
    /// dedicated not-found view.
    #[error("not found: {0}")]
    NotFound(String),

    /// The server failed (5xx). Not recoverable locally.
    #[error("server error: {0}")]
    Server(String),

    /// The request could not complete at all. Treated like [`Self::Server`]
    /// by consumers, but kept distinct for logging.
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// A server failure carrying the generic retry-later message.
    #[must_use]
    pub fn generic_server() -> Self {
        Self::Server(GENERIC_FAILURE.to_owned())
    }

    /// A validation error with a single `"message"` entry.
    #[must_use]
    pub fn message(text: impl Into<String>) -> Self {
        let mut fields = FieldErrors::new();
        fields.insert("message".to_owned(), text.into());
        Self::Validation(fields)
    }

    /// The field-keyed messages, when this is a validation failure.
    #[must_use]
    pub const fn fields(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(fields) => Some(fields),
            _ => None,
        }
    }

    /// The message suitable for end users. Server and network failures are
    /// flattened to [`GENERIC_FAILURE`]; the detail stays in the logs.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(fields) => format_fields(fields),
            Self::NotFound(message) => message.clone(),
            Self::Server(_) | Self::Network(_) => GENERIC_FAILURE.to_owned(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

fn format_fields(fields: &FieldErrors) -> String {
    if fields.is_empty() {
        return "(no details provided)".to_owned();
    }
    fields
        .iter()
        .map(|(field, message)| {
            if field == "message" {
                message.clone()
            } else {
                format!("{field}: {message}")
            }
        })
        .collect::<Vec<_>>()
        .join("; ")
}
