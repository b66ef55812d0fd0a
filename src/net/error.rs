//! Uniform error type for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Pages never inspect raw responses. Every failure arrives as an `ApiError`
//! and is turned into notice text with `user_message`, which prefers the
//! backend's own wording and otherwise uses the caller's fallback.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Failure of a backend request or of local input validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Rejected locally before any request was sent.
    #[error("{0}")]
    Validation(String),
    /// Backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
        details: Option<String>,
    },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),
    /// A 2xx response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the hydrated browser client.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error from a raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<Value>(body).ok();
        let message = parsed.as_ref().and_then(body_error_message);
        let details = parsed
            .as_ref()
            .and_then(|v| v.get("details"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);
        Self::Status { status, message, details }
    }

    /// Text the backend (or local validation) supplied, if any.
    pub fn backend_message(&self) -> Option<String> {
        match self {
            Self::Validation(message) => Some(message.clone()),
            Self::Status { message: Some(message), details: Some(details), .. } => {
                Some(format!("{message} - {details}"))
            }
            Self::Status { message: Some(message), details: None, .. } => Some(message.clone()),
            _ => None,
        }
    }

    /// Notice text: the backend message when present, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or_else(|| fallback.to_owned())
    }

    /// `true` for 401/403 responses.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

/// Extract `error`, else `message`, from a JSON error body.
pub fn body_error_message(body: &Value) -> Option<String> {
    ["error", "message"].iter().find_map(|field| {
        body.get(field)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
    })
}
