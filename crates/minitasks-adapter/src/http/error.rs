/*
[INPUT]:  Error sources (transport, non-2xx status, serialization, URL)
[OUTPUT]: Structured error types with status context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the task service adapter
#[derive(Error, Debug)]
pub enum TasksError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("{status}: {message}")]
    Api { status: StatusCode, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TasksError {
    /// Status code of the failed response, if the service answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TasksError::Api { status, .. } => Some(*status),
            TasksError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Create an API error from a status code and the raw response body.
    ///
    /// FastAPI-style `{"detail": "..."}` bodies are unwrapped; an empty body
    /// falls back to the canonical reason phrase.
    pub fn api_error(status: StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("detail").and_then(|d| d.as_str()).map(str::to_string));

        let message = match detail {
            Some(detail) => detail,
            None if body.trim().is_empty() => {
                status.canonical_reason().unwrap_or("request failed").to_string()
            }
            None => body.trim().to_string(),
        };

        TasksError::Api { status, message }
    }
}

/// Result type alias for task service operations
pub type Result<T> = std::result::Result<T, TasksError>;
