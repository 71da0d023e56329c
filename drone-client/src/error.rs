//! Client error types

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Every failure of a gateway call
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Connection or transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("{message} ({status})")]
    Status { status: StatusCode, message: String },

    /// Body could not be parsed
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error body shapes the backend is known to send
#[derive(Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl NetworkError {
    /// Build a status error, preferring the backend-supplied message.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or(b.error))
            .filter(|m| !m.trim().is_empty())
            .or_else(|| {
                let text = body.trim();
                (!text.is_empty() && !text.starts_with('{')).then(|| text.to_string())
            })
            .unwrap_or_else(|| "Network response was not ok".to_string());
        NetworkError::Status { status, message }
    }

    /// HTTP status, when the backend answered
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            NetworkError::Status { status, .. } => Some(*status),
            NetworkError::Http(e) => e.status(),
            NetworkError::Decode(_) => None,
        }
    }

    /// Text suitable for an error banner
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, NetworkError>;
