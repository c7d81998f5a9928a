//! Errors surfaced by the submit → request → render cycle.

use thiserror::Error;

use super::category::ErrorCategory;

/// Shown when the topic is empty after trimming.
pub const EMPTY_TOPIC_MESSAGE: &str = "Please enter a topic";

/// Used when a non-2xx response carries no usable `detail`.
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to generate tweet";

/// Used when a transport failure carries no message of its own.
pub const NETWORK_FALLBACK_MESSAGE: &str = "Failed to generate tweet. Please try again.";

/// Failure of one submission. Both variants render identically: a single
/// error panel showing [`FlowError::message`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// Topic rejected before any request was sent
    #[error("{message}")]
    Validation { message: String },

    /// Non-2xx response (`status` set) or no response at all (`status` unset)
    #[error("{message}")]
    Request { status: Option<u16>, message: String },
}

impl FlowError {
    pub fn empty_topic() -> Self {
        FlowError::Validation {
            message: EMPTY_TOPIC_MESSAGE.to_string(),
        }
    }

    /// Error for a non-2xx response; falls back to the generic message.
    pub fn http_status(status: u16, detail: Option<String>) -> Self {
        FlowError::Request {
            status: Some(status),
            message: detail.unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_string()),
        }
    }

    /// Error for a request that never produced a usable response.
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            NETWORK_FALLBACK_MESSAGE.to_string()
        } else {
            message
        };
        FlowError::Request {
            status: None,
            message,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            FlowError::Validation { message } | FlowError::Request { message, .. } => message,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FlowError::Validation { .. } => ErrorCategory::User,
            FlowError::Request { status: Some(_), .. } => ErrorCategory::Server,
            FlowError::Request { status: None, .. } => ErrorCategory::Network,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FlowError::Validation { .. } => "E_TOPIC_EMPTY",
            FlowError::Request { status: Some(_), .. } => "E_HTTP_STATUS",
            FlowError::Request { status: None, .. } => "E_NET",
        }
    }
}
