//! Error category classification for unified error handling.
//!
//! Categories drive log levels and the hint text shown beneath an error
//! panel. Nothing is retried automatically.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network-related errors (connection refused, DNS, TLS).
    Network,

    /// The service answered with a non-2xx status.
    Server,

    /// User action required (empty topic).
    User,

    /// Local OS resources (clipboard, terminal).
    System,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your connection and press Enter to try again.",
            ErrorCategory::Server => "The service had a problem. Press Enter to try again.",
            ErrorCategory::User => "Type a topic and press Enter.",
            ErrorCategory::System => "Check your system configuration.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
