//! Clipboard failures. These are logged and never shown to the user.

use thiserror::Error;

use super::category::ErrorCategory;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened (headless session, denied access)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard opened but rejected the text
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

impl ClipboardError {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::System
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ClipboardError::Unavailable(_) => "E_CLIP_UNAVAILABLE",
            ClipboardError::WriteFailed(_) => "E_CLIP_WRITE",
        }
    }
}
