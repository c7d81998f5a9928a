//! Clipboard trait abstraction.
//!
//! Clipboard access is a typed result rather than a panic or a silently
//! ignored call, so the copy action can log the failure and carry on.

use crate::error::ClipboardError;

/// Write-only access to the system clipboard.
pub trait ClipboardProvider: Send {
    /// Replace the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}
