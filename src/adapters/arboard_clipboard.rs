//! System clipboard adapter backed by `arboard`.
//!
//! Uses NSPasteboard on macOS and X11/Wayland on Linux. A fresh handle is
//! opened per write; some X11 setups drop contents when a long-lived handle
//! outlives its owner thread.

use crate::error::ClipboardError;
use crate::traits::ClipboardProvider;

#[derive(Debug, Default, Clone, Copy)]
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardProvider for ArboardClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}
