//! In-memory clipboard for testing.

use std::sync::{Arc, Mutex};

use crate::error::ClipboardError;
use crate::traits::ClipboardProvider;

/// Clipboard double that records writes and can be told to fail.
///
/// Clones share state, so a test can keep one handle while the code under
/// test owns another.
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    contents: Arc<Mutex<Option<String>>>,
    writes: Arc<Mutex<usize>>,
    failure: Arc<Mutex<Option<ClipboardError>>>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails with `err`.
    pub fn failing(err: ClipboardError) -> Self {
        let clipboard = Self::default();
        *clipboard.failure.lock().unwrap() = Some(err);
        clipboard
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().unwrap().clone()
    }

    /// Number of write attempts, successful or not.
    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl ClipboardProvider for MockClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        *self.writes.lock().unwrap() += 1;
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        *self.contents.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}
