//! Copying the final tweet to the system clipboard.
//!
//! A successful copy flips the copy control into an acknowledgment state for
//! [`ACK_DURATION`]. The revert is a spawned task whose handle is kept, so a
//! second copy aborts the pending revert and starts a fresh window. Failures
//! are logged and otherwise ignored.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::app::AppMessage;
use crate::error::ClipboardError;
use crate::traits::ClipboardProvider;

/// Copy control label at rest.
pub const COPY_LABEL: &str = "📋 Copy";

/// Copy control label during the acknowledgment window.
pub const COPIED_LABEL: &str = "✅ Copied!";

/// Length of the acknowledgment window.
pub const ACK_DURATION: Duration = Duration::from_millis(2000);

/// Result of one copy attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// Logged, not shown
    Failed(ClipboardError),
    /// No result on screen
    NothingToCopy,
}

pub struct ClipboardAction {
    provider: Box<dyn ClipboardProvider>,
    acknowledged: bool,
    /// Identifies the current acknowledgment window
    ticket: u64,
    pending_revert: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for ClipboardAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipboardAction")
            .field("acknowledged", &self.acknowledged)
            .field("ticket", &self.ticket)
            .finish()
    }
}

impl ClipboardAction {
    pub fn new(provider: Box<dyn ClipboardProvider>) -> Self {
        Self {
            provider,
            acknowledged: false,
            ticket: 0,
            pending_revert: None,
        }
    }

    /// Copy `text` and schedule the revert through `tx`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn copy(&mut self, text: Option<&str>, tx: &UnboundedSender<AppMessage>) -> CopyOutcome {
        let Some(text) = text else {
            return CopyOutcome::NothingToCopy;
        };

        match self.provider.set_text(text) {
            Ok(()) => {
                tracing::debug!(chars = text.chars().count(), "Copied tweet to clipboard");
                self.acknowledge(tx);
                CopyOutcome::Copied
            }
            Err(err) => {
                tracing::warn!(code = err.error_code(), "Failed to copy: {}", err);
                CopyOutcome::Failed(err)
            }
        }
    }

    /// Handle a revert firing. Returns whether the state changed.
    ///
    /// A revert from an earlier window is ignored; it may already have been
    /// queued when its task was aborted.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.ticket || !self.acknowledged {
            return false;
        }
        self.acknowledged = false;
        self.pending_revert = None;
        true
    }

    /// Drop any acknowledgment, e.g. when the copied tweet is replaced.
    pub fn reset(&mut self) {
        if let Some(handle) = self.pending_revert.take() {
            handle.abort();
        }
        self.acknowledged = false;
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }

    pub fn label(&self) -> &'static str {
        if self.acknowledged {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }

    fn acknowledge(&mut self, tx: &UnboundedSender<AppMessage>) {
        if let Some(handle) = self.pending_revert.take() {
            handle.abort();
        }

        self.ticket += 1;
        self.acknowledged = true;

        let ticket = self.ticket;
        let tx = tx.clone();
        self.pending_revert = Some(tokio::spawn(async move {
            tokio::time::sleep(ACK_DURATION).await;
            let _ = tx.send(AppMessage::CopyAckExpired { ticket });
        }));
    }
}

impl Drop for ClipboardAction {
    fn drop(&mut self) {
        if let Some(handle) = self.pending_revert.take() {
            handle.abort();
        }
    }
}
