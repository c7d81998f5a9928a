//! Panel visibility rules for one request/response cycle.

/// Trigger label while idle.
pub const GENERATE_LABEL: &str = "✨ Generate Tweet";

/// Trigger label while a request is in flight.
pub const BUSY_LABEL: &str = "Generating...";

/// Prefix of every error panel.
pub const WARNING_MARKER: &str = "⚠️";

/// The submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerState {
    pub enabled: bool,
    pub label: &'static str,
}

impl Default for TriggerState {
    fn default() -> Self {
        Self {
            enabled: true,
            label: GENERATE_LABEL,
        }
    }
}

/// Visibility of the error, loading, result and history panels.
///
/// The trigger is disabled exactly while `loading` is set, which is what
/// keeps requests from overlapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    error: Option<String>,
    loading: bool,
    result_visible: bool,
    history_visible: bool,
    trigger: TriggerState,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the loading state for a new request.
    pub fn begin_request(&mut self) {
        self.error = None;
        self.result_visible = false;
        self.history_visible = false;
        self.loading = true;
        self.trigger = TriggerState {
            enabled: false,
            label: BUSY_LABEL,
        };
    }

    /// Leave the loading state. Returns false if no request was in flight.
    pub fn end_request(&mut self) -> bool {
        if !self.loading {
            return false;
        }
        self.loading = false;
        self.trigger = TriggerState::default();
        true
    }

    /// Show the error panel with `message`.
    pub fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    /// Show the result panel, and the history panel when there is history.
    pub fn show_result(&mut self, has_history: bool) {
        self.error = None;
        self.result_visible = true;
        self.history_visible = has_history;
    }

    pub fn is_busy(&self) -> bool {
        self.loading
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_result_visible(&self) -> bool {
        self.result_visible
    }

    pub fn is_history_visible(&self) -> bool {
        self.history_visible
    }

    pub fn trigger(&self) -> &TriggerState {
        &self.trigger
    }

    /// Raw error message, without the marker.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Error panel text as displayed.
    pub fn error_text(&self) -> Option<String> {
        self.error
            .as_ref()
            .map(|message| format!("{} {}", WARNING_MARKER, message))
    }
}
