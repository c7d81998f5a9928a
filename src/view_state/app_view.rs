//! Per-frame view model.

use crate::flow::HealthStatus;

use super::{HistoryBlock, ResultView, TriggerState};

/// The topic field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputView<'a> {
    pub text: &'a str,
    /// Cursor position in characters
    pub cursor: usize,
}

/// The copy control beneath the final tweet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyButtonView {
    pub label: &'static str,
    /// Inside the post-copy acknowledgment window
    pub acknowledged: bool,
}

/// Complete view state for one frame.
///
/// Panels that are hidden are `None`; the renderer never has to consult
/// visibility flags separately.
#[derive(Debug, Clone)]
pub struct ViewModel<'a> {
    pub input: InputView<'a>,
    pub trigger: &'a TriggerState,
    /// Error panel text including the warning marker
    pub error: Option<String>,
    /// Recovery hint shown under the error
    pub error_hint: Option<&'static str>,
    pub loading: bool,
    pub result: Option<&'a ResultView>,
    pub history: Option<&'a [HistoryBlock]>,
    pub copy_button: CopyButtonView,
    pub health: HealthStatus,
    pub api_base_url: &'a str,
    /// Vertical scroll of the result area
    pub scroll: u16,
    /// Tick counter for the spinner
    pub tick_count: u64,
}
