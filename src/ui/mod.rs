//! UI rendering for tweetgen
//!
//! A single screen, top to bottom:
//! - Header with the service health indicator
//! - Topic field with the trigger label in its bottom border
//! - Status line: spinner while loading, or the error panel
//! - Scrollable result area: final tweet, stats, iteration history
//! - Keybind hints and the active endpoint
//!
//! Rendering reads only a [`ViewModel`]; it never touches `App`.

pub mod helpers;
mod panels;
mod theme;

// Re-export theme colors for external use
pub use theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS,
    COLOR_WARNING,
};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::view_state::ViewModel;
use panels::{render_footer, render_header, render_input, render_results, render_status};

/// Height of the status line area (error text plus hint)
const STATUS_HEIGHT: u16 = 2;

/// Values measured while drawing, applied back to app state afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOutputs {
    /// Largest useful scroll offset of the result area
    pub max_scroll: u16,
}

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render one frame
pub fn render(frame: &mut Frame, model: &ViewModel) -> RenderOutputs {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            Constraint::Length(1),             // Header
            Constraint::Length(3),             // Topic field
            Constraint::Length(STATUS_HEIGHT), // Loading / error
            Constraint::Min(3),                // Result + history
            Constraint::Length(1),             // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], model);
    render_input(frame, chunks[1], model);
    render_status(frame, chunks[2], model);
    let max_scroll = render_results(frame, chunks[3], model);
    render_footer(frame, chunks[4], model);

    RenderOutputs { max_scroll }
}
