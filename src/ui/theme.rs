//! Color theme constants for the tweetgen UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Minimal Dark Color Theme
// ============================================================================

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused topic field
pub const COLOR_BORDER_FOCUS: Color = Color::Gray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the logo
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Spinner and in-flight elements
pub const COLOR_ACTIVE: Color = Color::Cyan;

// ============================================================================
// Status Colors
// ============================================================================

/// Approved badge, online indicator
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Needs-improvement badge
pub const COLOR_WARNING: Color = Color::Yellow;

/// Error panel, offline indicator
pub const COLOR_ERROR: Color = Color::Red;
