//! Simple line-based CLI output utilities.

use std::io::{self, Write};

use crate::view_state::{ResultView, WARNING_MARKER};

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// Spinner characters for loading animation.
pub const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Print the main header.
///
/// ```text
/// TWEETGEN
/// ════════════════════════════════════════════════════════════
/// ```
pub fn print_header(title: &str) {
    println!();
    println!("{}", title);
    println!("{}", "═".repeat(LINE_WIDTH));
    println!();
}

/// Print a line with a status icon.
///
/// ```text
///   ● http://localhost:8000/api
/// ```
pub fn print_step_line(icon: &str, message: &str) {
    println!("  {} {}", icon, message);
}

/// Print a spinner line (overwrites current line).
pub fn print_step_spinner(spinner_char: char, message: &str) {
    print!("\r  {} {}", spinner_char, message);
    io::stdout().flush().ok();
}

/// Clear the spinner line.
pub fn clear_step_spinner() {
    print!("\r{}\r", " ".repeat(LINE_WIDTH));
    io::stdout().flush().ok();
}

/// Write a rendered result.
///
/// ```text
/// FINAL TWEET
/// ────────────────────────────────────────────────────────────
/// Decaf is just bean water with commitment issues ☕
///
///   Evaluation: APPROVED
///   Topic:      coffee
///   Iterations: 2
///   Length:     50 chars
///
/// ITERATION HISTORY
/// ────────────────────────────────────────────────────────────
/// Iteration 1 [NEEDS_IMPROVEMENT]
///   Coffee is good.
///   Feedback: Too bland
/// ```
pub fn write_result<W: Write>(out: &mut W, view: &ResultView) -> io::Result<()> {
    let rule = "─".repeat(LINE_WIDTH);

    writeln!(out, "FINAL TWEET")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "{}", view.tweet)?;
    writeln!(out)?;
    writeln!(out, "  Evaluation: {}", view.badge)?;
    writeln!(out, "  Topic:      {}", view.topic)?;
    writeln!(out, "  Iterations: {}", view.iterations)?;
    writeln!(out, "  Length:     {} chars", view.length)?;

    if view.has_history() {
        writeln!(out)?;
        writeln!(out, "ITERATION HISTORY")?;
        writeln!(out, "{}", rule)?;
        for block in &view.history {
            writeln!(out, "{} [{}]", block.heading(), block.badge)?;
            writeln!(out, "  {}", block.tweet)?;
            writeln!(out, "  Feedback: {}", block.feedback)?;
        }
    }

    writeln!(out, "{}", "═".repeat(LINE_WIDTH))
}

/// Write an error line with the warning marker.
pub fn write_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{} {}", WARNING_MARKER, message)
}
