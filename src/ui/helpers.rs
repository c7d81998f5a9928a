//! Helper functions and constants for UI rendering

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

use crate::flow::HealthStatus;
use crate::models::Evaluation;
use crate::view_state::{HistoryBlock, ResultView};

use super::theme::{
    COLOR_ACCENT, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS, COLOR_WARNING,
};

/// Spinner frames for the loading line
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for a tick count
pub fn spinner_frame(tick_count: u64) -> &'static str {
    SPINNER_FRAMES[(tick_count % SPINNER_FRAMES.len() as u64) as usize]
}

/// Badge colour for an evaluation
pub fn evaluation_color(evaluation: Evaluation) -> Color {
    match evaluation {
        Evaluation::Approved => COLOR_SUCCESS,
        Evaluation::NeedsImprovement => COLOR_WARNING,
        Evaluation::Other => COLOR_ACCENT,
    }
}

/// Header indicator colour for a health status
pub fn health_color(status: HealthStatus) -> Color {
    match status {
        HealthStatus::Checking => COLOR_DIM,
        HealthStatus::Online => COLOR_SUCCESS,
        HealthStatus::Offline => COLOR_ERROR,
    }
}

fn badge_span(label: &str, evaluation: Evaluation) -> Span<'static> {
    Span::styled(
        format!(" {} ", label),
        Style::default()
            .fg(Color::Black)
            .bg(evaluation_color(evaluation))
            .add_modifier(Modifier::BOLD),
    )
}

/// Text lines, one per line of `text`.
///
/// Tweets can carry embedded newlines; `Line::from` would keep them inline.
fn text_lines(text: &str, style: Style) -> impl Iterator<Item = Line<'_>> {
    text.split('\n')
        .map(move |line| Line::from(Span::styled(line, style)))
}

/// Build the scrollable result area: final tweet, stats, then history.
pub fn result_lines<'a>(
    result: &'a ResultView,
    history: Option<&'a [HistoryBlock]>,
) -> Vec<Line<'a>> {
    let label = Style::default().fg(COLOR_DIM);
    let heading = Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled("FINAL TWEET", heading))];
    lines.extend(text_lines(&result.tweet, Style::default().fg(COLOR_ACCENT)));
    lines.push(Line::default());

    lines.push(Line::from(vec![
        badge_span(&result.badge, result.evaluation),
        Span::raw("  "),
        Span::styled("Topic: ", label),
        Span::raw(result.topic.as_str()),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Iterations: ", label),
        Span::raw(result.iterations.to_string()),
        Span::styled("  ·  ", label),
        Span::styled("Length: ", label),
        Span::raw(format!("{} chars", result.length)),
    ]));

    if let Some(history) = history {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("ITERATION HISTORY", heading)));
        for block in history {
            lines.push(Line::default());
            lines.extend(history_lines(block));
        }
    }

    lines
}

fn history_lines(block: &HistoryBlock) -> Vec<Line<'_>> {
    let dim = Style::default().fg(COLOR_DIM);

    let mut lines = vec![Line::from(vec![
        Span::styled(
            block.heading(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        badge_span(&block.badge, block.evaluation),
    ])];
    lines.extend(text_lines(&block.tweet, Style::default()));
    lines.push(Line::from(vec![
        Span::styled("Feedback: ", dim),
        Span::styled(block.feedback.as_str(), dim.add_modifier(Modifier::ITALIC)),
    ]));
    lines
}

/// Slice of the topic that fits `width` columns with the cursor visible.
///
/// Returns the visible text and the cursor column within it.
pub fn visible_input(text: &str, cursor: usize, width: u16) -> (String, u16) {
    let width = width as usize;
    if width == 0 {
        return (String::new(), 0);
    }

    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let char_width = |c: &char| UnicodeWidthChar::width(*c).unwrap_or(0);

    // Leave one column for the cursor itself
    let mut start = 0;
    let mut prefix: usize = chars[..cursor].iter().map(char_width).sum();
    while prefix >= width && start < cursor {
        prefix -= char_width(&chars[start]);
        start += 1;
    }

    let mut visible = String::new();
    let mut used = 0;
    for c in &chars[start..] {
        let w = char_width(c);
        if used + w > width {
            break;
        }
        used += w;
        visible.push(*c);
    }

    (visible, prefix as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0), "⠋");
        assert_eq!(spinner_frame(10), "⠋");
        assert_eq!(spinner_frame(11), "⠙");
    }

    #[test]
    fn test_visible_input_fits() {
        assert_eq!(visible_input("coffee", 6, 20), ("coffee".to_string(), 6));
        assert_eq!(visible_input("coffee", 2, 20), ("coffee".to_string(), 2));
    }

    #[test]
    fn test_visible_input_scrolls_to_cursor() {
        let (text, col) = visible_input("abcdefghij", 10, 5);
        assert_eq!(text, "ghij");
        assert_eq!(col, 4);
    }

    #[test]
    fn test_visible_input_wide_chars() {
        let (text, col) = visible_input("☕☕☕", 3, 4);
        assert_eq!(text, "☕");
        assert_eq!(col, 2);
    }

    #[test]
    fn test_visible_input_zero_width() {
        assert_eq!(visible_input("abc", 1, 0), (String::new(), 0));
    }

    #[test]
    fn test_evaluation_colors() {
        assert_eq!(evaluation_color(Evaluation::Approved), COLOR_SUCCESS);
        assert_eq!(evaluation_color(Evaluation::NeedsImprovement), COLOR_WARNING);
        assert_eq!(evaluation_color(Evaluation::Other), COLOR_ACCENT);
    }
}
