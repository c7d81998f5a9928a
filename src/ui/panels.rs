//! Header, topic field, status line, result area and footer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::view_state::{CopyButtonView, ViewModel};

use super::helpers::{health_color, result_lines, spinner_frame, visible_input};
use super::theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_BORDER_FOCUS, COLOR_DIM, COLOR_ERROR,
    COLOR_HEADER, COLOR_SUCCESS,
};

// ============================================================================
// Header
// ============================================================================

pub fn render_header(frame: &mut Frame, area: Rect, model: &ViewModel) {
    let (glyph, label) = model.health.indicator();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(12)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "TWEETGEN",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  AI tweet generator", Style::default().fg(COLOR_DIM)),
    ]));
    frame.render_widget(title, chunks[0]);

    let status = Paragraph::new(Line::from(vec![
        Span::styled(glyph, Style::default().fg(health_color(model.health))),
        Span::raw(" "),
        Span::styled(label, Style::default().fg(COLOR_DIM)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(status, chunks[1]);
}

// ============================================================================
// Topic Field
// ============================================================================

pub fn render_input(frame: &mut Frame, area: Rect, model: &ViewModel) {
    let trigger_style = if model.trigger.enabled {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let border_color = if model.trigger.enabled {
        COLOR_BORDER_FOCUS
    } else {
        COLOR_BORDER
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(" Topic ", Style::default().fg(COLOR_DIM)))
        .title_bottom(
            Line::from(Span::styled(
                format!(" {} ⏎ ", model.trigger.label),
                trigger_style,
            ))
            .right_aligned(),
        );

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if model.input.text.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            "e.g. the joy of morning coffee",
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        ));
        frame.render_widget(placeholder, inner);
        if model.trigger.enabled {
            frame.set_cursor_position((inner.x, inner.y));
        }
        return;
    }

    let (visible, cursor_col) = visible_input(model.input.text, model.input.cursor, inner.width);
    frame.render_widget(Paragraph::new(visible), inner);

    if model.trigger.enabled && inner.width > 0 {
        frame.set_cursor_position((inner.x + cursor_col.min(inner.width - 1), inner.y));
    }
}

// ============================================================================
// Status Line (loading / error)
// ============================================================================

pub fn render_status(frame: &mut Frame, area: Rect, model: &ViewModel) {
    let lines = if model.loading {
        vec![Line::from(vec![
            Span::styled(spinner_frame(model.tick_count), Style::default().fg(COLOR_ACTIVE)),
            Span::styled(
                " Generating and refining your tweet...",
                Style::default().fg(COLOR_DIM),
            ),
        ])]
    } else if let Some(error) = &model.error {
        let mut lines = vec![Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        ))];
        if let Some(hint) = model.error_hint {
            lines.push(Line::from(Span::styled(hint, Style::default().fg(COLOR_DIM))));
        }
        lines
    } else {
        return;
    };

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

// ============================================================================
// Result Area
// ============================================================================

fn copy_button_line(button: CopyButtonView) -> Line<'static> {
    let style = if button.acknowledged {
        Style::default()
            .fg(COLOR_SUCCESS)
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ACCENT)
    };
    Line::from(vec![
        Span::styled(format!(" {} ", button.label), style),
        Span::styled(" ^Y ", Style::default().fg(COLOR_DIM)),
    ])
    .right_aligned()
}

/// Render the result area. Returns the largest scroll offset for this
/// area, counted in wrapped rows.
pub fn render_results(frame: &mut Frame, area: Rect, model: &ViewModel) -> u16 {
    let Some(result) = model.result else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(COLOR_BORDER));
        let empty = Paragraph::new(Span::styled(
            "Type a topic and press Enter to generate a tweet.",
            Style::default().fg(COLOR_DIM),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return 0;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" Result ", Style::default().fg(COLOR_DIM)))
        .title_bottom(copy_button_line(model.copy_button));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph =
        Paragraph::new(result_lines(result, model.history)).wrap(Wrap { trim: false });
    let rows = paragraph.line_count(inner.width);
    let max_scroll =
        u16::try_from(rows.saturating_sub(inner.height as usize)).unwrap_or(u16::MAX);

    frame.render_widget(paragraph.scroll((model.scroll.min(max_scroll), 0)), inner);
    max_scroll
}

// ============================================================================
// Footer
// ============================================================================

pub fn render_footer(frame: &mut Frame, area: Rect, model: &ViewModel) {
    let key = Style::default().fg(COLOR_ACCENT);
    let dim = Style::default().fg(COLOR_DIM);
    let url_width = unicode_width::UnicodeWidthStr::width(model.api_base_url) as u16;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(url_width)])
        .split(area);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("⏎", key),
        Span::styled(" generate  ", dim),
        Span::styled("^Y", key),
        Span::styled(" copy  ", dim),
        Span::styled("↑↓", key),
        Span::styled(" scroll  ", dim),
        Span::styled("esc", key),
        Span::styled(" quit", dim),
    ]));
    frame.render_widget(hints, chunks[0]);

    let endpoint = Paragraph::new(Span::styled(model.api_base_url, dim)).alignment(Alignment::Right);
    frame.render_widget(endpoint, chunks[1]);
}
