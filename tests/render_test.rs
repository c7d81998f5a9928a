//! Full-screen rendering with ratatui's TestBackend.

mod common;

use common::{generation_json, mock_app};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use tweetgen::app::{App, AppMessage};
use tweetgen::error::FlowError;
use tweetgen::flow::HealthStatus;
use tweetgen::models::GenerationResult;
use tweetgen::ui::{self, RenderOutputs};

fn draw(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            ui::render(f, &app.view_model());
        })
        .unwrap();
    screen_text(&terminal)
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

/// Draw like the event loop does, feeding measurements back into the app.
fn draw_and_apply(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    let mut outputs = RenderOutputs::default();
    terminal
        .draw(|f| {
            outputs = ui::render(f, &app.view_model());
        })
        .unwrap();
    app.apply_render_outputs(outputs);
    screen_text(&terminal)
}

fn complete(app: &mut App, outcome: Result<GenerationResult, FlowError>) {
    app.handle_paste("coffee");
    app.flow.begin(app.input.text()).unwrap();
    app.handle_message(AppMessage::GenerationFinished(outcome));
}

fn parsed(final_tweet: &str, history: usize) -> GenerationResult {
    serde_json::from_value(generation_json(final_tweet, history)).unwrap()
}

#[test]
fn test_idle_screen() {
    let (app, _, _) = mock_app();
    let screen = draw(&app, 100, 24);

    assert!(screen.contains("TWEETGEN"));
    assert!(screen.contains("checking"));
    assert!(screen.contains("Generate Tweet"));
    assert!(screen.contains("Type a topic and press Enter"));
    assert!(!screen.contains("FINAL TWEET"));
}

#[test]
fn test_health_indicator() {
    let (mut app, _, _) = mock_app();
    app.handle_message(AppMessage::HealthChecked(HealthStatus::Online));
    assert!(draw(&app, 100, 24).contains("online"));

    app.handle_message(AppMessage::HealthChecked(HealthStatus::Offline));
    assert!(draw(&app, 100, 24).contains("offline"));
}

#[test]
fn test_loading_state() {
    let (mut app, _, _) = mock_app();
    app.handle_paste("coffee");
    app.flow.begin(app.input.text()).unwrap();

    let screen = draw(&app, 100, 24);
    assert!(screen.contains("Generating..."));
    assert!(screen.contains("Generating and refining your tweet"));
    assert!(!screen.contains("Generate Tweet"));
}

#[test]
fn test_result_without_history() {
    let (mut app, _, _) = mock_app();
    complete(
        &mut app,
        Ok(serde_json::from_value(serde_json::json!({
            "final_tweet": "Hi",
            "evaluation": "good",
            "topic": "coffee",
            "total_iterations": 2,
            "history": []
        }))
        .unwrap()),
    );

    let screen = draw(&app, 100, 30);
    assert!(screen.contains("FINAL TWEET"));
    assert!(screen.contains("GOOD"));
    assert!(screen.contains("Topic: coffee"));
    assert!(screen.contains("Iterations: 2"));
    assert!(screen.contains("Length: 2 chars"));
    assert!(screen.contains("Copy"));
    assert!(!screen.contains("ITERATION HISTORY"));
}

#[test]
fn test_result_with_history_in_order() {
    let (mut app, _, _) = mock_app();
    complete(&mut app, Ok(parsed("Coffee first", 2)));

    let screen = draw(&app, 100, 40);
    assert!(screen.contains("ITERATION HISTORY"));

    let first = screen.find("Iteration 1").unwrap();
    let second = screen.find("Iteration 2").unwrap();
    assert!(first < second);
    assert!(screen.contains("NEEDS_IMPROVEMENT"));
    assert!(screen.contains("Feedback: Feedback for draft 1"));
}

#[test]
fn test_error_panel() {
    let (mut app, _, _) = mock_app();
    complete(
        &mut app,
        Err(FlowError::http_status(400, Some("Topic is too long".into()))),
    );

    let screen = draw(&app, 100, 24);
    assert!(screen.contains("Topic is too long"));
    assert!(screen.contains("Press Enter to try again"));
    assert!(!screen.contains("FINAL TWEET"));
}

#[test]
fn test_scroll_moves_result_content() {
    let (mut app, _, _) = mock_app();
    complete(&mut app, Ok(parsed("Coffee first", 5)));

    assert!(draw(&app, 100, 20).contains("FINAL TWEET"));

    app.scroll = 3;
    assert!(!draw(&app, 100, 20).contains("FINAL TWEET"));
}

fn long_history_result() -> GenerationResult {
    let filler = "word ".repeat(60);
    serde_json::from_value(serde_json::json!({
        "final_tweet": format!("{}done", filler),
        "evaluation": "approved",
        "topic": "coffee",
        "total_iterations": 3,
        "history": (1..=3).map(|i| serde_json::json!({
            "iteration": i,
            "evaluation": "approved",
            "tweet": format!("{}draft{}", filler, i),
            "feedback": format!("{}END{}", filler, i),
        })).collect::<Vec<_>>(),
    }))
    .unwrap()
}

#[test]
fn test_wrapped_history_scrolls_to_last_entry() {
    let (mut app, _, _) = mock_app();
    complete(&mut app, Ok(long_history_result()));

    let screen = draw_and_apply(&mut app, 60, 20);
    assert!(screen.contains("FINAL TWEET"));
    assert!(!screen.contains("END3"));

    for _ in 0..200 {
        app.handle_key(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE));
    }
    let screen = draw_and_apply(&mut app, 60, 20);
    assert!(screen.contains("END3"), "last feedback not reachable:\n{}", screen);

    // Already at the bottom: another page does not move the view
    let bottom = app.scroll;
    app.handle_key(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE));
    assert_eq!(app.scroll, bottom);
}

#[test]
fn test_wrapped_history_reachable_before_first_measure() {
    let (mut app, _, _) = mock_app();
    complete(&mut app, Ok(long_history_result()));

    for _ in 0..200 {
        app.handle_key(KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE));
    }
    let screen = draw(&app, 60, 20);
    assert!(screen.contains("END3"), "last feedback not reachable:\n{}", screen);
}

#[test]
fn test_small_terminal_does_not_panic() {
    let (mut app, _, _) = mock_app();
    complete(&mut app, Ok(parsed("Coffee first", 3)));
    draw(&app, 10, 5);
    draw(&app, 1, 1);
}
