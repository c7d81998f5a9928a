//! Event-loop level behaviour: keys in, messages back, view model out.

mod common;

use std::time::Duration;

use common::{generation_json, mock_app, reqwest_app};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::json;
use tweetgen::adapters::MockResponse;
use tweetgen::app::AppMessage;
use tweetgen::clipboard::{COPIED_LABEL, COPY_LABEL};
use tweetgen::flow::HealthStatus;
use tweetgen::view_state::{BUSY_LABEL, GENERATE_LABEL};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[tokio::test]
async fn test_typed_topic_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-tweet"))
        .and(body_json(json!({"topic": "cold brew", "max_iteration": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(generation_json("Brewed", 2)))
        .expect(1)
        .mount(&server)
        .await;

    let (mut app, _) = reqwest_app(&format!("{}/api", server.uri()));
    let mut rx = app.message_rx.take().unwrap();

    for c in " cold brew ".chars() {
        app.handle_key(press(KeyCode::Char(c)));
    }
    app.handle_key(press(KeyCode::Enter));

    {
        let model = app.view_model();
        assert!(model.loading);
        assert!(!model.trigger.enabled);
        assert_eq!(model.trigger.label, BUSY_LABEL);
        assert!(model.result.is_none());
    }

    let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(msg, AppMessage::GenerationFinished(Ok(_))));
    app.handle_message(msg);

    let model = app.view_model();
    assert!(!model.loading);
    assert!(model.trigger.enabled);
    assert_eq!(model.trigger.label, GENERATE_LABEL);
    assert_eq!(model.result.map(|r| r.tweet.as_str()), Some("Brewed"));
    assert_eq!(model.history.map(|h| h.len()), Some(2));
    // The topic stays in the field for another attempt
    assert_eq!(model.input.text, " cold brew ");
}

#[tokio::test]
async fn test_health_check_reports_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "service": "Tweet Generator API"
        })))
        .mount(&server)
        .await;

    let (mut app, _) = reqwest_app(&format!("{}/api", server.uri()));
    let mut rx = app.message_rx.take().unwrap();

    app.spawn_health_check();
    let msg = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .unwrap()
        .unwrap();
    app.handle_message(msg);

    assert_eq!(app.health, HealthStatus::Online);
}

#[tokio::test]
async fn test_loading_clears_once_on_failure() {
    let (mut app, http, _) = mock_app();
    http.set_default_response(MockResponse::json(500, json!({"detail": "Model overloaded"})));
    let mut rx = app.message_rx.take().unwrap();

    app.handle_paste("coffee");
    app.handle_key(press(KeyCode::Enter));
    app.handle_key(press(KeyCode::Enter));

    let msg = rx.recv().await.unwrap();
    app.handle_message(msg);
    assert_eq!(
        app.view_model().error.as_deref(),
        Some("⚠️ Model overloaded")
    );
    assert!(!app.view_model().loading);

    // Only one request went out, so no second completion arrives
    assert_eq!(http.get_requests().len(), 1);
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_copy_acknowledgment_window() {
    let (mut app, http, clipboard) = mock_app();
    http.set_default_response(MockResponse::json(200, generation_json("Hi", 0)));
    let mut rx = app.message_rx.take().unwrap();

    app.handle_paste("coffee");
    app.handle_key(press(KeyCode::Enter));
    let msg = rx.recv().await.unwrap();
    app.handle_message(msg);

    app.handle_key(ctrl('y'));
    assert_eq!(clipboard.contents().as_deref(), Some("Hi"));
    assert_eq!(app.view_model().copy_button.label, COPIED_LABEL);

    tokio::time::sleep(Duration::from_millis(1999)).await;
    assert!(rx.try_recv().is_err());
    assert_eq!(app.view_model().copy_button.label, COPIED_LABEL);

    let msg = rx.recv().await.unwrap();
    app.handle_message(msg);
    assert_eq!(app.view_model().copy_button.label, COPY_LABEL);
}

#[tokio::test(start_paused = true)]
async fn test_second_copy_restarts_window() {
    let (mut app, http, clipboard) = mock_app();
    http.set_default_response(MockResponse::json(200, generation_json("Hi", 0)));
    let mut rx = app.message_rx.take().unwrap();

    app.handle_paste("coffee");
    app.handle_key(press(KeyCode::Enter));
    let msg = rx.recv().await.unwrap();
    app.handle_message(msg);

    app.handle_key(ctrl('y'));
    tokio::time::sleep(Duration::from_millis(1000)).await;
    app.handle_key(ctrl('y'));
    assert_eq!(clipboard.write_count(), 2);

    // 2s after the first copy: the first revert was cancelled
    tokio::time::sleep(Duration::from_millis(1500)).await;
    assert!(rx.try_recv().is_err());
    assert_eq!(app.view_model().copy_button.label, COPIED_LABEL);

    // 2s after the second copy
    tokio::time::sleep(Duration::from_millis(600)).await;
    let msg = rx.try_recv().unwrap();
    app.handle_message(msg);
    assert_eq!(app.view_model().copy_button.label, COPY_LABEL);
}

#[tokio::test]
async fn test_validation_error_keeps_previous_result() {
    let (mut app, http, _) = mock_app();
    http.set_default_response(MockResponse::json(200, generation_json("Hi", 1)));
    let mut rx = app.message_rx.take().unwrap();

    app.handle_paste("coffee");
    app.handle_key(press(KeyCode::Enter));
    let msg = rx.recv().await.unwrap();
    app.handle_message(msg);

    app.input.clear();
    app.handle_key(press(KeyCode::Enter));

    let model = app.view_model();
    assert_eq!(model.error.as_deref(), Some("⚠️ Please enter a topic"));
    assert_eq!(model.result.map(|r| r.tweet.as_str()), Some("Hi"));
    assert_eq!(http.get_requests().len(), 1);
}
