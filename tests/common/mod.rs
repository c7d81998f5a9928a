//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//! use common::{generation_json, mock_app};
//!
//! let (app, http, clipboard) = mock_app();
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use tweetgen::adapters::{MockClipboard, MockHttpClient, ReqwestHttpClient};
use tweetgen::app::App;
use tweetgen::flow::TweetApi;
use tweetgen::startup::ClientConfig;

/// Base address used with mock HTTP clients.
pub const TEST_BASE_URL: &str = "http://tweetgen.test/api";

/// A generate response body with `history` entries, alternating evaluations.
pub fn generation_json(final_tweet: &str, history: usize) -> Value {
    let entries: Vec<Value> = (1..=history)
        .map(|i| {
            json!({
                "iteration": i,
                "evaluation": if i == history { "approved" } else { "needs_improvement" },
                "tweet": format!("Draft number {}", i),
                "feedback": format!("Feedback for draft {}", i),
            })
        })
        .collect();

    json!({
        "final_tweet": final_tweet,
        "evaluation": "approved",
        "topic": "coffee",
        "total_iterations": history.max(1),
        "history": entries,
    })
}

/// Config pointing at `base`.
pub fn config_for(base: &str) -> ClientConfig {
    ClientConfig::default().with_api_base_url(base)
}

/// Transport using the real reqwest client against `base`.
pub fn reqwest_api(base: &str) -> TweetApi {
    TweetApi::new(Arc::new(ReqwestHttpClient::new()), &config_for(base))
}

/// App wired to mock HTTP and clipboard.
pub fn mock_app() -> (App, Arc<MockHttpClient>, MockClipboard) {
    let http = Arc::new(MockHttpClient::new());
    let clipboard = MockClipboard::new();
    let app = App::with_clients(
        &config_for(TEST_BASE_URL),
        http.clone(),
        Box::new(clipboard.clone()),
    );
    (app, http, clipboard)
}

/// App using reqwest against `base`, with a mock clipboard.
pub fn reqwest_app(base: &str) -> (App, MockClipboard) {
    let clipboard = MockClipboard::new();
    let app = App::with_clients(
        &config_for(base),
        Arc::new(ReqwestHttpClient::new()),
        Box::new(clipboard.clone()),
    );
    (app, clipboard)
}
