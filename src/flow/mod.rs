//! The submit → request → render cycle.
//!
//! [`RequestFlow`] owns the panel state and the last rendered result. It is
//! split into [`RequestFlow::begin`] and [`RequestFlow::finish`] so the TUI
//! can run the transport on a spawned task between the two, while the
//! headless path simply awaits [`RequestFlow::submit`].
//!
//! ```text
//! Idle → Validating → (Error | Requesting) → (Error | Success) → Idle
//! ```

mod health;
mod transport;
mod validator;

pub use health::HealthStatus;
pub use transport::TweetApi;
pub use validator::validate_topic;

use tracing::{info, warn};

use crate::error::FlowError;
use crate::models::{GenerationResult, TopicRequest, MAX_ITERATION};
use crate::view_state::{render_result, ResultView, ViewState};

/// How a completion was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Result rendered and shown
    Rendered,
    /// Error panel shown
    Failed,
    /// No request was in flight; nothing changed
    Stale,
}

/// How a submission attempt was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Request dispatched and completed
    Completed(Completion),
    /// Topic rejected by validation
    Rejected,
    /// Another request is still in flight
    Busy,
}

#[derive(Debug)]
pub struct RequestFlow {
    view: ViewState,
    result: Option<ResultView>,
    last_error: Option<FlowError>,
    /// Rounds requested with every submission
    max_iteration: u32,
}

impl Default for RequestFlow {
    fn default() -> Self {
        Self::with_max_iteration(MAX_ITERATION)
    }
}

impl RequestFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iteration(max_iteration: u32) -> Self {
        Self {
            view: ViewState::default(),
            result: None,
            last_error: None,
            max_iteration,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Last rendered result, whether or not it is currently visible.
    pub fn result(&self) -> Option<&ResultView> {
        self.result.as_ref()
    }

    /// Error behind the visible error panel.
    pub fn last_error(&self) -> Option<&FlowError> {
        self.view.error_message().and(self.last_error.as_ref())
    }

    /// The final tweet, only while the result panel is showing.
    pub fn displayed_tweet(&self) -> Option<&str> {
        if !self.view.is_result_visible() {
            return None;
        }
        self.result.as_ref().map(|view| view.tweet.as_str())
    }

    /// Validate `raw` and enter the loading state.
    ///
    /// Returns the request to send, or `Err` when nothing should be sent.
    /// A validation failure shows the error panel and leaves any displayed
    /// result alone.
    pub fn begin(&mut self, raw: &str) -> Result<TopicRequest, Submission> {
        if self.view.is_busy() {
            warn!("Submit ignored: a request is already in flight");
            return Err(Submission::Busy);
        }

        match validate_topic(raw) {
            Ok(topic) => {
                self.last_error = None;
                self.view.begin_request();
                info!(topic = %topic, "Generating tweet");
                Ok(TopicRequest::new(topic).with_max_iteration(self.max_iteration))
            }
            Err(err) => {
                self.show_error(err);
                Err(Submission::Rejected)
            }
        }
    }

    /// Apply the transport outcome and leave the loading state.
    pub fn finish(&mut self, outcome: Result<GenerationResult, FlowError>) -> Completion {
        if !self.view.is_busy() {
            warn!("Completion received with no request in flight");
            return Completion::Stale;
        }

        let completion = match outcome {
            Ok(result) => {
                let view = render_result(&result);
                info!(
                    evaluation = %view.badge,
                    iterations = view.iterations,
                    length = view.length,
                    "Tweet generated"
                );
                self.view.show_result(view.has_history());
                self.result = Some(view);
                Completion::Rendered
            }
            Err(err) => {
                warn!(
                    code = err.error_code(),
                    category = %err.category(),
                    "Generation failed: {}",
                    err
                );
                self.show_error(err);
                Completion::Failed
            }
        };

        self.view.end_request();
        completion
    }

    /// Run a whole cycle against `api`.
    pub async fn submit(&mut self, api: &TweetApi, raw: &str) -> Submission {
        let request = match self.begin(raw) {
            Ok(request) => request,
            Err(submission) => return submission,
        };
        let outcome = api.generate(&request).await;
        Submission::Completed(self.finish(outcome))
    }

    fn show_error(&mut self, err: FlowError) {
        self.view.show_error(err.message());
        self.last_error = Some(err);
    }
}
