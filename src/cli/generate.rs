//! Headless one-shot generation (`--topic`).

use std::io::{self, IsTerminal, Write};
use std::time::Duration;

use crate::cli_output::{
    clear_step_spinner, print_header, print_step_line, print_step_spinner, write_error,
    write_result, SPINNER_CHARS,
};
use crate::flow::{Completion, RequestFlow, Submission, TweetApi};

const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Run one submission and write the outcome.
///
/// The result goes to `out`; an error line goes to `err`. Returns whether a
/// result was rendered.
pub async fn generate_once<O, E>(api: &TweetApi, topic: &str, out: &mut O, err: &mut E) -> bool
where
    O: Write,
    E: Write,
{
    let mut flow = RequestFlow::with_max_iteration(api.max_iteration());
    let submission = flow.submit(api, topic).await;
    write_outcome(&flow, submission, out, err)
}

/// Run one submission against stdout/stderr, with a spinner on a terminal.
pub async fn run_headless(api: &TweetApi, topic: &str) -> bool {
    let interactive = io::stdout().is_terminal();
    if interactive {
        print_header("TWEETGEN");
        print_step_line("●", api.generate_url());
        println!();
    }

    let mut flow = RequestFlow::with_max_iteration(api.max_iteration());
    let submission = {
        let submit = flow.submit(api, topic);
        tokio::pin!(submit);

        if interactive {
            let mut interval = tokio::time::interval(SPINNER_INTERVAL);
            let mut frame = 0usize;
            let submission = loop {
                tokio::select! {
                    submission = &mut submit => break submission,
                    _ = interval.tick() => {
                        print_step_spinner(
                            SPINNER_CHARS[frame % SPINNER_CHARS.len()],
                            "Generating and refining your tweet...",
                        );
                        frame += 1;
                    }
                }
            };
            clear_step_spinner();
            submission
        } else {
            submit.await
        }
    };

    write_outcome(&flow, submission, &mut io::stdout(), &mut io::stderr())
}

fn write_outcome<O, E>(flow: &RequestFlow, submission: Submission, out: &mut O, err: &mut E) -> bool
where
    O: Write,
    E: Write,
{
    if let (Submission::Completed(Completion::Rendered), Some(view)) = (submission, flow.result()) {
        return match write_result(out, view) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to write result: {}", e);
                false
            }
        };
    }

    let message = flow.view().error_message().unwrap_or_default();
    if let Err(e) = write_error(err, message) {
        tracing::warn!("Failed to write error: {}", e);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use crate::startup::ClientConfig;
    use serde_json::json;
    use std::sync::Arc;

    fn api_with(mock: &MockHttpClient) -> TweetApi {
        let config = ClientConfig::default().with_api_base_url("http://test/api");
        TweetApi::new(Arc::new(mock.clone()), &config)
    }

    #[tokio::test]
    async fn test_generate_once_success() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(
            200,
            json!({
                "final_tweet": "Hi",
                "evaluation": "good",
                "topic": "coffee",
                "total_iterations": 2,
                "history": []
            }),
        ));

        let (mut out, mut err) = (Vec::new(), Vec::new());
        assert!(generate_once(&api_with(&mock), "coffee", &mut out, &mut err).await);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Evaluation: GOOD"));
        assert!(err.is_empty());
    }

    #[tokio::test]
    async fn test_generate_once_validation_error() {
        let mock = MockHttpClient::new();
        let (mut out, mut err) = (Vec::new(), Vec::new());

        assert!(!generate_once(&api_with(&mock), "   ", &mut out, &mut err).await);
        assert_eq!(String::from_utf8(err).unwrap(), "⚠️ Please enter a topic\n");
        assert!(out.is_empty());
        assert!(mock.get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_generate_once_server_error() {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(500, json!({"detail": "Model overloaded"})));
        let (mut out, mut err) = (Vec::new(), Vec::new());

        assert!(!generate_once(&api_with(&mock), "coffee", &mut out, &mut err).await);
        assert_eq!(String::from_utf8(err).unwrap(), "⚠️ Model overloaded\n");
    }
}
