//! Display values derived from a generation result.

use crate::models::{Evaluation, GenerationResult, HistoryEntry};

/// Everything the result panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    /// Final tweet, verbatim
    pub tweet: String,
    /// Uppercased evaluation label
    pub badge: String,
    pub evaluation: Evaluation,
    pub topic: String,
    pub iterations: u32,
    /// Character count of `tweet`, computed locally
    pub length: usize,
    /// One block per history entry, in response order
    pub history: Vec<HistoryBlock>,
}

/// One rendered history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryBlock {
    pub iteration: u32,
    pub badge: String,
    pub evaluation: Evaluation,
    pub tweet: String,
    pub feedback: String,
}

impl HistoryBlock {
    pub fn heading(&self) -> String {
        format!("Iteration {}", self.iteration)
    }
}

impl ResultView {
    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }
}

/// Map a response into display values.
///
/// The history is rebuilt from scratch on every call; nothing carries over
/// from a previous result.
pub fn render_result(result: &GenerationResult) -> ResultView {
    ResultView {
        tweet: result.final_tweet.clone(),
        badge: result.evaluation.to_uppercase(),
        evaluation: Evaluation::classify(&result.evaluation),
        topic: result.topic.clone(),
        iterations: result.total_iterations,
        length: result.final_tweet.chars().count(),
        history: result.history.iter().map(render_history_entry).collect(),
    }
}

fn render_history_entry(entry: &HistoryEntry) -> HistoryBlock {
    HistoryBlock {
        iteration: entry.iteration,
        badge: entry.evaluation.to_uppercase(),
        evaluation: Evaluation::classify(&entry.evaluation),
        tweet: entry.tweet.clone(),
        feedback: entry.feedback.clone(),
    }
}
