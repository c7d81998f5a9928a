use serde::{Deserialize, Serialize};

/// Number of optimisation rounds requested from the service.
pub const MAX_ITERATION: u32 = 3;

/// Body of `POST /generate-tweet`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TopicRequest {
    /// Trimmed, non-empty topic
    pub topic: String,
    /// Optimisation rounds, [`MAX_ITERATION`] unless configured
    pub max_iteration: u32,
}

impl TopicRequest {
    /// Build a request for an already validated topic.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            max_iteration: MAX_ITERATION,
        }
    }

    pub fn with_max_iteration(mut self, max_iteration: u32) -> Self {
        self.max_iteration = max_iteration;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_request_serialization() {
        let request = TopicRequest::new("coffee");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"topic":"coffee","max_iteration":3}"#);
    }

    #[test]
    fn test_topic_request_custom_rounds() {
        let request = TopicRequest::new("coffee").with_max_iteration(5);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"topic":"coffee","max_iteration":5}"#);
    }
}
