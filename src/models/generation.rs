use serde::{Deserialize, Serialize};

use super::{deserialize_lenient_count, deserialize_nullable_string};

/// Successful body of `POST /generate-tweet`.
///
/// Every field defaults when absent so that rendering never fails on a
/// partial response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationResult {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub final_tweet: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub evaluation: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub topic: String,
    #[serde(default, deserialize_with = "deserialize_lenient_count")]
    pub total_iterations: u32,
    /// Iterations in the order the service ran them
    #[serde(default, deserialize_with = "deserialize_history")]
    pub history: Vec<HistoryEntry>,
}

/// One generate/evaluate round reported by the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    #[serde(default, deserialize_with = "deserialize_lenient_count")]
    pub iteration: u32,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub evaluation: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub tweet: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub feedback: String,
}

/// Body returned with a non-2xx status.
///
/// `detail` is usually a string, but validation failures carry a list of
/// objects, so it is kept as raw JSON.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Human-readable detail, if the body carried a usable one.
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

fn deserialize_history<'de, D>(deserializer: D) -> Result<Vec<HistoryEntry>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<Vec<HistoryEntry>>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Classification of an evaluation label, used only for badge colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    Approved,
    NeedsImprovement,
    Other,
}

impl Evaluation {
    /// Classify a raw label case-insensitively.
    pub fn classify(label: &str) -> Self {
        let normalized = label.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "approved" => Evaluation::Approved,
            "needs_improvement" => Evaluation::NeedsImprovement,
            _ => Evaluation::Other,
        }
    }
}

impl GenerationResult {
    pub fn has_history(&self) -> bool {
        !self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_result() {
        let json = r#"{
            "final_tweet": "Decaf is just bean water with commitment issues ☕ #coffee",
            "evaluation": "approved",
            "topic": "coffee",
            "total_iterations": 2,
            "history": [
                {"iteration": 1, "evaluation": "needs_improvement", "tweet": "first", "feedback": "too long"},
                {"iteration": 2, "evaluation": "approved", "tweet": "second", "feedback": "great"}
            ]
        }"#;

        let result: GenerationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.topic, "coffee");
        assert_eq!(result.total_iterations, 2);
        assert_eq!(result.history.len(), 2);
        assert_eq!(result.history[0].iteration, 1);
        assert_eq!(result.history[1].tweet, "second");
    }

    #[test]
    fn test_deserialize_partial_result() {
        let result: GenerationResult =
            serde_json::from_str(r#"{"final_tweet": "Hi", "history": null}"#).unwrap();
        assert_eq!(result.final_tweet, "Hi");
        assert_eq!(result.evaluation, "");
        assert_eq!(result.total_iterations, 0);
        assert!(!result.has_history());
    }

    #[test]
    fn test_error_response_detail() {
        let err: ErrorResponse = serde_json::from_str(r#"{"detail": "boom"}"#).unwrap();
        assert_eq!(err.message().as_deref(), Some("boom"));

        let err: ErrorResponse = serde_json::from_str(r#"{"message": "boom"}"#).unwrap();
        assert!(err.message().is_none());

        let err: ErrorResponse = serde_json::from_str(r#"{"detail": ""}"#).unwrap();
        assert!(err.message().is_none());

        let err: ErrorResponse =
            serde_json::from_str(r#"{"detail": [{"msg": "field required"}]}"#).unwrap();
        assert_eq!(err.message().as_deref(), Some(r#"[{"msg":"field required"}]"#));
    }

    #[test]
    fn test_evaluation_classify() {
        assert_eq!(Evaluation::classify("approved"), Evaluation::Approved);
        assert_eq!(Evaluation::classify("APPROVED"), Evaluation::Approved);
        assert_eq!(
            Evaluation::classify("Needs_Improvement"),
            Evaluation::NeedsImprovement
        );
        assert_eq!(Evaluation::classify("needs improvement"), Evaluation::NeedsImprovement);
        assert_eq!(Evaluation::classify("good"), Evaluation::Other);
    }
}
