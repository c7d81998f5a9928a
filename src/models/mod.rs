//! Wire types exchanged with the tweet generation service.
//!
//! Responses are decoded leniently: a missing or `null` field becomes its
//! default value so a partial response still renders.

mod generation;
mod health;
mod request;

pub use generation::{ErrorResponse, Evaluation, GenerationResult, HistoryEntry};
pub use health::HealthResponse;
pub use request::{TopicRequest, MAX_ITERATION};

use serde::{Deserialize, Deserializer};

/// Helper to deserialize nullable strings as empty string
/// Handles both missing fields and explicit null values
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Helper to deserialize a count that may be null, negative or a float.
///
/// Anything that is not a non-negative integer collapses to 0.
pub(crate) fn deserialize_lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_u64())
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or_default())
}
