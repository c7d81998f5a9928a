//! Topic validation. Runs before any request is built.

use crate::error::FlowError;

/// Trim `raw` and reject it if nothing is left.
pub fn validate_topic(raw: &str) -> Result<String, FlowError> {
    let topic = raw.trim();
    if topic.is_empty() {
        return Err(FlowError::empty_topic());
    }
    Ok(topic.to_string())
}
