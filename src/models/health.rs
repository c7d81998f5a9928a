use serde::Deserialize;

use super::deserialize_nullable_string;

/// Body of `GET /health`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub service: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}
