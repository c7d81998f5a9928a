//! Transport for the tweet generation service.
//!
//! One `POST {base}/generate-tweet` per submission. Non-2xx bodies are
//! searched for a `detail` message; anything else becomes a generic error.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::FlowError;
use crate::models::{ErrorResponse, GenerationResult, HealthResponse, TopicRequest};
use crate::startup::ClientConfig;
use crate::traits::{Headers, HttpClient};

use super::health::HealthStatus;

/// Client for the tweet generation endpoints.
///
/// Cheap to clone; clones share the underlying HTTP client.
#[derive(Clone)]
pub struct TweetApi {
    client: Arc<dyn HttpClient>,
    generate_url: String,
    health_url: String,
    max_iteration: u32,
}

impl std::fmt::Debug for TweetApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweetApi")
            .field("generate_url", &self.generate_url)
            .field("health_url", &self.health_url)
            .field("max_iteration", &self.max_iteration)
            .finish()
    }
}

impl TweetApi {
    /// Bind an HTTP client to the endpoints in `config`.
    pub fn new(client: Arc<dyn HttpClient>, config: &ClientConfig) -> Self {
        Self {
            client,
            generate_url: config.generate_url(),
            health_url: config.health_url(),
            max_iteration: config.max_iteration,
        }
    }

    pub fn generate_url(&self) -> &str {
        &self.generate_url
    }

    /// Rounds from the config this client was built with.
    pub fn max_iteration(&self) -> u32 {
        self.max_iteration
    }

    /// Send one generation request and classify the outcome.
    pub async fn generate(&self, request: &TopicRequest) -> Result<GenerationResult, FlowError> {
        let body = serde_json::to_string(request).map_err(|e| FlowError::network(e.to_string()))?;

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        debug!(url = %self.generate_url, topic = %request.topic, "POST generate-tweet");

        let response = self
            .client
            .post(&self.generate_url, &body, &headers)
            .await
            .map_err(|e| {
                warn!("Generation request failed before a response: {}", e);
                FlowError::network(e.message())
            })?;

        if !response.is_success() {
            let detail = response
                .json::<ErrorResponse>()
                .ok()
                .and_then(|body| body.message());
            warn!(status = response.status, "Generation request rejected");
            return Err(FlowError::http_status(response.status, detail));
        }

        response.json::<GenerationResult>().map_err(|e| {
            warn!(status = response.status, "Unreadable generation response: {}", e);
            FlowError::Request {
                status: Some(response.status),
                message: format!("Invalid response from server: {}", e),
            }
        })
    }

    /// Probe `GET {base}/health`. Never fails; unreachable means offline.
    pub async fn health(&self) -> HealthStatus {
        match self.client.get(&self.health_url, &Headers::new()).await {
            Ok(response) if response.is_success() => match response.json::<HealthResponse>() {
                Ok(health) if health.is_healthy() => HealthStatus::Online,
                _ => HealthStatus::Offline,
            },
            Ok(response) => {
                debug!(status = response.status, "Health probe returned non-2xx");
                HealthStatus::Offline
            }
            Err(e) => {
                debug!("Health probe failed: {}", e);
                HealthStatus::Offline
            }
        }
    }
}
