//! Client configuration.
//!
//! The service base address is chosen exactly once, before the UI starts,
//! and handed to the transport. Nothing re-reads the environment afterwards.

use crate::models::MAX_ITERATION;

/// Base address used in dev mode.
pub const LOCAL_API_URL: &str = "http://localhost:8000/api";

/// Base address of the deployed service.
pub const REMOTE_API_URL: &str = "https://ai-tweet-generator-73ge.onrender.com";

/// Explicit base address override.
pub const API_URL_ENV: &str = "TWEETGEN_API_URL";

/// When set (to anything), select [`LOCAL_API_URL`].
pub const DEV_ENV: &str = "TWEETGEN_DEV";

/// `EnvFilter` directives for the log file.
pub const LOG_ENV: &str = "TWEETGEN_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

/// Resolved client configuration.
///
/// # Example
///
/// ```ignore
/// use tweetgen::startup::ClientConfig;
///
/// let config = ClientConfig::default().with_api_base_url("http://127.0.0.1:9000/api/");
/// assert_eq!(config.generate_url(), "http://127.0.0.1:9000/api/generate-tweet");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service base address without a trailing slash
    pub api_base_url: String,
    /// Whether dev mode selected the local address
    pub dev_mode: bool,
    /// Optimisation rounds sent with every request
    pub max_iteration: u32,
    /// Tracing filter directives
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: REMOTE_API_URL.to_string(),
            dev_mode: false,
            max_iteration: MAX_ITERATION,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ClientConfig {
    /// Resolve configuration from command-line flags and the environment.
    ///
    /// Precedence for the base address: `api_url_flag`, then
    /// `TWEETGEN_API_URL`, then the local address in dev mode (`dev_flag` or
    /// `TWEETGEN_DEV`), then the deployed address.
    pub fn resolve(api_url_flag: Option<&str>, dev_flag: bool) -> Self {
        let env_url = std::env::var(API_URL_ENV).ok();
        let dev_mode = dev_flag || std::env::var(DEV_ENV).is_ok();
        let log_filter = std::env::var(LOG_ENV)
            .ok()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            api_base_url: select_base_url(api_url_flag, env_url.as_deref(), dev_mode),
            dev_mode,
            max_iteration: MAX_ITERATION,
            log_filter,
        }
    }

    /// Create config from the environment alone.
    pub fn from_env() -> Self {
        Self::resolve(None, false)
    }

    /// Override the base address.
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = normalize_base_url(&url.into());
        self
    }

    /// `POST` target for generation.
    pub fn generate_url(&self) -> String {
        format!("{}/generate-tweet", self.api_base_url)
    }

    /// `GET` target for the health probe.
    pub fn health_url(&self) -> String {
        format!("{}/health", self.api_base_url)
    }
}

fn select_base_url(flag: Option<&str>, env: Option<&str>, dev_mode: bool) -> String {
    let explicit = [flag, env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|url| !url.is_empty());

    match explicit {
        Some(url) => normalize_base_url(url),
        None if dev_mode => LOCAL_API_URL.to_string(),
        None => REMOTE_API_URL.to_string(),
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
