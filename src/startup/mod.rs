//! Startup wiring: configuration resolved once, then logging.
//!
//! # Components
//!
//! - [`config`] - Endpoint and logging configuration
//! - [`logging`] - File-backed tracing subscriber
//!
//! # Usage
//!
//! ```ignore
//! use tweetgen::startup::{init_logging, ClientConfig};
//!
//! let config = ClientConfig::resolve(None, false);
//! init_logging(&config);
//! ```

pub mod config;
pub mod logging;

pub use config::{ClientConfig, LOCAL_API_URL, REMOTE_API_URL};
pub use logging::{init_logging, log_file_path};
