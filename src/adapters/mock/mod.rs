//! Mock implementations for testing.
//!
//! Enables unit testing without network access or a system clipboard.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockClipboard`] - Clipboard with recorded writes and failure injection

pub mod clipboard;
pub mod http;

pub use clipboard::MockClipboard;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
