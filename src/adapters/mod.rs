//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`ArboardClipboard`] - System clipboard using arboard
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::MockClipboard`] - In-memory clipboard with failure injection

pub mod arboard_clipboard;
pub mod mock;
pub mod reqwest_http;

pub use arboard_clipboard::ArboardClipboard;
pub use mock::{MockClipboard, MockHttpClient, MockResponse};
pub use reqwest_http::ReqwestHttpClient;
