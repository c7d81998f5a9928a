//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST)
//! - [`ClipboardProvider`] - System clipboard writes

pub mod clipboard;
pub mod http;

pub use clipboard::ClipboardProvider;
pub use http::{Headers, HttpClient, HttpError, Response};
