//! tweetgen - a terminal client for an AI tweet generator service
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod cli_output;
pub mod clipboard;
pub mod error;
pub mod flow;
pub mod models;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
