//! Plain line-based output for the headless `--topic` mode.

mod boxes;

pub use boxes::*;
