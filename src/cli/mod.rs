//! Command-line interface: argument parsing, version/help output and the
//! headless `--topic` mode.
//!
//! ```ignore
//! use tweetgen::cli::{parse_args, CliCommand};
//!
//! let args = parse_args(std::env::args())?;
//! match args.command {
//!     CliCommand::RunTui => { /* start the TUI */ }
//!     _ => { /* handled without a terminal */ }
//! }
//! ```

pub mod args;
pub mod generate;
pub mod version;

pub use args::{parse_args, ArgsError, CliArgs, CliCommand, USAGE};
pub use generate::{generate_once, run_headless};
pub use version::{handle_version_command, VERSION};
