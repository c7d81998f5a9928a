//! Command-line argument parsing.
//!
//! ```text
//! tweetgen [--dev] [--api-url <URL>] [--topic <TOPIC>] [--version|-V] [--help|-h]
//! ```

use thiserror::Error;

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: tweetgen [OPTIONS]

Generate tweets from a topic using the tweet generator service.

Options:
      --topic <TOPIC>    Generate once, print the result and exit
      --api-url <URL>    Service base address (overrides TWEETGEN_API_URL)
      --dev              Use the local development service
  -V, --version          Print version
  -h, --help             Print help

Environment:
  TWEETGEN_API_URL       Service base address
  TWEETGEN_DEV           Use the local development service when set
  TWEETGEN_LOG           Log filter (default: info)";

/// What to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Generate once without the TUI
    Generate { topic: String },
    /// Run the TUI application (default)
    RunTui,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: CliCommand,
    /// `--dev`
    pub dev: bool,
    /// `--api-url`
    pub api_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("unknown argument: {0}")]
    Unknown(String),
}

/// Parse command-line arguments, program name included.
///
/// `--version` and `--help` win over everything else.
///
/// # Examples
///
/// ```
/// use tweetgen::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["tweetgen".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap().command, CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut dev = false;
    let mut api_url = None;
    let mut topic = None;
    let mut early = None;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => {
                early.get_or_insert(CliCommand::Version);
            }
            "--help" | "-h" => {
                early.get_or_insert(CliCommand::Help);
            }
            "--dev" => dev = true,
            "--api-url" => {
                api_url = Some(args.next().ok_or(ArgsError::MissingValue("--api-url"))?);
            }
            "--topic" => {
                topic = Some(args.next().ok_or(ArgsError::MissingValue("--topic"))?);
            }
            other => {
                if let Some(value) = other.strip_prefix("--api-url=") {
                    api_url = Some(value.to_string());
                } else if let Some(value) = other.strip_prefix("--topic=") {
                    topic = Some(value.to_string());
                } else {
                    return Err(ArgsError::Unknown(other.to_string()));
                }
            }
        }
    }

    let command = match (early, topic) {
        (Some(command), _) => command,
        (None, Some(topic)) => CliCommand::Generate { topic },
        (None, None) => CliCommand::RunTui,
    };

    Ok(CliArgs {
        command,
        dev,
        api_url,
    })
}
