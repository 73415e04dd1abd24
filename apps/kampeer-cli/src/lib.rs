//! # Kampeer CLI
//!
//! Command-line front end for the camping-weekend RSVP rules.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         kampeer (binary)                                │
//! │                                                                         │
//! │   main.rs ──► run()                                                     │
//! │                 │                                                       │
//! │                 ├── Cli::parse()          (clap)                        │
//! │                 ├── init_tracing()        (stderr, RUST_LOG)            │
//! │                 ├── AppConfig::load()     (defaults → TOML → env)       │
//! │                 └── dispatch()                                          │
//! │                        │                                                │
//! │                        ▼                                                │
//! │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐                │
//! │   │ validate │  │  quote   │  │  stats   │  │  config  │                │
//! │   └────┬─────┘  └────┬─────┘  └────┬─────┘  └────┬─────┘                │
//! │        └─────────────┴──────┬──────┴─────────────┘                      │
//! │                             ▼                                           │
//! │                  Report ──► stdout (text or --json)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exit Codes
//! | Code | Meaning                                         |
//! |------|-------------------------------------------------|
//! | 0    | Command succeeded                               |
//! | 1    | Input was read but rejected (invalid RSVP)      |
//! | 2    | Configuration, I/O, or parse error              |

pub mod commands;
pub mod config;
pub mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::commands::{OutputFormat, Report};
use crate::config::AppConfig;

// =============================================================================
// Arguments
// =============================================================================

#[derive(Debug, Parser)]
#[command(name = "kampeer", version, about = "RSVP tools for the camping weekend")]
pub struct Cli {
    /// Path to a kampeer.toml config file
    #[arg(long, global = true, env = "KAMPEER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check an RSVP submission against the form rules
    Validate {
        /// JSON file with one submission
        path: PathBuf,
    },
    /// Validate an RSVP submission and print its price breakdown
    Quote {
        /// JSON file with one submission
        path: PathBuf,
    },
    /// Summarize an export of stored RSVPs
    Stats {
        /// JSON file with an array of stored RSVPs
        path: PathBuf,
    },
    /// Print the effective configuration
    Config,
}

impl Cli {
    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

// =============================================================================
// Entry Point
// =============================================================================

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so stdout stays parseable with `--json`.
/// `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,kampeer=debug,kampeer_cli=debug,kampeer_core=debug"
    } else {
        "warn,kampeer=info,kampeer_cli=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses arguments, runs the command, and maps the outcome to an exit code.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(&cli) {
        Ok((text, success)) => {
            println!("{text}");
            if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns the rendered stdout and whether the command accepted its input.
fn execute(cli: &Cli) -> anyhow::Result<(String, bool)> {
    let config = AppConfig::load(cli.config.as_deref()).context("Could not load configuration")?;
    info!(event = %config.event.name, "Configuration loaded");

    let report = dispatch(&cli.command, &config)?;
    let text = report
        .render(cli.output_format())
        .context("Could not render output")?;

    Ok((text, report.success))
}

/// Runs one subcommand against a loaded configuration.
pub fn dispatch(command: &Command, config: &AppConfig) -> anyhow::Result<Report> {
    let report = match command {
        Command::Validate { path } => commands::validate::run(path)
            .with_context(|| format!("Could not validate {}", path.display()))?,
        Command::Quote { path } => commands::quote::run(path, config)
            .with_context(|| format!("Could not quote {}", path.display()))?,
        Command::Stats { path } => commands::stats::run(path, config)
            .with_context(|| format!("Could not summarize {}", path.display()))?,
        Command::Config => commands::config::run(config)?,
    };

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::parse_from(["kampeer", "quote", "rsvp.json", "--json", "-v"]);
        assert!(cli.json);
        assert!(cli.verbose);
        assert_eq!(cli.output_format(), OutputFormat::Json);
        assert!(matches!(cli.command, Command::Quote { ref path } if path == &PathBuf::from("rsvp.json")));
    }

    #[test]
    fn test_dispatch_invalid_submission() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name":"","email":"geen-adres","attendance":""}}"#).unwrap();

        let command = Command::Validate {
            path: file.path().to_path_buf(),
        };
        let report = dispatch(&command, &AppConfig::default()).unwrap();

        assert!(!report.success);
        assert_eq!(report.json["errors"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_dispatch_missing_file_has_context() {
        let command = Command::Stats {
            path: PathBuf::from("/definitely/not/here.json"),
        };
        let err = dispatch(&command, &AppConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("Could not summarize"));
    }

    #[test]
    fn test_dispatch_config() {
        let report = dispatch(&Command::Config, &AppConfig::default()).unwrap();
        assert!(report.success);
        assert!(report.text.contains("[tariffs]"));
    }
}
