//! Kampeer CLI entry point.
//!
//! See `kampeer_cli::run` for argument handling and exit codes.

use std::process::ExitCode;

fn main() -> ExitCode {
    kampeer_cli::run()
}
