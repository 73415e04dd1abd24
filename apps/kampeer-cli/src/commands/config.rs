//! # Config Command
//!
//! Prints the effective configuration after all layers are applied.

use tracing::debug;

use super::Report;
use crate::config::AppConfig;
use crate::error::CliResult;

pub fn run(config: &AppConfig) -> CliResult<Report> {
    debug!("Rendering effective configuration");
    Report::new(true, config.to_toml()?, config)
}
