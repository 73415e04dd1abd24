//! # CLI Configuration
//!
//! Event details and tariffs, layered the same way for every command.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     KAMPEER_EVENT_NAME="Kampeerweekend 2026"                           │
//! │     KAMPEER_SHARED_COST_CENTS=436                                      │
//! │     KAMPEER_LODGING_CENTS=885                                          │
//! │     KAMPEER_TOURIST_TAX_CENTS=133                                      │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/kampeer/kampeer.toml (Linux)                             │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     2025 camping rates                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [event]
//! name = "Kampeerweekend 2026"
//! location = "Groepskampeerterrein de Banken, Zeewolde"
//! dates = "7-9 augustus 2026"
//!
//! [tariffs]
//! shared_cost_per_person = 436  # cents
//! lodging_per_night = 885
//! tourist_tax_per_night = 133
//! ```

use std::path::{Path, PathBuf};

use kampeer_core::{Money, Tariffs};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};

/// Name of the config file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "kampeer.toml";

// =============================================================================
// Event Configuration
// =============================================================================

/// What the invitation is for. Shown in report headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventConfig {
    #[serde(default = "default_event_name")]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
}

fn default_event_name() -> String {
    "Kampeerweekend 2026".to_string()
}

impl Default for EventConfig {
    fn default() -> Self {
        EventConfig {
            name: default_event_name(),
            location: Some("Groepskampeerterrein de Banken, Zeewolde".to_string()),
            dates: Some("7-9 augustus 2026".to_string()),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub event: EventConfig,

    #[serde(default)]
    pub tariffs: Tariffs,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path, else the platform default if present)
    /// 3. Environment variables
    ///
    /// An explicitly given path must exist; the platform default may not.
    pub fn load(config_path: Option<&Path>) -> CliResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                path => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parses one TOML file; missing sections fall back to defaults.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading config from file");

        let contents = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `KAMPEER_*` overrides from a variable lookup.
    ///
    /// The lookup is a parameter so tests do not have to touch the process
    /// environment.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("KAMPEER_EVENT_NAME") {
            debug!(name = %name, "Overriding event name from environment");
            self.event.name = name;
        }

        let rates = [
            ("KAMPEER_SHARED_COST_CENTS", &mut self.tariffs.shared_cost_per_person),
            ("KAMPEER_LODGING_CENTS", &mut self.tariffs.lodging_per_night),
            ("KAMPEER_TOURIST_TAX_CENTS", &mut self.tariffs.tourist_tax_per_night),
        ];

        for (key, rate) in rates {
            let Some(raw) = lookup(key) else { continue };
            match raw.trim().parse::<i64>() {
                Ok(cents) => {
                    debug!(key, cents, "Overriding tariff from environment");
                    *rate = Money::from_cents(cents);
                }
                Err(_) => warn!(key, value = %raw, "Ignoring non-numeric tariff override"),
            }
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        if self.event.name.trim().is_empty() {
            return Err(CliError::InvalidConfig(
                "event name must not be empty".into(),
            ));
        }

        self.tariffs.validate()?;

        Ok(())
    }

    /// Renders the effective configuration as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("nl", "kampeer", "kampeer")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Header line for reports: name, then dates and location when known.
    pub fn event_title(&self) -> String {
        let details: Vec<&str> = [self.event.dates.as_deref(), self.event.location.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        if details.is_empty() {
            self.event.name.clone()
        } else {
            format!("{} ({})", self.event.name, details.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kampeer_core::CoreError;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.event.name, "Kampeerweekend 2026");
        assert_eq!(config.tariffs, Tariffs::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [tariffs]
            lodging_per_night = 950
            "#,
        )
        .unwrap();

        assert_eq!(config.tariffs.lodging_per_night.cents(), 950);
        assert_eq!(config.tariffs.shared_cost_per_person.cents(), 436);
        assert_eq!(config.tariffs.tourist_tax_per_night.cents(), 133);
        assert_eq!(config.event, EventConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [event]
            name = "Zomerkamp"

            [tariffs]
            shared_cost_per_person = 500
            "#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.event.name, "Zomerkamp");
        assert_eq!(config.event.location, None);
        assert_eq!(config.tariffs.shared_cost_per_person.cents(), 500);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load(Some(&dir.path().join("nope.toml")));
        assert!(matches!(result, Err(CliError::ConfigRead { .. })));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tariffs]\nlodging_per_night = \"veel\"").unwrap();

        let result = AppConfig::from_file(file.path());
        assert!(matches!(result, Err(CliError::ConfigParse { .. })));
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(lookup_from(&[
            ("KAMPEER_EVENT_NAME", "Herfstkamp"),
            ("KAMPEER_LODGING_CENTS", "1000"),
            ("KAMPEER_TOURIST_TAX_CENTS", "veel"),
        ]));

        assert_eq!(config.event.name, "Herfstkamp");
        assert_eq!(config.tariffs.lodging_per_night.cents(), 1000);
        // Unparseable values are ignored
        assert_eq!(config.tariffs.tourist_tax_per_night.cents(), 133);
    }

    #[test]
    fn test_validation() {
        let mut config = AppConfig::default();
        config.event.name = "  ".into();
        assert!(matches!(config.validate(), Err(CliError::InvalidConfig(_))));

        let mut config = AppConfig::default();
        config.tariffs.shared_cost_per_person = Money::from_cents(-5);
        assert!(matches!(config.validate(), Err(CliError::Core(_))));
    }

    #[test]
    fn test_oversized_tariff_override_is_rejected() {
        let mut config = AppConfig::default();
        config.apply_overrides(lookup_from(&[(
            "KAMPEER_LODGING_CENTS",
            "4611686018427387903",
        )]));

        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(CoreError::TariffTooHigh {
                name: "lodging_per_night",
                ..
            })
        ));
        assert_eq!(
            err.to_string(),
            "Tariff lodging_per_night must be at most 1000000 cents, got 4611686018427387903 cents"
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let toml_str = config.to_toml().unwrap();
        assert!(toml_str.contains("[event]"));
        assert!(toml_str.contains("[tariffs]"));
        assert!(toml_str.contains("lodging_per_night = 885"));

        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_event_title() {
        assert_eq!(
            AppConfig::default().event_title(),
            "Kampeerweekend 2026 (7-9 augustus 2026, Groepskampeerterrein de Banken, Zeewolde)"
        );

        let mut config = AppConfig::default();
        config.event.location = None;
        config.event.dates = None;
        assert_eq!(config.event_title(), "Kampeerweekend 2026");
    }
}
