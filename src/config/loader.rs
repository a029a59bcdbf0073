//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a session
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{RosterError, RosterResult};

use super::types::SessionConfig;

/// Loads and provides access to the session configuration.
///
/// # Example
///
/// ```no_run
/// use salary_roster::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/roster.yaml")?;
/// println!("Currency symbol: {}", loader.config().currency.symbol);
/// # Ok::<(), salary_roster::error::RosterError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: SessionConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown values (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::parse(&content).map_err(|message| RosterError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        debug!(path = %path_str, "Loaded session configuration");
        Ok(Self { config })
    }

    fn parse(content: &str) -> Result<SessionConfig, String> {
        // An empty file deserializes to YAML null; treat it as "all defaults".
        if content.trim().is_empty() {
            return Ok(SessionConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> SessionConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InvalidNumberPolicy, ReportFormat};
    use crate::format::CurrencyFormat;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/roster.yaml"
    }

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "salary-roster-{}-{}.yaml",
            std::process::id(),
            name
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_bundled_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap().into_config();
        assert!(config.clear_screen);
        assert_eq!(config.invalid_number, InvalidNumberPolicy::Abort);
        assert_eq!(config.report_format, ReportFormat::Text);
        assert_eq!(config.currency, CurrencyFormat::pt_br());
    }

    #[test]
    fn test_load_missing_file_returns_not_found() {
        match ConfigLoader::load("/nonexistent/roster.yaml") {
            Err(RosterError::ConfigNotFound { path }) => {
                assert!(path.contains("roster.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let path = write_temp("invalid", "clear_screen: [not, a, bool");
        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).ok();

        match result {
            Err(RosterError::ConfigParseError { path, message }) => {
                assert!(path.contains("invalid"));
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let path = write_temp("empty", "");
        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).ok();

        assert_eq!(result.unwrap().into_config(), SessionConfig::default());
    }

    #[test]
    fn test_load_partial_currency_override() {
        let path = write_temp(
            "partial",
            "invalid_number: retry\ncurrency:\n  symbol: \"US$\"\n  group_separator: \",\"\n  decimal_separator: \".\"\n",
        );
        let result = ConfigLoader::load(&path);
        fs::remove_file(&path).ok();

        let config = result.unwrap().into_config();
        assert_eq!(config.invalid_number, InvalidNumberPolicy::Retry);
        assert_eq!(config.currency.symbol, "US$");
        assert_eq!(config.currency.group_separator, ",");
        assert_eq!(config.currency.decimal_places, 2);
    }
}
