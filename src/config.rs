//! Configuration management for `VanScout`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::VanScoutError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `VanScout`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VanScoutConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Default query settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Catalog source settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file; the embedded dataset is used when unset
    pub path: Option<PathBuf>,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// Default query settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Number of vehicles in the popular list
    #[serde(default = "default_popular_limit")]
    pub popular_limit: u32,
    /// Average daily rate used for cost estimates before a van is picked
    #[serde(default = "default_estimated_daily_rate")]
    pub estimated_daily_rate: u32,
}

// Default value functions
fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_popular_limit() -> u32 {
    3
}

fn default_estimated_daily_rate() -> u32 {
    85
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            popular_limit: default_popular_limit(),
            estimated_daily_rate: default_estimated_daily_rate(),
        }
    }
}

impl VanScoutConfig {
    /// Load configuration from the given file, or the default config path,
    /// then apply environment overrides
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let explicit = config_path.is_some();
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if explicit && !config_file.exists() {
            return Err(VanScoutError::config(format!(
                "Config file not found: {}",
                config_file.display()
            ))
            .into());
        }

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. VANSCOUT_SERVER__PORT=9000
        builder = builder.add_source(
            Environment::with_prefix("VANSCOUT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: VanScoutConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vanscout").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_server_host();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.defaults.popular_limit == 0 {
            self.defaults.popular_limit = default_popular_limit();
        }
        if self.defaults.estimated_daily_rate == 0 {
            self.defaults.estimated_daily_rate = default_estimated_daily_rate();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(VanScoutError::config("Server port cannot be 0").into());
        }

        if !(1..=50).contains(&self.defaults.popular_limit) {
            return Err(
                VanScoutError::config("Popular limit must be between 1 and 50").into(),
            );
        }

        if !(1..=10_000).contains(&self.defaults.estimated_daily_rate) {
            return Err(VanScoutError::config(
                "Estimated daily rate must be between 1 and 10000",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(VanScoutError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(VanScoutError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }

    /// Address the HTTP server binds to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VanScoutConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.defaults.popular_limit, 3);
        assert_eq!(config.defaults.estimated_daily_rate, 85);
        assert!(config.catalog.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = VanScoutConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = VanScoutConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = VanScoutConfig::default();
        config.defaults.popular_limit = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Popular limit"));

        let mut config = VanScoutConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_defaults_fills_zeroes() {
        let mut config = VanScoutConfig::default();
        config.defaults.popular_limit = 0;
        config.defaults.estimated_daily_rate = 0;
        config.logging.level.clear();
        config.apply_defaults();
        assert_eq!(config.defaults.popular_limit, 3);
        assert_eq!(config.defaults.estimated_daily_rate, 85);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = std::env::temp_dir().join(format!("vanscout-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(
            &path,
            "[server]\nport = 9100\n\n[defaults]\npopular_limit = 5\n",
        )
        .unwrap();

        let config = VanScoutConfig::load_from_path(Some(path)).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.defaults.popular_limit, 5);
        assert_eq!(config.defaults.estimated_daily_rate, 85);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_explicit_config_file_is_error() {
        let result = VanScoutConfig::load_from_path(Some(PathBuf::from(
            "/nonexistent/vanscout/config.toml",
        )));
        assert!(result.unwrap_err().to_string().contains("Config file not found"));
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = VanScoutConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("vanscout"));
            assert!(path.to_string_lossy().ends_with("config.toml"));
        }
    }

    #[test]
    fn test_bind_address() {
        let config = VanScoutConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }
}
