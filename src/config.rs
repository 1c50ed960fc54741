use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Main configuration structure for Portfolio Book
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PortfolioBookConfig {
    /// Logging settings
    pub observability: ObservabilityConfig,
    /// Terminal rendering settings
    pub presentation: PresentationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    /// Emit logs as JSON instead of human-readable lines
    pub json_logs: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PresentationConfig {
    /// Show the page indicator dots
    pub show_indicator: bool,
    /// Show the title of the current page
    pub show_title: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json_logs: false,
        }
    }
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            show_indicator: true,
            show_title: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl PortfolioBookConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (portfolio-book.toml, .portfolio-book-rc)
    /// 3. Environment variables (prefixed with PORTFOLIO_BOOK__)
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if Path::new("portfolio-book.toml").exists() {
            builder = builder.add_source(File::with_name("portfolio-book"));
        }

        if Path::new(".portfolio-book-rc").exists() {
            builder = builder.add_source(
                File::with_name(".portfolio-book-rc").format(config::FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO_BOOK")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: PortfolioBookConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document layered over the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: PortfolioBookConfig = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from_str(content, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.observability.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(
                self.observability.log_level.clone(),
            ));
        }
        Ok(())
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<PortfolioBookConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        let _ = PortfolioBookConfig::load_env_file();
        PortfolioBookConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static PortfolioBookConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PortfolioBookConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.presentation.show_indicator);
        assert!(!config.observability.json_logs);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = tokio_test::assert_ok!(PortfolioBookConfig::from_toml_str(
            r#"
            [presentation]
            show_indicator = false
            "#,
        ));
        assert!(!config.presentation.show_indicator);
        assert!(config.presentation.show_title);
        assert_eq!(config.observability.log_level, "warn");
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let result = PortfolioBookConfig::from_toml_str(
            r#"
            [observability]
            log_level = "loud"
            "#,
        );
        tokio_test::assert_err!(result);
    }

    #[test]
    fn test_save_round_trips_through_toml() {
        let dir = std::env::temp_dir().join(format!("portfolio-book-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("portfolio-book.toml");

        let mut config = PortfolioBookConfig::default();
        config.observability.json_logs = true;
        config.save_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let loaded = PortfolioBookConfig::from_toml_str(&content).unwrap();
        assert!(loaded.observability.json_logs);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
