use super::{ConfigError, LoggingConfig, OutputFormat, RenderConfig, SubscriptionConfig};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub subscription: SubscriptionConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub event: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads configuration from `config_path` (or defaults when `None`),
    /// then applies CLI overrides.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(Path::new(path))?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(event) = overrides.event {
            self.subscription.event = event;
        }
        if let Some(format) = overrides.format {
            self.render.format = format;
        }
        if let Some(output) = overrides.output {
            self.render.output = Some(output);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.subscription.event.trim().is_empty() {
            return Err(ConfigError::Validation(
                "subscription.event cannot be empty".to_string(),
            ));
        }

        if self.render.table_id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "render.table_id cannot be empty".to_string(),
            ));
        }

        if let Some(output) = &self.render.output {
            if output.is_dir() {
                return Err(ConfigError::Validation(format!(
                    "render.output {} is a directory",
                    output.display()
                )));
            }
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "unknown logging.level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}
