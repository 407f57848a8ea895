use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::Level;

use crate::conversation::engine::DEFAULT_AUTHOR_LABEL;
use crate::error::ConfigError;

const MAX_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to config.toml - computed at load time, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    /// `en` or `es`; unset means detect from the environment.
    pub locale: Option<String>,

    /// Author shown on records created by the assistant.
    pub author_label: String,

    /// Simulated assistant latency, in milliseconds.
    pub reply_delay_ms: u64,

    /// Delay before the introductory message, in milliseconds.
    pub greeting_delay_ms: u64,

    /// Start with the demo's sample records in the database panel.
    pub seed_sample_records: bool,

    /// trace | debug | info | warn | error | off
    pub log_level: String,

    /// Open the guided tour when the TUI starts.
    pub assistance_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            locale: None,
            author_label: DEFAULT_AUTHOR_LABEL.into(),
            reply_delay_ms: 500,
            greeting_delay_ms: 500,
            seed_sample_records: true,
            log_level: "info".into(),
            assistance_on_start: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("reply_delay_ms", self.reply_delay_ms),
            ("greeting_delay_ms", self.greeting_delay_ms),
        ] {
            if value > MAX_DELAY_MS {
                return Err(ConfigError::Validation(format!(
                    "{name} must be at most {MAX_DELAY_MS}, got {value}"
                )));
            }
        }
        if self.author_label.trim().is_empty() {
            return Err(ConfigError::Validation("author_label cannot be empty".into()));
        }
        self.max_log_level()?;
        Ok(())
    }

    /// `None` means logging is off.
    pub fn max_log_level(&self) -> Result<Option<Level>, ConfigError> {
        match self.log_level.trim().to_lowercase().as_str() {
            "off" => Ok(None),
            "trace" => Ok(Some(Level::TRACE)),
            "debug" => Ok(Some(Level::DEBUG)),
            "info" => Ok(Some(Level::INFO)),
            "warn" => Ok(Some(Level::WARN)),
            "error" => Ok(Some(Level::ERROR)),
            other => Err(ConfigError::Validation(format!(
                "unknown log_level {other:?}"
            ))),
        }
    }

    /// Directory holding config.toml and the TUI log file.
    pub fn config_dir(&self) -> &Path {
        self.config_path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn log_path(&self) -> PathBuf {
        self.config_dir().join("insight.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_log_level().unwrap(), Some(Level::INFO));
    }

    #[test]
    fn rejects_long_delays() {
        let config = Config {
            reply_delay_ms: 120_000,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("reply_delay_ms"));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let config = Config {
            log_level: "loud".into(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn off_disables_logging() {
        let config = Config {
            log_level: "OFF".into(),
            ..Config::default()
        };
        assert_eq!(config.max_log_level().unwrap(), None);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str("reply_delay_ms = 0\nlocale = \"en\"\n").unwrap();
        assert_eq!(config.reply_delay_ms, 0);
        assert_eq!(config.locale.as_deref(), Some("en"));
        assert_eq!(config.greeting_delay_ms, 500);
        assert!(config.seed_sample_records);
    }
}
