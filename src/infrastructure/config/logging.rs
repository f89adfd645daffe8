//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Error, Result};

const FORMATS: [&str; 3] = ["pretty", "compact", "json"];

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `querylog=debug,warn`.
    pub level: String,
    /// One of `pretty`, `compact` or `json`.
    pub format: String,
}

impl LoggingConfig {
    /// Check that the level parses and the format is known.
    pub(crate) fn validate(&self) -> std::result::Result<(), ConfigError> {
        EnvFilter::try_new(&self.level).map_err(|e| ConfigError::InvalidValue {
            field: "logging.level",
            reason: e.to_string(),
        })?;
        if !FORMATS.contains(&self.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected one of {}", FORMATS.join(", ")),
            });
        }
        Ok(())
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over `level`.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn try_init(&self) -> Result<()> {
        let filter = self.filter();
        let installed = match self.format.as_str() {
            "json" => fmt().json().with_env_filter(filter).try_init(),
            "compact" => fmt().compact().with_env_filter(filter).try_init(),
            _ => fmt().with_env_filter(filter).try_init(),
        };
        installed.map_err(|e| Error::Logging(e.to_string()))
    }

    /// Like [`LoggingConfig::try_init`], but keeps an already-installed
    /// subscriber and reports the refusal at debug through it.
    pub fn init(&self) {
        if let Err(error) = self.try_init() {
            tracing::debug!(%error, "keeping existing tracing subscriber");
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
