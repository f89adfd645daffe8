//! Query-trace configuration loading and validation.
//!
//! The logger's policy fields are public and can be set directly; this module
//! lets an embedding application keep them in a TOML file instead.
//!
//! # Example
//!
//! ```no_run
//! use querylog::infrastructure::config::TraceConfig;
//! use querylog::Logger;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = TraceConfig::load("querylog.toml")?;
//!     config.logging.init();
//!     let logger = Logger::from_config(None, &config);
//!     # let _ = logger;
//!     Ok(())
//! }
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::application::Logger;
use crate::error::{ConfigError, Result};
use crate::port::StructuredLog;

fn default_true() -> bool {
    true
}

/// Logger policy plus subscriber settings.
///
/// ```toml
/// slow_threshold_ms = 200
/// skip_record_not_found = true
/// skip_canceled = true
/// debug = false
///
/// [logging]
/// level = "querylog=debug,info"
/// format = "json"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TraceConfig {
    /// Queries slower than this many milliseconds log at warn. 0 disables.
    #[serde(default)]
    pub slow_threshold_ms: u64,

    #[serde(default = "default_true")]
    pub skip_record_not_found: bool,

    #[serde(default = "default_true")]
    pub skip_canceled: bool,

    /// Log successful, fast queries at debug.
    #[serde(default = "default_true")]
    pub debug: bool,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            slow_threshold_ms: 0,
            skip_record_not_found: true,
            skip_canceled: true,
            debug: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl TraceConfig {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    fn validate(&self) -> Result<()> {
        self.logging.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn slow_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_threshold_ms)
    }

    /// Copy this policy onto an existing logger. The formatter is untouched.
    pub fn apply(&self, logger: &mut Logger) {
        logger.slow_threshold = self.slow_threshold();
        logger.skip_record_not_found = self.skip_record_not_found;
        logger.skip_canceled = self.skip_canceled;
        logger.debug = self.debug;
    }
}

impl Logger {
    /// Build a logger with the policy from `config`.
    #[must_use]
    pub fn from_config(backend: Option<Arc<dyn StructuredLog>>, config: &TraceConfig) -> Self {
        let mut logger = Self::new(backend);
        config.apply(&mut logger);
        logger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::TracingLog;
    use crate::error::Error;

    #[test]
    fn empty_document_uses_defaults() {
        let config = TraceConfig::parse_toml("").unwrap();
        assert_eq!(config.slow_threshold_ms, 0);
        assert!(config.skip_record_not_found);
        assert!(config.skip_canceled);
        assert!(config.debug);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn parses_all_fields() {
        let config = TraceConfig::parse_toml(
            r#"
slow_threshold_ms = 200
skip_record_not_found = false
skip_canceled = false
debug = false

[logging]
level = "querylog=debug,warn"
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.slow_threshold(), Duration::from_millis(200));
        assert!(!config.skip_record_not_found);
        assert!(!config.skip_canceled);
        assert!(!config.debug);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn partial_logging_table_fills_defaults() {
        let config = TraceConfig::parse_toml("[logging]\nformat = \"compact\"\n").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "compact");
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let result = TraceConfig::parse_toml("slow_threshold_ms = \"fast\"");
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn invalid_logging_is_rejected() {
        let result = TraceConfig::parse_toml("[logging]\nformat = \"xml\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            }))
        ));
    }

    #[test]
    fn from_config_applies_policy() {
        let config = TraceConfig {
            slow_threshold_ms: 150,
            skip_record_not_found: false,
            skip_canceled: true,
            debug: false,
            logging: LoggingConfig::default(),
        };
        let backend: Arc<dyn StructuredLog> = Arc::new(TracingLog);
        let logger = Logger::from_config(Some(backend), &config);

        assert_eq!(logger.slow_threshold, Duration::from_millis(150));
        assert!(!logger.skip_record_not_found);
        assert!(logger.skip_canceled);
        assert!(!logger.debug);
    }
}
