use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Well-known error conditions that the query logger treats as expected.
///
/// Hosts can return these directly (or wrap them as a `source`) to have the
/// logger recognize the condition without string matching.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    #[error("record not found")]
    RecordNotFound,

    #[error("context canceled")]
    Canceled,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to install tracing subscriber: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, Error>;
