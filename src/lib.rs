//! querylog - structured query-trace logging for diesel.
//!
//! Turns each completed database operation into zero or one log line at a
//! severity picked by simple rules: errors log at error (except the expected
//! record-not-found and canceled conditions, which are skipped by default),
//! queries over the slow threshold log at warn, and everything else logs at
//! debug when enabled.
//!
//! # Modules
//!
//! - [`application`] - [`Logger`], the trace adapter
//! - [`port`] - [`StructuredLog`], the four-method backend capability set
//! - [`adapter`] - the `tracing` default backend and diesel instrumentation
//! - [`domain`] - structured fields, sentinel matching, call-site trimming
//! - [`infrastructure`] - TOML configuration and subscriber setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use diesel::prelude::*;
//! use querylog::{instrument, Logger};
//!
//! let logger = Logger::new(None).with_slow_threshold(Duration::from_millis(200));
//! let mut conn = SqliteConnection::establish("app.db").unwrap();
//! instrument(&mut conn, Arc::new(logger));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

pub use adapter::{
    default_backend, instrument, set_default_backend, PoolInstrumentation, QueryInstrumentation,
    TracingLog,
};
pub use application::{default_formatter, LogLevel, Logger, MsgFormatter};
pub use domain::{Field, FieldValue};
pub use error::{ConfigError, Error, Result, Sentinel};
pub use infrastructure::config::{LoggingConfig, TraceConfig};
pub use port::StructuredLog;
