//! Application services.
//!
//! - [`Logger`] turns one ORM trace event into zero or one structured log
//!   emission.

mod logger;

pub use logger::{default_formatter, LogLevel, Logger, MsgFormatter};
