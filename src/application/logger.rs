//! Query-trace logger.
//!
//! Receives one call per completed database operation and decides whether,
//! and at which severity, to hand it to the structured logging backend.

use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::Span;

use crate::adapter::default_backend;
use crate::domain::{is_canceled, is_record_not_found, source_short, Field, FieldValue};
use crate::port::StructuredLog;

/// Builds the message and extra fields for a traced statement.
///
/// Arguments are the statement text, the elapsed time and the trimmed call
/// site. Returned fields may borrow from the statement.
pub type MsgFormatter =
    Arc<dyn for<'a> Fn(&'a str, Duration, &str) -> (String, Vec<Field<'a>>) + Send + Sync>;

/// Severity an ORM may ask its logger to filter at.
///
/// Accepted by [`Logger::log_mode`] and ignored; filtering is driven by the
/// logger's own thresholds and flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Silent,
    Error,
    Warn,
    #[default]
    Info,
}

/// Message is `SQL <first token> [<source>]`, so log aggregators group by
/// statement kind; the full statement and duration go in the fields.
#[must_use]
pub fn default_formatter<'a>(
    sql: &'a str,
    elapsed: Duration,
    source: &str,
) -> (String, Vec<Field<'a>>) {
    let verb = sql.split_whitespace().next().unwrap_or_default();
    let fields = vec![Field::new("duration", elapsed), Field::new("sql", sql)];
    (format!("SQL {verb} [{source}]"), fields)
}

/// Adapter from ORM trace callbacks to a [`StructuredLog`] backend.
///
/// The backend is fixed at construction. Every other field is policy that
/// the embedding application may change after construction.
pub struct Logger {
    backend: Arc<dyn StructuredLog>,
    /// Queries slower than this are logged at warn. Zero disables the check.
    pub slow_threshold: Duration,
    pub skip_record_not_found: bool,
    pub skip_canceled: bool,
    /// Log successful, fast queries at debug.
    pub debug: bool,
    pub msg_formatter: MsgFormatter,
}

impl Logger {
    /// Create a logger writing to `backend`, or to the process-wide default
    /// backend (see [`crate::adapter::set_default_backend`]) when `None`.
    #[must_use]
    pub fn new(backend: Option<Arc<dyn StructuredLog>>) -> Self {
        Self {
            backend: backend.unwrap_or_else(default_backend),
            slow_threshold: Duration::ZERO,
            skip_record_not_found: true,
            skip_canceled: true,
            debug: true,
            msg_formatter: Arc::new(default_formatter),
        }
    }

    /// Replace the message formatter.
    #[must_use]
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: for<'a> Fn(&'a str, Duration, &str) -> (String, Vec<Field<'a>>)
            + Send
            + Sync
            + 'static,
    {
        self.msg_formatter = Arc::new(formatter);
        self
    }

    #[must_use]
    pub fn with_slow_threshold(mut self, threshold: Duration) -> Self {
        self.slow_threshold = threshold;
        self
    }

    /// The level is ignored; the logger always returns itself.
    #[must_use]
    pub fn log_mode(&self, _level: LogLevel) -> &Self {
        self
    }

    pub fn info(&self, ctx: &Span, args: fmt::Arguments<'_>) {
        self.backend.info(ctx, &fmt::format(args), &[]);
    }

    pub fn warn(&self, ctx: &Span, args: fmt::Arguments<'_>) {
        self.backend.warn(ctx, &fmt::format(args), &[]);
    }

    pub fn error(&self, ctx: &Span, args: fmt::Arguments<'_>) {
        self.backend.error(ctx, &fmt::format(args), &[]);
    }

    /// Log one completed database operation.
    ///
    /// `statement` is called exactly once and yields the executed statement
    /// text and, when known, the affected row count. The call site of this
    /// method is reported as the source.
    #[track_caller]
    pub fn trace<F>(
        &self,
        ctx: &Span,
        begin: Instant,
        statement: F,
        err: Option<&(dyn StdError + 'static)>,
    ) where
        F: FnOnce() -> (String, Option<u64>),
    {
        let elapsed = begin.elapsed();
        let caller = Location::caller();
        let source = source_short(&format!("{}:{}", caller.file(), caller.line()));
        self.emit(ctx, elapsed, &source, statement, err);
    }

    /// Same as [`Logger::trace`] with an explicit source location, for
    /// integrations that cannot see the originating call site.
    pub fn trace_at<F>(
        &self,
        ctx: &Span,
        begin: Instant,
        statement: F,
        err: Option<&(dyn StdError + 'static)>,
        source: &str,
    ) where
        F: FnOnce() -> (String, Option<u64>),
    {
        let elapsed = begin.elapsed();
        let source = source_short(source);
        self.emit(ctx, elapsed, &source, statement, err);
    }

    fn emit<F>(
        &self,
        ctx: &Span,
        elapsed: Duration,
        source: &str,
        statement: F,
        err: Option<&(dyn StdError + 'static)>,
    ) where
        F: FnOnce() -> (String, Option<u64>),
    {
        let (sql, _rows) = statement();
        let (msg, mut fields) = (self.msg_formatter)(&sql, elapsed, source);

        if let Some(err) = err {
            if self.skip_record_not_found && is_record_not_found(err) {
                return;
            }
            if self.skip_canceled && is_canceled(err) {
                return;
            }
            fields.push(Field {
                key: "error",
                value: FieldValue::Error(err),
            });
            self.backend.error(ctx, &msg, &fields);
            return;
        }

        if !self.slow_threshold.is_zero() && elapsed > self.slow_threshold {
            self.backend.warn(ctx, &msg, &[]);
            return;
        }

        if self.debug {
            self.backend.debug(ctx, &msg, &[]);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(None)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("slow_threshold", &self.slow_threshold)
            .field("skip_record_not_found", &self.skip_record_not_found)
            .field("skip_canceled", &self.skip_canceled)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}
