//! `tracing`-backed structured log, and the process-wide default backend.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{Level, Span};

use crate::domain::{Field, Fields};
use crate::port::StructuredLog;

/// Target used for every event emitted by [`TracingLog`].
pub const TARGET: &str = "querylog";

static DEFAULT_BACKEND: RwLock<Option<Arc<dyn StructuredLog>>> = parking_lot::const_rwlock(None);

/// The backend [`crate::Logger::new`] uses when none is injected.
///
/// This is [`TracingLog`] unless replaced with [`set_default_backend`].
#[must_use]
pub fn default_backend() -> Arc<dyn StructuredLog> {
    DEFAULT_BACKEND
        .read()
        .clone()
        .unwrap_or_else(|| Arc::new(TracingLog))
}

/// Replace the process-wide default backend, returning the previous one.
///
/// Passing `None` restores [`TracingLog`]. Loggers already constructed keep
/// the backend they were built with.
pub fn set_default_backend(
    backend: Option<Arc<dyn StructuredLog>>,
) -> Option<Arc<dyn StructuredLog>> {
    std::mem::replace(&mut *DEFAULT_BACKEND.write(), backend)
}

macro_rules! emit {
    ($level:expr, $ctx:expr, $msg:expr, $fields:expr) => {
        if $fields.is_empty() {
            tracing::event!(target: TARGET, parent: $ctx, $level, "{}", $msg);
        } else {
            tracing::event!(
                target: TARGET,
                parent: $ctx,
                $level,
                fields = %Fields($fields),
                "{}",
                $msg
            );
        }
    };
}

/// Emits through whatever `tracing` subscriber is installed.
///
/// Events are parented to the context span and carry the field list as a
/// single `fields` value of `key=value` pairs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl StructuredLog for TracingLog {
    fn debug(&self, ctx: &Span, msg: &str, fields: &[Field<'_>]) {
        emit!(Level::DEBUG, ctx, msg, fields);
    }

    fn info(&self, ctx: &Span, msg: &str, fields: &[Field<'_>]) {
        emit!(Level::INFO, ctx, msg, fields);
    }

    fn warn(&self, ctx: &Span, msg: &str, fields: &[Field<'_>]) {
        emit!(Level::WARN, ctx, msg, fields);
    }

    fn error(&self, ctx: &Span, msg: &str, fields: &[Field<'_>]) {
        emit!(Level::ERROR, ctx, msg, fields);
    }
}
