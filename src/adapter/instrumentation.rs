//! Diesel integration.
//!
//! Feeds diesel's per-query instrumentation events into [`Logger::trace_at`].
//! Install on a single connection with [`instrument`], or on every pooled
//! connection with [`PoolInstrumentation`].

use std::error::Error as StdError;
use std::panic::Location;
use std::sync::Arc;
use std::time::Instant;

use diesel::connection::{Instrumentation, InstrumentationEvent};
use diesel::r2d2::CustomizeConnection;
use diesel::Connection;
use tracing::Span;

use crate::application::Logger;

/// Per-connection diesel instrumentation that traces every finished query.
///
/// Diesel's events carry no call site, so the source reported in messages is
/// where the instrumentation was installed.
///
/// Start and finish events are paired last-in first-out, which assumes queries
/// on one connection nest. Two row cursors (`load_iter`) left open at once can
/// charge one query with the other's start time.
pub struct QueryInstrumentation {
    logger: Arc<Logger>,
    source: &'static Location<'static>,
    started: Vec<Instant>,
}

impl QueryInstrumentation {
    #[track_caller]
    #[must_use]
    pub fn new(logger: Arc<Logger>) -> Self {
        Self::at(logger, Location::caller())
    }

    fn at(logger: Arc<Logger>, source: &'static Location<'static>) -> Self {
        Self {
            logger,
            source,
            started: Vec::new(),
        }
    }
}

impl Instrumentation for QueryInstrumentation {
    fn on_connection_event(&mut self, event: InstrumentationEvent<'_>) {
        match event {
            InstrumentationEvent::StartQuery { .. } => self.started.push(Instant::now()),
            InstrumentationEvent::FinishQuery { query, error, .. } => {
                // A finish without a matching start has no measurable duration.
                let begin = self.started.pop().unwrap_or_else(Instant::now);
                let source = format!("{}:{}", self.source.file(), self.source.line());
                self.logger.trace_at(
                    &Span::current(),
                    begin,
                    || (query.to_string(), None),
                    error.map(|e| e as &(dyn StdError + 'static)),
                    &source,
                );
            }
            _ => {}
        }
    }
}

/// Install query tracing on one connection.
#[track_caller]
pub fn instrument<C: Connection>(conn: &mut C, logger: Arc<Logger>) {
    conn.set_instrumentation(QueryInstrumentation::new(logger));
}

/// r2d2 customizer installing a [`QueryInstrumentation`] on every connection
/// the pool opens.
#[derive(Debug, Clone)]
pub struct PoolInstrumentation {
    logger: Arc<Logger>,
    source: &'static Location<'static>,
}

impl PoolInstrumentation {
    #[track_caller]
    #[must_use]
    pub fn new(logger: Arc<Logger>) -> Self {
        Self {
            logger,
            source: Location::caller(),
        }
    }
}

impl<C: Connection, E> CustomizeConnection<C, E> for PoolInstrumentation {
    fn on_acquire(&self, conn: &mut C) -> Result<(), E> {
        conn.set_instrumentation(QueryInstrumentation::at(self.logger.clone(), self.source));
        Ok(())
    }
}
