//! Structured logging port.
//!
//! This module defines the narrow capability set a logging backend must
//! provide to receive query traces: one emission method per severity.

use tracing::Span;

use crate::domain::Field;

/// Severity-leveled structured log emission.
///
/// Each method takes the caller's context (the span the query ran in), a
/// message, and a key/value list.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`); one backend is
///   shared by every connection that traces through it
/// - Any blocking (writing to a stream, for example) is the backend's own
///   contract; the logger calls these methods inline
pub trait StructuredLog: Send + Sync {
    /// Emit at debug severity.
    fn debug(&self, ctx: &Span, msg: &str, fields: &[Field<'_>]);

    /// Emit at info severity.
    fn info(&self, ctx: &Span, msg: &str, fields: &[Field<'_>]);

    /// Emit at warning severity.
    fn warn(&self, ctx: &Span, msg: &str, fields: &[Field<'_>]);

    /// Emit at error severity.
    fn error(&self, ctx: &Span, msg: &str, fields: &[Field<'_>]);
}
