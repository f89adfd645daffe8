//! Core types for query tracing: structured fields, sentinel matching and
//! call-site trimming.

mod field;
mod sentinel;
mod source;

pub use field::{Field, FieldValue, Fields};
pub use sentinel::{is_canceled, is_record_not_found};
pub use source::source_short;
