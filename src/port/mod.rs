//! Trait definitions (hexagonal ports).
//!
//! The query logger depends only on [`StructuredLog`], never on a concrete
//! logging type. Adapters in [`crate::adapter`] implement it.

mod log;

pub use log::StructuredLog;

// Test utilities
#[cfg(test)]
pub use log::tests;
