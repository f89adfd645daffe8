//! Implementations of ports (hexagonal adapters).
//!
//! - [`TracingLog`] - outbound: the default [`crate::port::StructuredLog`]
//!   backend, routed through `tracing`
//! - [`QueryInstrumentation`], [`PoolInstrumentation`] - inbound: diesel
//!   query events into [`crate::Logger`]

mod instrumentation;
mod tracing_log;

pub use instrumentation::{instrument, PoolInstrumentation, QueryInstrumentation};
pub use tracing_log::{default_backend, set_default_backend, TracingLog, TARGET};
