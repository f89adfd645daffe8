//! Configuration for the query logger and the tracing subscriber.

pub mod logging;
pub mod settings;

pub use logging::LoggingConfig;
pub use settings::TraceConfig;
