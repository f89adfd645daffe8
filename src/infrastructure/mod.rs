//! Infrastructure layer.
//!
//! Technical concerns that support the logger without containing trace
//! policy.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading and validation
pub mod config;
