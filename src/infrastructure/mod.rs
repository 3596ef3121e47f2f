//! Infrastructure: configuration and runtime wiring.

pub mod config;
#[cfg(feature = "telegram")]
pub mod runtime;
