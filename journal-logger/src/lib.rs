//! Tracing bootstrap shared by the journal binaries and services.
//!
//! Provides a small [`LogConfig`] struct, deserializable from the same TOML
//! file as the rest of the application configuration, and an [`init`] function
//! that installs the global `tracing` subscriber accordingly.
//!
//! [`LogConfig`]: logging::LogConfig
//! [`init`]: logging::init

pub mod logging;

pub use logging::{init, LogConfig, LogFormat, LogOutput};
