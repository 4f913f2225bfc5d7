//! Logging and observability
//!
//! Structured logging built on `tracing`: console output plus an optional
//! JSON rolling-file layer.

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
