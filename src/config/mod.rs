//! Configuration management
//!
//! TOML configuration with environment variable substitution and
//! PODIUM_* overrides.

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{LoggingConfig, PodiumConfig};
