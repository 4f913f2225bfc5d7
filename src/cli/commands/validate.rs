//! Validate-config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(path = %config_path, "Validating configuration");

        match load_config(config_path) {
            Ok(config) => {
                println!("Configuration is valid.");
                println!("  Application: {}", config.application.name);
                println!("  Log level:   {}", config.application.log_level);
                println!("  Store:       {:?}", config.store.backend);
                if let Some(pg) = &config.store.postgresql {
                    println!("  Pool size:   {}", pg.max_connections);
                }
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Configuration validation failed");
                eprintln!("Configuration invalid: {e}");
                Ok(2)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_validate_missing_config_returns_config_error_code() {
        let args = ValidateArgs {};
        let code = args.execute("definitely-missing.toml").await.unwrap();
        assert_eq!(code, 2);
    }
}
