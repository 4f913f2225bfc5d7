//! Init command implementation
//!
//! Writes a starter configuration file.

use clap::Args;
use std::path::Path;

const CONFIG_TEMPLATE: &str = r#"# Podium configuration

[application]
name = "podium"
log_level = "info"

[store]
# "postgresql" or "memory"
backend = "postgresql"

[store.postgresql]
# Supports ${VAR} substitution from the environment
connection_string = "${PODIUM_DATABASE_URL}"
max_connections = 10
connection_timeout_seconds = 30

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = "podium.toml")]
    pub output: String,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let path = Path::new(&self.output);

        if path.exists() && !self.force {
            eprintln!(
                "Refusing to overwrite existing file {} (use --force)",
                path.display()
            );
            return Ok(2);
        }

        std::fs::write(path, CONFIG_TEMPLATE)?;

        tracing::info!(path = %path.display(), "Configuration file written");
        println!("Wrote starter configuration to {}", path.display());
        println!("Set PODIUM_DATABASE_URL or edit the connection string before importing.");

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_writes_template() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("podium.toml");

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };

        let code = args.execute().await.unwrap();
        assert_eq!(code, 0);

        let contents = std::fs::read_to_string(&output).unwrap();
        assert!(contents.contains("[store]"));
        assert!(contents.contains("backend = \"postgresql\""));
    }

    #[tokio::test]
    async fn test_init_refuses_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("podium.toml");
        std::fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };

        let code = args.execute().await.unwrap();
        assert_eq!(code, 2);
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "existing");
    }

    #[tokio::test]
    async fn test_init_overwrites_with_force() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("podium.toml");
        std::fs::write(&output, "existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: true,
        };

        let code = args.execute().await.unwrap();
        assert_eq!(code, 0);
        assert!(std::fs::read_to_string(&output).unwrap().contains("[store]"));
    }
}
