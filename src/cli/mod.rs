//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Podium using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Podium - submission import and reconciliation tool
#[derive(Parser, Debug)]
#[command(name = "podium")]
#[command(version, about, long_about = None)]
#[command(author = "Podium Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "podium.toml", env = "PODIUM_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PODIUM_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import a submission document into the configured store
    Import(commands::import::ImportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_import() {
        let cli = Cli::parse_from(["podium", "import", "submissions.json"]);
        assert_eq!(cli.config, "podium.toml");
        assert!(matches!(cli.command, Commands::Import(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["podium", "--config", "custom.toml", "import", "batch.json"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["podium", "--log-level", "debug", "validate-config"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["podium", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["podium", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_import_requires_file_argument() {
        assert!(Cli::try_parse_from(["podium", "import"]).is_err());
    }
}
