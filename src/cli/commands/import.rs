//! Import command implementation
//!
//! Runs the full pipeline for one submission document and prints the
//! completion summary.

use crate::config::load_config;
use crate::core::import::ImportCoordinator;
use clap::Args;

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Path to the submission document (JSON array of records)
    pub file: String,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

impl ImportArgs {
    /// Execute the import command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(file = %self.file, "Starting import command");

        let config = match load_config(config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Configuration error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Confirmation prompt (unless --yes)
        if !self.yes {
            println!("Import Configuration:");
            println!("  Document: {}", self.file);
            println!("  Store backend: {:?}", config.store.backend);
            println!();
            print!("Proceed with import? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Import cancelled.");
                return Ok(0);
            }
        }

        tracing::info!("Creating import coordinator");
        let coordinator = match ImportCoordinator::new(&config).await {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create import coordinator");
                eprintln!("Failed to initialize import: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        let summary = match coordinator.import_file(&self.file).await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Import failed");
                eprintln!("Import failed: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        // Display summary
        println!();
        println!("Import Summary:");
        println!("  Inserted: {}", summary.inserted);
        println!("  Updated:  {}", summary.updated);
        println!("  Skipped:  {}", summary.skipped);
        println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
        println!();

        if !summary.skip_report.is_empty() {
            println!("Skipped candidates:");
            for reason in &summary.skip_report {
                println!("  - {reason}");
            }
            if summary.skips_beyond_report > 0 {
                println!("  ... and {} more", summary.skips_beyond_report);
            }
            println!();
        }

        let exit_code = if summary.is_clean() {
            println!("Import completed successfully.");
            0
        } else {
            println!("Import completed with skipped candidates.");
            1 // Partial success
        };

        Ok(exit_code)
    }
}
