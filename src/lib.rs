// Podium - Submission Import and Reconciliation Tool
// Copyright (c) 2025 Podium Contributors
// Licensed under the MIT License

//! # Podium - submission import and reconciliation
//!
//! Podium ingests batches of hackathon submission records from JSON
//! documents and reconciles them against a persistent store, deciding per
//! record whether to insert, update, or skip, and committing each batch in a
//! single all-or-nothing transaction while preserving the externally
//! supplied identifiers.
//!
//! ## Architecture
//!
//! Podium follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (ingest, validate, reconcile, import)
//! - [`adapters`] - Store backends (PostgreSQL, in-memory)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use podium::config::PodiumConfig;
//! use podium::core::import::ImportCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PodiumConfig::from_file("podium.toml")?;
//!
//!     let coordinator = ImportCoordinator::new(&config).await?;
//!     let summary = coordinator.import_file("submissions.json").await?;
//!
//!     println!(
//!         "inserted={} updated={} skipped={}",
//!         summary.inserted, summary.updated, summary.skipped
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Batch semantics
//!
//! Candidates are processed strictly in document order. The store is read
//! once per batch into a snapshot; decisions are staged into an overlay so
//! later candidates observe earlier ones (in-batch duplicate identifiers are
//! rejected after their first occurrence). The staged mutations then commit
//! in one transaction, or not at all: a failed batch leaves the store exactly
//! as it was. A batch that stages nothing never opens a transaction.
//!
//! ## Error Handling
//!
//! Podium uses the [`domain::PodiumError`] type for all errors:
//!
//! ```rust,no_run
//! use podium::domain::PodiumError;
//!
//! fn example() -> Result<(), PodiumError> {
//!     let config = podium::config::PodiumConfig::from_file("podium.toml")?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
