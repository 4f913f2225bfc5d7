//! Import coordinator - main orchestrator for the import process
//!
//! Coordinates the whole batch: snapshot load, reconciliation, transactional
//! commit, and the completion summary. Candidates run strictly in document
//! order; the store transaction is the only suspending operation.

use crate::adapters::store::factory::create_store;
use crate::adapters::store::traits::SubmissionStore;
use crate::config::schema::PodiumConfig;
use crate::core::import::summary::ImportSummary;
use crate::core::ingest::document::{load_document, SubmissionDocument};
use crate::core::reconcile::engine::ReconcileEngine;
use crate::domain::errors::StoreError;
use crate::domain::Result;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Import coordinator
pub struct ImportCoordinator {
    store: Arc<dyn SubmissionStore>,
}

impl ImportCoordinator {
    /// Create a coordinator from configuration
    ///
    /// Builds the configured store backend, verifies connectivity, and
    /// ensures the schema exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached or cannot preserve
    /// caller-supplied identifiers.
    pub async fn new(config: &PodiumConfig) -> Result<Self> {
        let store = create_store(config)?;
        store.test_connection().await?;
        store.ensure_schema().await?;
        Self::with_store(store)
    }

    /// Create a coordinator over an existing store
    ///
    /// Fails fast if the backend cannot honor externally supplied
    /// identifiers; a batch must never silently renumber records.
    pub fn with_store(store: Arc<dyn SubmissionStore>) -> Result<Self> {
        if !store.preserves_identifiers() {
            return Err(
                StoreError::IdentifiersNotPreserved(store.backend_name().to_string()).into(),
            );
        }
        Ok(Self { store })
    }

    /// Import a submission document from a file
    ///
    /// # Errors
    ///
    /// Returns a document error if the file is missing or malformed (fatal,
    /// before any record is processed), or a store error if the batch
    /// transaction fails (fatal, fully rolled back).
    pub async fn import_file(&self, path: impl AsRef<Path>) -> Result<ImportSummary> {
        let document = load_document(path)?;
        self.execute_import(&document).await
    }

    /// Execute the import for a parsed document
    ///
    /// This is the main entry point for the import process. It:
    /// 1. Reads a point-in-time snapshot of the persisted records
    /// 2. Reconciles every candidate, in document order, into a plan
    /// 3. Commits the staged mutations in one all-or-nothing transaction
    /// 4. Produces the completion summary
    ///
    /// A plan with no staged mutations skips the store entirely; the
    /// summary is still produced.
    pub async fn execute_import(&self, document: &SubmissionDocument) -> Result<ImportSummary> {
        let started = Instant::now();

        tracing::info!(
            candidates = document.len(),
            backend = self.store.backend_name(),
            "Starting import batch"
        );

        let snapshot = self.store.load_all().await?;
        let reference_date = chrono::Local::now().date_naive();

        let engine = ReconcileEngine::new(snapshot, reference_date);
        let plan = engine.reconcile(document.elements());

        if plan.is_noop() {
            tracing::info!("No staged mutations; store left untouched");
        } else {
            self.store.apply_batch(&plan.inserts, &plan.updates).await?;
        }

        let summary = ImportSummary::from_plan(&plan, started.elapsed());
        summary.log_summary();

        Ok(summary)
    }
}
