//! Store factory
//!
//! Builds the configured store backend behind the `SubmissionStore` trait.

use crate::adapters::store::memory::MemoryStore;
use crate::adapters::store::postgresql::adapter::PostgresStore;
use crate::adapters::store::postgresql::client::PostgresClient;
use crate::adapters::store::traits::SubmissionStore;
use crate::config::schema::{PodiumConfig, StoreBackend};
use crate::domain::{PodiumError, Result};
use std::sync::Arc;

/// Create a store backend based on the configuration
///
/// # Errors
///
/// Returns an error if the backend cannot be created, or if the
/// configuration names a backend without its required section.
pub fn create_store(config: &PodiumConfig) -> Result<Arc<dyn SubmissionStore>> {
    match config.store.backend {
        StoreBackend::PostgreSQL => {
            let pg_config = config.store.postgresql.as_ref().ok_or_else(|| {
                PodiumError::Configuration(
                    "store.postgresql section is required for the postgresql backend".to_string(),
                )
            })?;

            tracing::info!("Creating PostgreSQL store");
            let client = PostgresClient::new(pg_config.clone())?;
            Ok(Arc::new(PostgresStore::new(client)) as Arc<dyn SubmissionStore>)
        }
        StoreBackend::Memory => {
            tracing::info!("Creating in-memory store");
            Ok(Arc::new(MemoryStore::new()) as Arc<dyn SubmissionStore>)
        }
    }
}
