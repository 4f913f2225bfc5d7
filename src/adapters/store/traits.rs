//! Store abstraction traits
//!
//! This module defines the trait that store backends must implement to work
//! with the import pipeline. The pipeline touches the store in exactly two
//! phases: one full snapshot read and one atomic batch write.

use crate::domain::submission::SubmissionRecord;
use crate::domain::Result;
use async_trait::async_trait;

/// Store contract consumed by the import pipeline
///
/// Implementations must support identifier-preserving inserts: the record's
/// identifier comes from the caller, never from the store's own assignment.
/// A backend that cannot honor that must report it through
/// [`preserves_identifiers`](SubmissionStore::preserves_identifiers) so
/// batches fail fast instead of silently renumbering records.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Test the store connection
    ///
    /// # Errors
    ///
    /// Returns an error if the store is unreachable.
    async fn test_connection(&self) -> Result<()>;

    /// Ensure the schema exists, creating it if necessary
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created or accessed.
    async fn ensure_schema(&self) -> Result<()>;

    /// Read a point-in-time snapshot of every persisted record
    ///
    /// Called once per batch; candidates are matched against this snapshot
    /// instead of per-record point lookups.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot query fails.
    async fn load_all(&self) -> Result<Vec<SubmissionRecord>>;

    /// Apply a batch of staged mutations inside a single transaction
    ///
    /// Inserts carry caller-supplied identifiers; updates fully overwrite
    /// the stored record matched by identifier. The batch either commits as
    /// a whole or rolls back as a whole; on error the store must be exactly
    /// as it was before the call.
    ///
    /// # Errors
    ///
    /// Returns an error if any staged mutation is rejected or the
    /// transaction cannot commit. The caller may assume full rollback.
    async fn apply_batch(
        &self,
        inserts: &[SubmissionRecord],
        updates: &[SubmissionRecord],
    ) -> Result<()>;

    /// Whether this backend can accept caller-supplied primary identifiers
    fn preserves_identifiers(&self) -> bool;

    /// Short backend name for logs and error messages
    fn backend_name(&self) -> &str;
}
