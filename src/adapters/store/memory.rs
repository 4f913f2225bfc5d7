//! In-memory store backend
//!
//! Keeps records in a map behind a lock. Used for local runs without a
//! database and throughout the test suite; `apply_batch` is all-or-nothing
//! and a commit failure can be injected to exercise rollback behavior.

use crate::adapters::store::traits::SubmissionStore;
use crate::domain::errors::StoreError;
use crate::domain::submission::SubmissionRecord;
use crate::domain::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// In-memory submission store
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<i64, SubmissionRecord>>,
    fail_next_apply: AtomicBool,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with records
    pub fn with_records(records: Vec<SubmissionRecord>) -> Self {
        let map = records.into_iter().map(|r| (r.id.get(), r)).collect();
        Self {
            records: Mutex::new(map),
            fail_next_apply: AtomicBool::new(false),
        }
    }

    /// Makes the next `apply_batch` call fail after staging, before commit
    ///
    /// Simulates a store error mid-transaction; the visible state must stay
    /// untouched.
    pub fn fail_next_apply(&self) {
        self.fail_next_apply.store(true, Ordering::SeqCst);
    }

    /// Returns all records sorted by identifier
    pub fn records(&self) -> Vec<SubmissionRecord> {
        let guard = self.records.lock().expect("store lock poisoned");
        let mut records: Vec<_> = guard.values().cloned().collect();
        records.sort_by_key(|r| r.id);
        records
    }

    /// Number of persisted records
    pub fn len(&self) -> usize {
        self.records.lock().expect("store lock poisoned").len()
    }

    /// True if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn test_connection(&self) -> Result<()> {
        Ok(())
    }

    async fn ensure_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<SubmissionRecord>> {
        Ok(self.records())
    }

    async fn apply_batch(
        &self,
        inserts: &[SubmissionRecord],
        updates: &[SubmissionRecord],
    ) -> Result<()> {
        let mut guard = self.records.lock().expect("store lock poisoned");

        // Work on a copy; the live map is only replaced on a clean commit.
        let mut working = guard.clone();

        for record in inserts {
            let id = record.id.get();
            if working.contains_key(&id) {
                return Err(StoreError::InsertFailed {
                    id,
                    message: "identifier already exists".to_string(),
                }
                .into());
            }
            working.insert(id, record.clone());
        }

        for record in updates {
            let id = record.id.get();
            if !working.contains_key(&id) {
                return Err(StoreError::UpdateFailed {
                    id,
                    message: "no such record".to_string(),
                }
                .into());
            }
            working.insert(id, record.clone());
        }

        if self.fail_next_apply.swap(false, Ordering::SeqCst) {
            return Err(
                StoreError::TransactionFailed("simulated commit failure".to_string()).into(),
            );
        }

        *guard = working;
        Ok(())
    }

    fn preserves_identifiers(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::SubmissionId;
    use chrono::NaiveDate;

    fn record(id: i64, team: &str) -> SubmissionRecord {
        SubmissionRecord {
            id: SubmissionId::new(id).unwrap(),
            team: team.to_string(),
            project: "Project".to_string(),
            category: "AI".to_string(),
            event_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            score: 80.0,
            member_count: 3,
            captain: "Captain".to_string(),
        }
    }

    #[tokio::test]
    async fn test_apply_batch_inserts_and_updates() {
        let store = MemoryStore::with_records(vec![record(1, "Old")]);

        store
            .apply_batch(&[record(2, "New")], &[record(1, "Replaced")])
            .await
            .unwrap();

        let records = store.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].team, "Replaced");
        assert_eq!(records[1].team, "New");
    }

    #[tokio::test]
    async fn test_insert_existing_id_rejected() {
        let store = MemoryStore::with_records(vec![record(1, "Old")]);
        let result = store.apply_batch(&[record(1, "Clash")], &[]).await;
        assert!(result.is_err());
        // Store unchanged
        assert_eq!(store.records()[0].team, "Old");
    }

    #[tokio::test]
    async fn test_update_missing_id_rejected() {
        let store = MemoryStore::new();
        let result = store.apply_batch(&[], &[record(1, "Ghost")]).await;
        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_partial_failure_leaves_store_untouched() {
        let store = MemoryStore::with_records(vec![record(1, "Old")]);

        // Second insert clashes; the first must not be visible afterwards
        let result = store
            .apply_batch(&[record(2, "New"), record(1, "Clash")], &[])
            .await;

        assert!(result.is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].team, "Old");
    }

    #[tokio::test]
    async fn test_injected_commit_failure_rolls_back() {
        let store = MemoryStore::with_records(vec![record(1, "Old")]);
        let before = store.records();

        store.fail_next_apply();
        let result = store
            .apply_batch(&[record(2, "New")], &[record(1, "Replaced")])
            .await;

        assert!(result.is_err());
        assert_eq!(store.records(), before);

        // The failure is one-shot; the next apply succeeds
        store.apply_batch(&[record(2, "New")], &[]).await.unwrap();
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_load_all_sorted_by_id() {
        let store = MemoryStore::with_records(vec![record(3, "C"), record(1, "A")]);
        let records = store.load_all().await.unwrap();
        assert_eq!(records[0].id.get(), 1);
        assert_eq!(records[1].id.get(), 3);
    }

    #[test]
    fn test_capability_flags() {
        let store = MemoryStore::new();
        assert!(store.preserves_identifiers());
        assert_eq!(store.backend_name(), "memory");
    }
}
