//! Snapshot index over persisted submissions
//!
//! The store is read exactly once per batch into a base map. Decisions made
//! during the batch are staged into a separate overlay so later candidates
//! observe earlier staged changes without the base snapshot ever mutating.
//! This bounds store interaction to two phases: snapshot read and batch
//! write.

use crate::domain::ids::SubmissionId;
use crate::domain::submission::SubmissionRecord;
use std::collections::HashMap;

/// Two-map lookup structure: read-only base snapshot plus staged overlay
#[derive(Debug, Default)]
pub struct SnapshotIndex {
    base: HashMap<SubmissionId, SubmissionRecord>,
    staged: HashMap<SubmissionId, SubmissionRecord>,
}

impl SnapshotIndex {
    /// Builds the index from a full store snapshot
    pub fn from_records(records: Vec<SubmissionRecord>) -> Self {
        let base = records.into_iter().map(|r| (r.id, r)).collect();
        Self {
            base,
            staged: HashMap::new(),
        }
    }

    /// True if this identifier was already staged during the current batch
    pub fn is_staged(&self, id: SubmissionId) -> bool {
        self.staged.contains_key(&id)
    }

    /// True if this identifier exists in the persisted snapshot
    pub fn in_base(&self, id: SubmissionId) -> bool {
        self.base.contains_key(&id)
    }

    /// Looks up a record, staged overlay first, then the base snapshot
    pub fn get(&self, id: SubmissionId) -> Option<&SubmissionRecord> {
        self.staged.get(&id).or_else(|| self.base.get(&id))
    }

    /// Stages a record, inserting or refreshing the overlay entry
    ///
    /// The base snapshot is never touched.
    pub fn stage(&mut self, record: SubmissionRecord) {
        self.staged.insert(record.id, record);
    }

    /// Number of records in the base snapshot
    pub fn base_len(&self) -> usize {
        self.base.len()
    }
}
