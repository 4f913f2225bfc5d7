//! Reconciliation engine
//!
//! Runs every document element through a small per-candidate state machine,
//! in document order: structural decode, validation, in-batch duplicate
//! check, then match against the snapshot to stage an insert or an update.
//! A failing candidate becomes a skip entry and never aborts the batch.

use crate::core::reconcile::snapshot::SnapshotIndex;
use crate::core::validate::rules::validate_candidate;
use crate::domain::submission::{RawCandidate, SubmissionRecord};
use chrono::NaiveDate;
use std::fmt;

/// One skipped candidate with its human-readable reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipEntry {
    /// Row label, normally the (team, project, raw id) triple
    pub label: String,

    /// Why the candidate was not staged
    pub reason: String,
}

impl SkipEntry {
    fn new(label: String, reason: String) -> Self {
        Self { label, reason }
    }
}

impl fmt::Display for SkipEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.reason)
    }
}

/// The staged outcome of reconciling one batch
///
/// Inserts and updates keep document order. Skips keep document order too,
/// with one entry per rejected candidate.
#[derive(Debug, Default)]
pub struct ImportPlan {
    /// Records to insert, identifier supplied by the caller
    pub inserts: Vec<SubmissionRecord>,

    /// Full-overwrite replacements of existing records
    pub updates: Vec<SubmissionRecord>,

    /// Candidates that were not staged, with reasons
    pub skipped: Vec<SkipEntry>,
}

impl ImportPlan {
    /// True if the plan stages no mutations at all
    ///
    /// A no-op plan must not open a store transaction.
    pub fn is_noop(&self) -> bool {
        self.inserts.is_empty() && self.updates.is_empty()
    }

    /// Number of staged inserts
    pub fn inserted(&self) -> usize {
        self.inserts.len()
    }

    /// Number of staged updates
    pub fn updated(&self) -> usize {
        self.updates.len()
    }

    /// Number of skipped candidates
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Batch-aware reconciliation over a snapshot of persisted state
pub struct ReconcileEngine {
    index: SnapshotIndex,
    reference_date: NaiveDate,
}

impl ReconcileEngine {
    /// Creates an engine over a full store snapshot
    ///
    /// `reference_date` is the "today" used by the event-date rule.
    pub fn new(snapshot: Vec<SubmissionRecord>, reference_date: NaiveDate) -> Self {
        let index = SnapshotIndex::from_records(snapshot);
        tracing::debug!(
            snapshot_size = index.base_len(),
            "Reconciliation engine initialized"
        );
        Self {
            index,
            reference_date,
        }
    }

    /// Reconciles the document elements into an import plan
    ///
    /// Candidates are processed strictly in document order so later
    /// candidates observe earlier staged decisions (duplicate detection
    /// depends on this).
    pub fn reconcile(mut self, elements: &[serde_json::Value]) -> ImportPlan {
        let mut plan = ImportPlan::default();

        for (position, element) in elements.iter().enumerate() {
            // Structural decode failure skips this candidate only
            let candidate = match RawCandidate::from_value(element) {
                Ok(candidate) => candidate,
                Err(reason) => {
                    tracing::warn!(position, reason = %reason, "Skipping malformed element");
                    plan.skipped
                        .push(SkipEntry::new(format!("element #{}", position + 1), reason));
                    continue;
                }
            };

            let record = match validate_candidate(&candidate, self.reference_date) {
                Ok(record) => record,
                Err(violations) => {
                    let reason = violations.join("; ");
                    tracing::warn!(
                        row = %candidate.row_label(),
                        reason = %reason,
                        "Skipping invalid candidate"
                    );
                    plan.skipped.push(SkipEntry::new(candidate.row_label(), reason));
                    continue;
                }
            };

            // Second and later occurrences of an identifier within the batch
            // are rejected; only the first occurrence is staged.
            if self.index.is_staged(record.id) {
                tracing::warn!(
                    id = %record.id,
                    row = %candidate.row_label(),
                    "Skipping duplicate identifier in batch"
                );
                plan.skipped.push(SkipEntry::new(
                    candidate.row_label(),
                    format!("Duplicate identifier {} in batch", record.id),
                ));
                continue;
            }

            if self.index.in_base(record.id) {
                tracing::debug!(id = %record.id, "Staging update");
                plan.updates.push(record.clone());
            } else {
                tracing::debug!(id = %record.id, "Staging insert");
                plan.inserts.push(record.clone());
            }
            self.index.stage(record);
        }

        tracing::info!(
            inserts = plan.inserted(),
            updates = plan.updated(),
            skipped = plan.skipped_count(),
            "Reconciliation complete"
        );

        plan
    }
}
