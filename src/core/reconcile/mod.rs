//! Reconciliation of candidates against persisted state

pub mod engine;
pub mod snapshot;

pub use engine::{ImportPlan, ReconcileEngine, SkipEntry};
pub use snapshot::SnapshotIndex;
