//! Import pipeline orchestration

pub mod coordinator;
pub mod summary;

pub use coordinator::ImportCoordinator;
pub use summary::ImportSummary;
