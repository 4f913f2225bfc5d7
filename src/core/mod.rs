//! Business logic
//!
//! The import pipeline, leaf-first: ingest (document parsing), validate
//! (per-candidate rules), reconcile (insert/update/skip decisions against a
//! snapshot), import (orchestration and the transactional commit).

pub mod import;
pub mod ingest;
pub mod reconcile;
pub mod validate;
