//! Core domain types and models
//!
//! This module contains the domain model for Podium: submission records,
//! identifier newtypes, and the error hierarchy.

pub mod errors;
pub mod ids;
pub mod result;
pub mod submission;

// Re-export commonly used types
pub use errors::PodiumError;
pub use ids::SubmissionId;
pub use result::Result;
pub use submission::{RawCandidate, SubmissionRecord};
