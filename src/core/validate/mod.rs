//! Candidate validation

pub mod rules;

pub use rules::validate_candidate;
