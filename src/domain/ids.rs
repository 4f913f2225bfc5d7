//! Domain identifier types with validation
//!
//! This module provides the newtype wrapper for submission identifiers.
//! Identifiers are supplied by the caller, not assigned by the store, and are
//! immutable once a record is persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Submission identifier newtype wrapper
///
/// Represents the externally supplied primary identifier of a submission
/// record. Always a positive integer; globally unique across the store.
///
/// # Examples
///
/// ```
/// use podium::domain::ids::SubmissionId;
///
/// let id = SubmissionId::new(42).unwrap();
/// assert_eq!(id.get(), 42);
/// assert!(SubmissionId::new(0).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SubmissionId(i64);

impl SubmissionId {
    /// Creates a new SubmissionId from an integer
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new(id: i64) -> Result<Self, String> {
        if id <= 0 {
            return Err(format!("Submission ID must be positive, got {id}"));
        }
        Ok(Self(id))
    }

    /// Returns the inner integer value
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SubmissionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| format!("'{s}' is not a valid integer"))?;
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_id_valid() {
        let id = SubmissionId::new(1).unwrap();
        assert_eq!(id.get(), 1);
        assert_eq!(id.to_string(), "1");
    }

    #[test]
    fn test_submission_id_zero_rejected() {
        assert!(SubmissionId::new(0).is_err());
    }

    #[test]
    fn test_submission_id_negative_rejected() {
        assert!(SubmissionId::new(-5).is_err());
    }

    #[test]
    fn test_submission_id_from_str() {
        let id = SubmissionId::from_str(" 17 ").unwrap();
        assert_eq!(id.get(), 17);
    }

    #[test]
    fn test_submission_id_from_str_invalid() {
        assert!(SubmissionId::from_str("abc").is_err());
        assert!(SubmissionId::from_str("").is_err());
        assert!(SubmissionId::from_str("-3").is_err());
    }

    #[test]
    fn test_submission_id_ordering() {
        let a = SubmissionId::new(1).unwrap();
        let b = SubmissionId::new(2).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_submission_id_serde_transparent() {
        let id = SubmissionId::new(9).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "9");
        let back: SubmissionId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
