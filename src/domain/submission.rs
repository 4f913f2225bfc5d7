//! Submission record model
//!
//! Two shapes of a submission live here: `RawCandidate`, the untyped
//! field-name to raw-string mapping parsed out of the input document, and
//! `SubmissionRecord`, the fully validated entity that the store persists.

use crate::domain::ids::SubmissionId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A validated, persistable submission record
///
/// Every instance of this type satisfies the full validation rule set;
/// construction goes through the validator, never directly from raw input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Externally supplied primary identifier, immutable once stored
    pub id: SubmissionId,

    /// Team name (non-empty, at most 100 characters)
    pub team: String,

    /// Project name (non-empty, at most 120 characters)
    pub project: String,

    /// Category (non-empty, at most 50 characters)
    pub category: String,

    /// Event date, never in the future at validation time
    pub event_date: NaiveDate,

    /// Score in [0, 100], rounded to 2 decimal places
    pub score: f64,

    /// Member count in [1, 15]
    pub member_count: i32,

    /// Captain name (non-empty, at most 100 characters)
    pub captain: String,
}

/// A raw, not-yet-validated candidate parsed from the input document
///
/// Field lookups treat missing fields as empty strings so the validator can
/// report "must not be blank" instead of a structural error.
#[derive(Debug, Clone, Default)]
pub struct RawCandidate {
    fields: HashMap<String, String>,
}

impl RawCandidate {
    /// Creates an empty candidate
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a raw field value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder-style field setter, convenient in tests
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Returns the raw value of a field, or the empty string if missing
    pub fn field(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// Decodes a candidate from one document element
    ///
    /// The element must be a JSON object with scalar values; numbers and
    /// booleans are stringified, nulls read as empty. Anything else is a
    /// structural error for this candidate only, not for the batch.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, String> {
        let object = value
            .as_object()
            .ok_or_else(|| "submission element is not an object".to_string())?;

        let mut candidate = Self::new();
        for (name, field_value) in object {
            let raw = match field_value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                serde_json::Value::Null => String::new(),
                other => {
                    return Err(format!(
                        "field '{name}' has a non-scalar value: {other}"
                    ));
                }
            };
            candidate.set(name, raw);
        }

        Ok(candidate)
    }

    /// Human-readable row label used in skip reports
    ///
    /// Format: `(team, project, raw id)` with missing parts shown as `?`.
    pub fn row_label(&self) -> String {
        let part = |name: &str| {
            let value = self.field(name).trim();
            if value.is_empty() {
                "?".to_string()
            } else {
                value.to_string()
            }
        };
        format!("({}, {}, {})", part("team"), part("project"), part("id"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_candidate_missing_field_is_empty() {
        let candidate = RawCandidate::new();
        assert_eq!(candidate.field("team"), "");
    }

    #[test]
    fn test_raw_candidate_set_and_get() {
        let candidate = RawCandidate::new().with("team", "Rustaceans");
        assert_eq!(candidate.field("team"), "Rustaceans");
    }

    #[test]
    fn test_from_value_object() {
        let value = json!({
            "id": 3,
            "team": "Rustaceans",
            "score": 88.5,
            "active": true,
            "notes": null
        });

        let candidate = RawCandidate::from_value(&value).unwrap();
        assert_eq!(candidate.field("id"), "3");
        assert_eq!(candidate.field("team"), "Rustaceans");
        assert_eq!(candidate.field("score"), "88.5");
        assert_eq!(candidate.field("active"), "true");
        assert_eq!(candidate.field("notes"), "");
    }

    #[test]
    fn test_from_value_non_object_rejected() {
        let err = RawCandidate::from_value(&json!("just a string")).unwrap_err();
        assert!(err.contains("not an object"));
    }

    #[test]
    fn test_from_value_nested_value_rejected() {
        let err = RawCandidate::from_value(&json!({"team": {"name": "x"}})).unwrap_err();
        assert!(err.contains("non-scalar"));
        assert!(err.contains("team"));
    }

    #[test]
    fn test_row_label() {
        let candidate = RawCandidate::new()
            .with("team", "Rustaceans")
            .with("project", "Ferris Vision")
            .with("id", "12");
        assert_eq!(candidate.row_label(), "(Rustaceans, Ferris Vision, 12)");
    }

    #[test]
    fn test_row_label_missing_parts() {
        let candidate = RawCandidate::new().with("team", "Rustaceans");
        assert_eq!(candidate.row_label(), "(Rustaceans, ?, ?)");
    }

    #[test]
    fn test_submission_record_roundtrip() {
        let record = SubmissionRecord {
            id: SubmissionId::new(1).unwrap(),
            team: "Rustaceans".to_string(),
            project: "Ferris Vision".to_string(),
            category: "AI".to_string(),
            event_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            score: 91.25,
            member_count: 4,
            captain: "Grace".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: SubmissionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
