//! Submission document loading
//!
//! The input is a JSON document holding an array of submission elements.
//! Failure to read or parse the document is a precondition failure for the
//! whole batch; per-element problems are handled later, one candidate at a
//! time, by the reconciliation engine.

use crate::domain::{PodiumError, Result};
use std::fs;
use std::path::Path;

/// A parsed submission document
///
/// Elements are kept as raw JSON values; decoding into candidates happens
/// per element during reconciliation so a malformed element skips only
/// itself.
#[derive(Debug, Clone)]
pub struct SubmissionDocument {
    elements: Vec<serde_json::Value>,
}

impl SubmissionDocument {
    /// Parses a document from a JSON string
    ///
    /// # Errors
    ///
    /// Returns a document error if the string is not well-formed JSON or the
    /// top level is not an array.
    pub fn from_json(contents: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(contents)
            .map_err(|e| PodiumError::Document(format!("Document is not well-formed JSON: {e}")))?;

        let elements = match value {
            serde_json::Value::Array(elements) => elements,
            other => {
                return Err(PodiumError::Document(format!(
                    "Document root must be an array of submissions, got {}",
                    json_type_name(&other)
                )));
            }
        };

        Ok(Self { elements })
    }

    /// The document elements, in document order
    pub fn elements(&self) -> &[serde_json::Value] {
        &self.elements
    }

    /// Number of elements in the document
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if the document holds no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Loads a submission document from a file
///
/// # Errors
///
/// Returns a document error if the file is missing, unreadable, or not a
/// well-formed JSON array. Nothing has been processed at this point, so the
/// batch aborts cleanly.
pub fn load_document(path: impl AsRef<Path>) -> Result<SubmissionDocument> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|e| {
        PodiumError::Document(format!("Failed to read document {}: {}", path.display(), e))
    })?;

    let document = SubmissionDocument::from_json(&contents)?;

    tracing::info!(
        path = %path.display(),
        elements = document.len(),
        "Submission document loaded"
    );

    Ok(document)
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_json_array() {
        let document = SubmissionDocument::from_json(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        assert_eq!(document.len(), 2);
        assert!(!document.is_empty());
    }

    #[test]
    fn test_from_json_empty_array() {
        let document = SubmissionDocument::from_json("[]").unwrap();
        assert!(document.is_empty());
    }

    #[test]
    fn test_from_json_malformed() {
        let result = SubmissionDocument::from_json("{not json");
        assert!(matches!(result, Err(PodiumError::Document(_))));
    }

    #[test]
    fn test_from_json_non_array_root() {
        let err = SubmissionDocument::from_json(r#"{"id": 1}"#).unwrap_err();
        assert!(err.to_string().contains("must be an array"));
    }

    #[test]
    fn test_load_document_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"[{"id": 1, "team": "Rustaceans"}]"#).unwrap();
        file.flush().unwrap();

        let document = load_document(file.path()).unwrap();
        assert_eq!(document.len(), 1);
    }

    #[test]
    fn test_load_document_missing_file() {
        let result = load_document("nonexistent-submissions.json");
        assert!(matches!(result, Err(PodiumError::Document(_))));
    }
}
