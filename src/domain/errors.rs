//! Domain error types
//!
//! This module defines the error hierarchy for Podium. All errors are
//! domain-specific and don't expose third-party types; adapter code converts
//! driver errors into these variants at the boundary.

use thiserror::Error;

/// Main Podium error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum PodiumError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Document-level errors (missing, unreadable, or malformed input)
    ///
    /// A document error is a precondition failure: the batch is aborted
    /// before any record is processed.
    #[error("Document error: {0}")]
    Document(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Store-related errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Import process errors
    #[error("Import error: {0}")]
    Import(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Store-specific errors
///
/// Errors that occur when interacting with the persistent store. A failure
/// during a batch write means the whole transaction was rolled back.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to connect to the store
    #[error("Failed to connect to store: {0}")]
    ConnectionFailed(String),

    /// Schema creation or migration failed
    #[error("Schema setup failed: {0}")]
    SchemaFailed(String),

    /// Snapshot read failed
    #[error("Snapshot read failed: {0}")]
    SnapshotFailed(String),

    /// A staged insert was rejected
    #[error("Insert failed for submission {id}: {message}")]
    InsertFailed { id: i64, message: String },

    /// A staged update was rejected
    #[error("Update failed for submission {id}: {message}")]
    UpdateFailed { id: i64, message: String },

    /// Transaction could not be opened or committed
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// The backend cannot accept caller-supplied identifiers
    #[error("Store backend '{0}' cannot preserve caller-supplied identifiers")]
    IdentifiersNotPreserved(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for PodiumError {
    fn from(err: std::io::Error) -> Self {
        PodiumError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for PodiumError {
    fn from(err: serde_json::Error) -> Self {
        PodiumError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for PodiumError {
    fn from(err: toml::de::Error) -> Self {
        PodiumError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_podium_error_display() {
        let err = PodiumError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_store_error_conversion() {
        let store_err = StoreError::ConnectionFailed("refused".to_string());
        let err: PodiumError = store_err.into();
        assert!(matches!(err, PodiumError::Store(_)));
    }

    #[test]
    fn test_store_error_insert_display() {
        let err = StoreError::InsertFailed {
            id: 7,
            message: "duplicate key".to_string(),
        };
        assert_eq!(err.to_string(), "Insert failed for submission 7: duplicate key");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: PodiumError = io_err.into();
        assert!(matches!(err, PodiumError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: PodiumError = json_err.into();
        assert!(matches!(err, PodiumError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: PodiumError = toml_err.into();
        assert!(matches!(err, PodiumError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_podium_error_implements_std_error() {
        let err = PodiumError::Validation("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_store_error_implements_std_error() {
        let err = StoreError::TransactionFailed("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
