//! Input document ingestion

pub mod document;

pub use document::{load_document, SubmissionDocument};
