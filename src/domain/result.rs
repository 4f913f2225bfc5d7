//! Result type alias for Podium
//!
//! This module provides a convenient Result type alias that uses PodiumError
//! as the error type.

use super::errors::PodiumError;

/// Result type alias for Podium operations
///
/// This is a convenience type alias that uses `PodiumError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use podium::domain::result::Result;
/// use podium::domain::errors::PodiumError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(PodiumError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, PodiumError>;
