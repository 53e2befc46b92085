//! Result type alias for Bedrock
//!
//! This module provides a convenient Result type alias that uses BedrockError
//! as the error type.

use super::errors::BedrockError;

/// Result type alias for Bedrock operations
///
/// This is a convenience type alias that uses `BedrockError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use bedrock::domain::result::Result;
/// use bedrock::domain::errors::BedrockError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(BedrockError::Configuration("missing file".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, BedrockError>;
