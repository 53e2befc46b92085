//! Domain error types
//!
//! This module defines the error hierarchy for Bedrock. All errors are
//! domain-specific and don't expose third-party types.

use std::fmt;
use thiserror::Error;

/// Main Bedrock error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum BedrockError {
    /// Configuration-related errors (file access, parsing, substitution)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Requested environment is not present in the loaded definitions
    #[error("Environment '{requested}' not found (known environments: {})", known.join(", "))]
    EnvironmentNotFound {
        /// The environment name the caller asked for
        requested: String,
        /// All environment names present in the definitions, sorted
        known: Vec<String>,
    },

    /// One or more field-level validation problems, reported together
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationReport),

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

/// A single field-level validation problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Dotted path of the offending field, e.g. `tags.ManagedBy`
    pub field: String,
    /// Human-readable reason the field was rejected
    pub reason: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Aggregated validation report
///
/// Validation never stops at the first problem: every issue found in a
/// definition is collected here so the caller sees the full picture at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Creates an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a field-level issue
    pub fn push(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.issues.push(ValidationIssue {
            field: field.into(),
            reason: reason.into(),
        });
    }

    /// Returns all recorded issues
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Returns the number of recorded issues
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if no issues were recorded
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns true if any issue names the given field
    pub fn names_field(&self, field: &str) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }

    /// Converts the report into a `Result`: `Ok` when empty, `Err(self)` otherwise
    pub fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} issue(s)", self.issues.len())?;
        for issue in &self.issues {
            write!(f, "\n  - {issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

// Conversion from std::io::Error
impl From<std::io::Error> for BedrockError {
    fn from(err: std::io::Error) -> Self {
        BedrockError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for BedrockError {
    fn from(err: serde_json::Error) -> Self {
        BedrockError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for BedrockError {
    fn from(err: toml::de::Error) -> Self {
        BedrockError::Configuration(format!("TOML parse error: {err}"))
    }
}
