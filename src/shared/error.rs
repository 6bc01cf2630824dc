//! Application Error Types
//!
//! Centralized error handling shared by the domain collaborator traits.

use serde::{Deserialize, Serialize};

/// Application error type
///
/// Collaborator implementations (repositories, catalogs, mailers) report
/// failures through this enum; application services translate it into their
/// own error types where the distinction matters to callers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Delivery error: {0}")]
    Delivery(String),
}

/// Field-level validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    /// Create a field error for the given key and message.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Accumulated validation failures for a candidate record.
///
/// Ordered collection of field/message pairs; a field may carry more than
/// one message. Record-level failures attach to the `base` key. An empty
/// report means the candidate is acceptable for persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Key used for record-level (non-field) failures.
    pub const BASE: &'static str = "base";

    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failure for the given field key.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Append a prebuilt field error.
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Absorb every failure from another report.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
    }

    /// Whether the candidate passed every check.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of failures.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// All failures, in the order they were recorded.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Messages recorded against one field key.
    pub fn messages_for(&self, field: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
            .collect()
    }

    /// Whether any message on any field contains the given fragment.
    pub fn mentions(&self, fragment: &str) -> bool {
        self.errors.iter().any(|e| e.message.contains(fragment))
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            first = false;
            if error.field == Self::BASE {
                write!(f, "{}", error.message)?;
            } else {
                write!(f, "{}: {}", error.field, error.message)?;
            }
        }
        Ok(())
    }
}
