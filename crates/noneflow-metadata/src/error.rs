//! Error types for metadata operations.

use std::fmt;

use thiserror::Error;

use crate::validation::{FieldViolation, Violation};

/// Errors that can occur while loading inputs or building HTTP checkers.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid format encountered.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

impl From<reqwest::Error> for MetadataError {
    fn from(err: reqwest::Error) -> Self {
        MetadataError::HttpClient(err.to_string())
    }
}

/// A rejected submission.
///
/// Holds every violated rule in check order. The rendered form starts with a
/// summary line followed by one `field` / `message` pair per violation, so the
/// first violated rule's message is always present in `to_string()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub(crate) fn new(violations: Vec<FieldViolation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// All violations, in the order they were found.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// The first violated rule.
    pub fn first(&self) -> Option<&FieldViolation> {
        self.violations.first()
    }

    /// Messages reported for one field path (e.g. `homepage`, `tags[0].color`).
    pub fn messages_for(&self, field: &str) -> Vec<String> {
        self.violations
            .iter()
            .filter(|v| v.field == field)
            .map(|v| v.violation.to_string())
            .collect()
    }

    /// Whether any violation matches the predicate.
    pub fn contains(&self, predicate: impl Fn(&Violation) -> bool) -> bool {
        self.violations.iter().any(|v| predicate(&v.violation))
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Always `false` for errors produced by the validators.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.violations.len();
        write!(
            f,
            "{} validation error{} for PublishInfo",
            count,
            if count == 1 { "" } else { "s" }
        )?;
        for violation in &self.violations {
            write!(f, "\n{}\n  {}", violation.field, violation.violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
