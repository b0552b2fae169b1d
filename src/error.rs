//! Error types for the board.

use crate::types::RecordId;
use crate::validation::Violation;
use std::fmt;
use thiserror::Error;

/// Main error type for board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Record not found: {0}")]
    RecordNotFound(RecordId),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for BoardError {
    fn from(e: serde_json::Error) -> Self {
        BoardError::Serialization(e.to_string())
    }
}

/// Which form field a violation belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Capacity,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Title => write!(f, "title"),
            Field::Description => write!(f, "description"),
            Field::Capacity => write!(f, "capacity"),
        }
    }
}

/// A failed constraint on a named field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldViolation {
    pub field: Field,
    pub violation: Violation,
}

/// One or more field constraints were unmet.
///
/// Non-fatal: the submission is rejected, nothing is committed and the
/// entered values stay in the form.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("Invalid input: {}", describe(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Fields that failed, in form order, without duplicates.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = Vec::new();
        for v in &self.violations {
            if !fields.contains(&v.field) {
                fields.push(v.field);
            }
        }
        fields
    }

    /// True if the capacity text could not be read as a number.
    pub fn is_malformed_number(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.field == Field::Capacity && v.violation == Violation::NotANumber)
    }
}

fn describe(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} {}", v.field, v.violation))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;
