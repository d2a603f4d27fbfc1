//! Error types for house record validation
//!
//! A `ValidationError` always carries at least one `FieldViolation`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Reason a single field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Field is absent from the input
    Missing,
    /// Field is present but not of the expected type
    WrongType,
    /// Numeric field outside its bounds
    OutOfRange,
    /// String field not in the allowed set
    NotInEnum,
}

impl ViolationKind {
    /// Stable error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            ViolationKind::Missing => "REQUIRED_FIELD_MISSING",
            ViolationKind::WrongType => "TYPE_MISMATCH",
            ViolationKind::OutOfRange => "OUT_OF_RANGE",
            ViolationKind::NotInEnum => "NOT_IN_ENUM",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Missing => write!(f, "missing"),
            ViolationKind::WrongType => write!(f, "wrong type"),
            ViolationKind::OutOfRange => write!(f, "out of range"),
            ViolationKind::NotInEnum => write!(f, "not in enum"),
        }
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Name of the offending field
    pub field: String,
    /// Why the field was rejected
    pub kind: ViolationKind,
    /// Human-readable message
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::new(field, ViolationKind::Missing, format!("Required field '{}' is missing", field))
    }
}

/// Validation failure for a whole house record
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Validation failed for fields: {}", join_fields(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// All violations, in schema declaration order
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.violations
    }

    /// Whether the given field is among the violations
    pub fn mentions(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn join_fields(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
