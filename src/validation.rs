//! Input validation for running-order problems.
//!
//! Checks structural integrity of performances before scheduling.
//! Detects:
//! - Empty input
//! - Spacing below 1 (possible via deserialization or struct literals)
//!
//! Duplicate names are not fatal; [`duplicate_names`] reports them so the
//! caller can warn.

use std::collections::{BTreeSet, HashSet};

use crate::models::Performance;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No performances were supplied.
    EmptyInput,
    /// A performance has spacing 0.
    InvalidSpacing,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the performances for a scheduling run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(performances: &[Performance]) -> ValidationResult {
    let mut errors = Vec::new();

    if performances.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No performances supplied",
        ));
    }

    for p in performances {
        if p.spacing == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSpacing,
                format!("Performance '{}' has spacing 0 (minimum is 1)", p.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Names used by more than one performance, sorted.
pub fn duplicate_names(performances: &[Performance]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut dupes = BTreeSet::new();
    for p in performances {
        if !seen.insert(p.name.as_str()) {
            dupes.insert(p.name.as_str());
        }
    }
    dupes.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let performances = vec![
            Performance::new("A").with_performers(["x"]),
            Performance::new("B").with_performers(["y"]).with_spacing(2),
        ];
        assert!(validate_input(&performances).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_input(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput);
    }

    #[test]
    fn test_zero_spacing() {
        let mut p = Performance::new("A");
        p.spacing = 0;
        let errors = validate_input(&[p]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidSpacing));
    }

    #[test]
    fn test_missing_performers_is_valid() {
        assert!(validate_input(&[Performance::new("Interval").last()]).is_ok());
    }

    #[test]
    fn test_duplicate_names() {
        let performances = vec![
            Performance::new("B"),
            Performance::new("A"),
            Performance::new("B"),
            Performance::new("A"),
            Performance::new("C"),
        ];
        assert_eq!(duplicate_names(&performances), vec!["A", "B"]);
    }
}
