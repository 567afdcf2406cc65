//! Error types for running-order construction.

use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type for running-order operations.
///
/// Only conditions that prevent building any schedule at all are errors.
/// Spacing problems inside a schedule surface as warnings and a higher
/// violation score instead.
#[derive(Debug, Error)]
pub enum RunningOrderError {
    /// No performances were supplied.
    #[error("No performances to schedule")]
    EmptyInput,

    /// Input failed structural validation.
    #[error("Invalid input: {}", format_validation(.0))]
    Validation(Vec<ValidationError>),

    /// Invalid run configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The tabular source could not be interpreted.
    #[error("Table error: {0}")]
    Table(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for running-order operations.
pub type Result<T> = std::result::Result<T, RunningOrderError>;
