//! Configuration error types.

use thiserror::Error;

/// A single problem found while validating a guide configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("{name} range is empty (min {min}° >= max {max}°)")]
    EmptyRange { name: &'static str, min: f64, max: f64 },

    #[error("{name} ({value}°) must be within {low}°..={high}°")]
    OutOfRange {
        name: &'static str,
        value: f64,
        low: f64,
        high: f64,
    },
}

/// Errors that can occur when loading a guide configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON could not be parsed into a configuration
    #[error("Failed to parse guide configuration: {0}")]
    Parse(String),

    /// Configuration parsed but failed validation
    #[error("Invalid guide configuration: {}", format_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
