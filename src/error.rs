//! Crate-level error types.

use std::fmt;

/// Errors produced by the helixtube crate.
#[derive(Debug)]
pub enum HelixError {
    /// A scalar input is outside its domain (non-finite, non-positive radius,
    /// too few samples, outside the configured UI bounds, or a frame clock
    /// running backwards).
    InvalidParameter {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable constraint that was violated.
        reason: String,
    },
    /// A point run with fewer than two points reached the tube mesh builder.
    InvalidGeometryInput {
        /// Number of points actually supplied.
        points: usize,
    },
    /// Generic I/O failure while reading or writing option presets.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl HelixError {
    /// Shorthand for [`HelixError::InvalidParameter`].
    pub(crate) fn invalid(
        name: &'static str,
        value: impl Into<f64>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for HelixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                name,
                value,
                reason,
            } => {
                write!(f, "invalid parameter `{name}` = {value}: {reason}")
            }
            Self::InvalidGeometryInput { points } => write!(
                f,
                "invalid geometry input: tube needs at least 2 points, got \
                 {points}"
            ),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for HelixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HelixError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HelixError>;
