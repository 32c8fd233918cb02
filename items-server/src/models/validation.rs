//! Validation error types

use std::fmt;

/// Validation error for domain models and request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Field was sent as null but must carry a value
    Null { field: &'static str },

    /// Number is smaller than the allowed minimum
    BelowMinimum { field: &'static str, min: i64 },

    /// Number is larger than the allowed maximum
    AboveMaximum { field: &'static str, max: i64 },

    /// Input could not be parsed at all (bad JSON, non-integer id, ...)
    Malformed { what: &'static str, message: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::Null { field } => write!(f, "{} cannot be null", field),
            Self::BelowMinimum { field, min } => {
                write!(f, "{} must be greater than or equal to {}", field, min)
            }
            Self::AboveMaximum { field, max } => {
                write!(f, "{} must be less than or equal to {}", field, max)
            }
            Self::Malformed { what, message } => write!(f, "invalid {}: {}", what, message),
        }
    }
}

impl std::error::Error for ValidationError {}
