//! Validation error types

use std::fmt;

/// Validation error for client input
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Body could not be decoded
    Malformed { what: &'static str, reason: String },

    /// String doesn't match required format (e.g., RFC 3339 date-time)
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { what, reason } => write!(f, "malformed {}: {}", what, reason),
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
