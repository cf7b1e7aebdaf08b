//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is missing (or empty where emptiness counts as missing)
    Required { field: &'static str },

    /// Field is present but empty when it shouldn't be
    Empty { field: &'static str },

    /// Path identifier is not an integer
    InvalidId,

    /// Update body carries none of the updatable fields
    NoFields,

    /// Body could not be decoded as the expected JSON shape
    MalformedBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidId => write!(f, "Invalid item id"),
            Self::NoFields => write!(f, "No fields to update"),
            Self::MalformedBody { reason } => write!(f, "Invalid request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
