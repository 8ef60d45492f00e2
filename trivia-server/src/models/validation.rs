//! Validation error types

use std::fmt;

/// Validation error raised while turning request input into domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field was absent from the request
    Missing { field: &'static str },

    /// Value could not be read as the expected type
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Missing { field: "answer" };
        assert_eq!(err.to_string(), "answer is required");

        let err = ValidationError::InvalidFormat {
            field: "category",
            reason: "expected an integer id",
        };
        assert_eq!(err.to_string(), "category: expected an integer id");
    }
}
