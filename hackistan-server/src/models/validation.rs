//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Required rating categories absent from the request
    MissingRatings { fields: Vec<&'static str> },

    /// Required field absent from the request
    Missing { field: &'static str },

    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Numeric field outside its allowed range
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    /// Value doesn't match required format
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRatings { fields } => {
                write!(f, "Missing ratings: {}", fields.join(", "))
            }
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::OutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {}", field, min, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_ratings_lists_every_field() {
        let err = ValidationError::MissingRatings {
            fields: vec!["impact", "presentation"],
        };
        assert_eq!(err.to_string(), "Missing ratings: impact, presentation");
    }

    #[test]
    fn out_of_range_display() {
        let err = ValidationError::OutOfRange {
            field: "innovation",
            min: 0.0,
            max: 5.0,
        };
        assert_eq!(err.to_string(), "innovation must be between 0 and 5");
    }
}
