//! Error types for circle input validation

use std::fmt;
use thiserror::Error;

/// The user-supplied value an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Radius,
    Angle,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Radius => write!(f, "radius"),
            Field::Angle => write!(f, "angle"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// A radius or angle that cannot describe a circle or sector
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: Field, reason: String },
}

impl InputError {
    pub fn invalid(field: Field, reason: impl Into<String>) -> Self {
        InputError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    pub fn field(&self) -> Field {
        match self {
            InputError::InvalidInput { field, .. } => *field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_field() {
        let err = InputError::invalid(Field::Radius, "must be greater than zero (got -3)");
        assert_eq!(
            err.to_string(),
            "invalid radius: must be greater than zero (got -3)"
        );
        assert_eq!(err.field(), Field::Radius);
    }

    #[test]
    fn angle_field_display() {
        let err = InputError::invalid(Field::Angle, "not a number: 'abc'");
        assert!(err.to_string().starts_with("invalid angle:"));
    }
}
