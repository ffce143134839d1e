//! Typed failures for toolkit operations.

use thiserror::Error;

/// Coarse classification of an operation failure.
///
/// Every variant is a client error; the kind only tells callers which
/// family the rejection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input could not be interpreted (unknown operation, malformed unit).
    InvalidArgument,
    /// The input is well-formed but mathematically undefined.
    Domain,
    /// The input would exceed a computation bound.
    ResourceLimit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolkitError {
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Invalid temperature unit: {0}")]
    InvalidUnit(String),

    #[error("Invalid number for {field}: {value} is not finite")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Factorial of negative number not defined: {0}")]
    NegativeInput(i64),

    #[error("Number too large: {num} exceeds the maximum of {max}")]
    ValueTooLarge { num: i64, max: u32 },

    #[error("Result out of range: not representable as a finite number")]
    ResultOutOfRange,
}

impl ToolkitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidOperation(_) | Self::InvalidUnit(_) | Self::InvalidNumber { .. } => {
                ErrorKind::InvalidArgument
            }
            Self::DivisionByZero | Self::NegativeInput(_) => ErrorKind::Domain,
            Self::ValueTooLarge { .. } | Self::ResultOutOfRange => ErrorKind::ResourceLimit,
        }
    }

    /// Stable machine-readable code, used in HTTP error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidOperation(_) => "invalid_operation",
            Self::InvalidUnit(_) => "invalid_unit",
            Self::InvalidNumber { .. } => "invalid_number",
            Self::DivisionByZero => "division_by_zero",
            Self::NegativeInput(_) => "negative_input",
            Self::ValueTooLarge { .. } => "value_too_large",
            Self::ResultOutOfRange => "result_out_of_range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_is_domain_not_invalid_argument() {
        assert_eq!(ToolkitError::DivisionByZero.kind(), ErrorKind::Domain);
        assert_ne!(
            ToolkitError::DivisionByZero.code(),
            ToolkitError::InvalidOperation("%".to_string()).code()
        );
    }

    #[test]
    fn too_large_is_resource_limit() {
        let err = ToolkitError::ValueTooLarge { num: 21, max: 20 };
        assert_eq!(err.kind(), ErrorKind::ResourceLimit);
        assert!(err.to_string().starts_with("Number too large"));
    }

    #[test]
    fn non_finite_input_and_output_are_classified_apart() {
        let input = ToolkitError::InvalidNumber {
            field: "num1",
            value: "inf".to_string(),
        };
        assert_eq!(input.kind(), ErrorKind::InvalidArgument);
        assert_eq!(input.code(), "invalid_number");
        assert_eq!(ToolkitError::ResultOutOfRange.kind(), ErrorKind::ResourceLimit);
    }
}
