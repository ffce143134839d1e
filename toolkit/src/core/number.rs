//! Finiteness checks for floating-point inputs and results.
//!
//! JSON has no encoding for `inf` or `NaN`, so neither may enter or leave an
//! operation.

use crate::error::ToolkitError;

/// Reject a non-finite input value, naming the offending field.
pub fn finite_input(field: &'static str, value: f64) -> Result<f64, ToolkitError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ToolkitError::InvalidNumber {
            field,
            value: value.to_string(),
        })
    }
}

/// Reject a result that overflowed to infinity or became `NaN`.
pub fn finite_result(value: f64) -> Result<f64, ToolkitError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ToolkitError::ResultOutOfRange)
    }
}
