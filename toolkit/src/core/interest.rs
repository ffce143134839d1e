//! Simple interest.

use crate::core::number::{finite_input, finite_result};
use crate::error::ToolkitError;

/// `principal * rate * time / 100`, with `rate` given as a percentage.
///
/// Zero or negative inputs are passed through; only non-finite inputs and
/// results are rejected.
pub fn simple_interest(principal: f64, rate: f64, time: i64) -> Result<f64, ToolkitError> {
    let principal = finite_input("principal", principal)?;
    let rate = finite_input("rate", rate)?;
    finite_result(principal * rate * time as f64 / 100.0)
}
