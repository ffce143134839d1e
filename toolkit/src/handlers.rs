//! Request handlers: parse a request, run the core operation, build the response.
//!
//! These are transport-agnostic; the HTTP server and the CLI both call them.

use tracing::debug;

use crate::core::arithmetic::{Operator, calculate as apply_operator};
use crate::core::factorial::factorial as compute_factorial;
use crate::core::interest::simple_interest;
use crate::core::palindrome::is_palindrome;
use crate::core::temperature::{TemperatureUnit, convert};
use crate::error::ToolkitError;
use crate::types::{
    ArithmeticRequest, ArithmeticResponse, FactorialRequest, FactorialResponse, InterestRequest,
    InterestResponse, PalindromeRequest, PalindromeResponse, TemperatureRequest,
    TemperatureResponse,
};

pub fn calculate(req: &ArithmeticRequest) -> Result<ArithmeticResponse, ToolkitError> {
    let op: Operator = req.operation.parse()?;
    let result = apply_operator(req.num1, req.num2, op)?;
    debug!(op = %op, "calculated {} {} {} = {result}", req.num1, op.symbol(), req.num2);
    Ok(ArithmeticResponse { result })
}

pub fn temperature(req: &TemperatureRequest) -> Result<TemperatureResponse, ToolkitError> {
    let from: TemperatureUnit = req.from_unit.parse()?;
    let to: TemperatureUnit = req.to_unit.parse()?;
    let converted_value = convert(req.value, from, to)?;
    debug!(value = req.value, %from, %to, converted_value, "converted temperature");
    Ok(TemperatureResponse { converted_value })
}

pub fn factorial(req: &FactorialRequest) -> Result<FactorialResponse, ToolkitError> {
    let result = compute_factorial(req.num)?;
    Ok(FactorialResponse { result })
}

pub fn interest(req: &InterestRequest) -> Result<InterestResponse, ToolkitError> {
    Ok(InterestResponse {
        simple_interest: simple_interest(req.principal, req.rate, req.time)?,
    })
}

pub fn palindrome(req: &PalindromeRequest) -> PalindromeResponse {
    PalindromeResponse {
        is_palindrome: is_palindrome(&req.text),
        word: req.text.clone(),
    }
}
