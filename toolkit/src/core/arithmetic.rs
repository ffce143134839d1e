//! Two-operand calculator.

use std::fmt;
use std::str::FromStr;

use crate::core::number::{finite_input, finite_result};
use crate::error::ToolkitError;

/// The four supported operators.
///
/// Symbol and word aliases (`+`/`add`, `-`/`sub`, `*`/`mul`, `/`/`div`)
/// normalise to the same variant during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl FromStr for Operator {
    type Err = ToolkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" | "add" => Ok(Self::Add),
            "-" | "sub" => Ok(Self::Sub),
            "*" | "mul" => Ok(Self::Mul),
            "/" | "div" => Ok(Self::Div),
            other => Err(ToolkitError::InvalidOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
        };
        f.write_str(name)
    }
}

/// Apply `op` to `num1` and `num2`.
///
/// Operands must be finite. Division by zero is rejected, and so is any
/// result that overflows to infinity (e.g. a subnormal divisor).
pub fn calculate(num1: f64, num2: f64, op: Operator) -> Result<f64, ToolkitError> {
    let num1 = finite_input("num1", num1)?;
    let num2 = finite_input("num2", num2)?;
    let result = match op {
        Operator::Add => num1 + num2,
        Operator::Sub => num1 - num2,
        Operator::Mul => num1 * num2,
        Operator::Div if num2 == 0.0 => return Err(ToolkitError::DivisionByZero),
        Operator::Div => num1 / num2,
    };
    finite_result(result)
}
