//! Bounded factorial.

use tracing::debug;

use crate::error::ToolkitError;

/// Largest accepted input; `21!` no longer fits in a `u64`.
pub const MAX_INPUT: u32 = 20;

/// Compute `num!`.
///
/// Negative input is a domain error and anything above [`MAX_INPUT`] is
/// rejected as too large. Both checks run before any multiplication.
pub fn factorial(num: i64) -> Result<u64, ToolkitError> {
    if num < 0 {
        return Err(ToolkitError::NegativeInput(num));
    }
    if num > i64::from(MAX_INPUT) {
        return Err(ToolkitError::ValueTooLarge {
            num,
            max: MAX_INPUT,
        });
    }

    let result: u64 = (1..=num.unsigned_abs()).product();
    debug!(num, result, "computed factorial");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn zero_factorial_is_one() {
        assert_eq!(factorial(0), Ok(1));
    }

    #[test]
    fn small_values() {
        assert_eq!(factorial(1), Ok(1));
        assert_eq!(factorial(5), Ok(120));
        assert_eq!(factorial(10), Ok(3_628_800));
    }

    #[test]
    fn upper_bound_is_inclusive() {
        assert_eq!(factorial(20), Ok(2_432_902_008_176_640_000));
    }

    #[test]
    fn above_bound_is_resource_limit() {
        let err = factorial(21).expect_err("reject");
        assert_eq!(err, ToolkitError::ValueTooLarge { num: 21, max: 20 });
        assert_eq!(err.kind(), ErrorKind::ResourceLimit);
        assert!(factorial(i64::MAX).is_err());
    }

    #[test]
    fn negative_is_domain_error() {
        let err = factorial(-1).expect_err("reject");
        assert_eq!(err, ToolkitError::NegativeInput(-1));
        assert_eq!(err.kind(), ErrorKind::Domain);
        assert!(factorial(i64::MIN).is_err());
    }
}
