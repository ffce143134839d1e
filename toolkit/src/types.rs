//! Request and response shapes for every toolkit operation.
//!
//! Field names follow the public camelCase contract. Request types also accept
//! snake_case aliases (`from_unit`) sent by older clients.

use std::fmt;
use std::num::{IntErrorKind, ParseIntError};

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticRequest {
    pub num1: f64,
    pub num2: f64,
    /// One of `add`, `sub`, `mul`, `div` or the symbols `+ - * /`.
    pub operation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticResponse {
    pub result: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureRequest {
    /// Unit to convert from (`Celsius`, `Fahrenheit` or `Kelvin`, any case).
    #[serde(alias = "from_unit")]
    pub from_unit: String,
    /// Unit to convert to.
    #[serde(alias = "to_unit")]
    pub to_unit: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureResponse {
    pub converted_value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorialRequest {
    /// Integers outside the `i64` range saturate so that the factorial bounds
    /// check reports them instead of the parser.
    #[serde(deserialize_with = "saturating_i64")]
    pub num: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorialResponse {
    pub result: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestRequest {
    pub principal: f64,
    /// Interest rate in percent.
    pub rate: f64,
    /// Time period in years.
    pub time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestResponse {
    pub simple_interest: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalindromeRequest {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PalindromeResponse {
    pub word: String,
    pub is_palindrome: bool,
}

/// Parse an integer, clamping values beyond the `i64` range to its limits.
pub fn parse_saturating_i64(s: &str) -> Result<i64, ParseIntError> {
    match s.trim().parse::<i64>() {
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(err),
        },
        parsed => parsed,
    }
}

fn saturating_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    struct SaturatingI64;

    impl Visitor<'_> for SaturatingI64 {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            Ok(i64::try_from(v).unwrap_or(i64::MAX))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            parse_saturating_i64(v).map_err(E::custom)
        }
    }

    deserializer.deserialize_any(SaturatingI64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn temperature_request_accepts_both_key_styles() {
        let camel: TemperatureRequest =
            serde_json::from_value(json!({"fromUnit": "Celsius", "toUnit": "Kelvin", "value": 1.0}))
                .expect("camelCase");
        let snake: TemperatureRequest = serde_json::from_value(
            json!({"from_unit": "Celsius", "to_unit": "Kelvin", "value": 1.0}),
        )
        .expect("snake_case");
        assert_eq!(camel, snake);
    }

    #[test]
    fn responses_serialize_camel_case() {
        let body = serde_json::to_value(PalindromeResponse {
            word: "noon".to_string(),
            is_palindrome: true,
        })
        .expect("serialize");
        assert_eq!(body, json!({"word": "noon", "isPalindrome": true}));

        let body = serde_json::to_value(InterestResponse {
            simple_interest: 100.0,
        })
        .expect("serialize");
        assert_eq!(body, json!({"simpleInterest": 100.0}));
    }

    #[test]
    fn out_of_range_integers_saturate() {
        assert_eq!(parse_saturating_i64("99999999999999999999"), Ok(i64::MAX));
        assert_eq!(parse_saturating_i64("-99999999999999999999"), Ok(i64::MIN));
        assert_eq!(parse_saturating_i64("42"), Ok(42));
        assert!(parse_saturating_i64("4.2").is_err());
        assert!(parse_saturating_i64("").is_err());
    }

    #[test]
    fn factorial_request_accepts_numbers_and_numeric_strings() {
        let from_number: FactorialRequest =
            serde_json::from_value(json!({"num": 5})).expect("number");
        assert_eq!(from_number.num, 5);

        let huge: FactorialRequest =
            serde_json::from_value(json!({"num": "99999999999999999999"})).expect("string");
        assert_eq!(huge.num, i64::MAX);

        let huge_unsigned: FactorialRequest =
            serde_json::from_value(json!({"num": u64::MAX})).expect("u64");
        assert_eq!(huge_unsigned.num, i64::MAX);
    }
}
