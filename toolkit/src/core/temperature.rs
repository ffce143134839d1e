//! Conversion between Celsius, Fahrenheit and Kelvin.

use std::fmt;
use std::str::FromStr;

use crate::core::number::{finite_input, finite_result};
use crate::error::ToolkitError;

const KELVIN_OFFSET: f64 = 273.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl FromStr for TemperatureUnit {
    type Err = ToolkitError;

    /// Unit names are matched case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "celsius" => Ok(Self::Celsius),
            "fahrenheit" => Ok(Self::Fahrenheit),
            "kelvin" => Ok(Self::Kelvin),
            _ => Err(ToolkitError::InvalidUnit(s.to_string())),
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Celsius => "Celsius",
            Self::Fahrenheit => "Fahrenheit",
            Self::Kelvin => "Kelvin",
        };
        f.write_str(name)
    }
}

/// Convert `value` from one unit to another.
///
/// Pairs outside the conversion table, including same-unit pairs, return
/// `value` unchanged. `value` must be finite, as must the converted result.
pub fn convert(
    value: f64,
    from: TemperatureUnit,
    to: TemperatureUnit,
) -> Result<f64, ToolkitError> {
    use TemperatureUnit::{Celsius, Fahrenheit, Kelvin};

    let value = finite_input("value", value)?;
    let converted = match (from, to) {
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Celsius, Kelvin) => value + KELVIN_OFFSET,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
        (Kelvin, Celsius) => value - KELVIN_OFFSET,
        (Kelvin, Fahrenheit) => (value - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
        _ => value,
    };
    finite_result(converted)
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNITS: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    fn converted(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
        convert(value, from, to).expect("convert")
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn parses_units_case_insensitively_and_displays_title_case() {
        let unit: TemperatureUnit = "fAhReNhEiT".parse().expect("parse");
        assert_eq!(unit, TemperatureUnit::Fahrenheit);
        assert_eq!(unit.to_string(), "Fahrenheit");
    }

    #[test]
    fn rejects_unknown_unit() {
        let err = "Rankine".parse::<TemperatureUnit>().expect_err("reject");
        assert_eq!(err, ToolkitError::InvalidUnit("Rankine".to_string()));
    }

    #[test]
    fn known_reference_points() {
        use TemperatureUnit::{Celsius, Fahrenheit, Kelvin};
        assert_close(converted(0.0, Celsius, Fahrenheit), 32.0);
        assert_close(converted(100.0, Celsius, Fahrenheit), 212.0);
        assert_close(converted(0.0, Celsius, Kelvin), 273.15);
        assert_close(converted(212.0, Fahrenheit, Celsius), 100.0);
        assert_close(converted(32.0, Fahrenheit, Kelvin), 273.15);
        assert_close(converted(0.0, Kelvin, Celsius), -273.15);
        assert_close(converted(273.15, Kelvin, Fahrenheit), 32.0);
    }

    #[test]
    fn same_unit_is_identity() {
        for unit in UNITS {
            for value in [-40.0, 0.0, 36.6, 1e6] {
                assert_eq!(converted(value, unit, unit), value);
            }
        }
    }

    #[test]
    fn round_trips_through_every_pair() {
        for from in UNITS {
            for to in UNITS {
                for value in [-40.0, 0.0, 25.5, 500.0] {
                    let there = converted(value, from, to);
                    assert_close(converted(there, to, from), value);
                }
            }
        }
    }

    #[test]
    fn rejects_non_finite_value() {
        let err = convert(f64::NAN, TemperatureUnit::Celsius, TemperatureUnit::Kelvin)
            .expect_err("reject");
        assert_eq!(err.code(), "invalid_number");
        let unit = TemperatureUnit::Kelvin;
        assert!(convert(f64::INFINITY, unit, unit).is_err());
    }

    #[test]
    fn rejects_overflowing_conversion() {
        assert_eq!(
            convert(f64::MAX, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit),
            Err(ToolkitError::ResultOutOfRange)
        );
    }
}
