//! Numeric input validation.
//!
//! Callers hand over integers, floats, or decimals. Non-finite values are
//! explicit variants so they can never slip into decimal arithmetic.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use super::error::RoundingError;

/// A numeric value as received from a caller.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// An integer. Converts exactly if it fits the 96-bit decimal mantissa.
    Integer(i128),
    /// A binary float. Converts through its shortest round-trip representation.
    Float(f64),
    /// An exact decimal.
    Decimal(Decimal),
    /// A decimal tagged not-a-number.
    NaN,
    /// A decimal tagged positive infinity.
    Infinity,
    /// A decimal tagged negative infinity.
    NegInfinity,
}

impl Number {
    /// Validates the value and converts it to an exact decimal.
    ///
    /// Floats are read from their shortest round-trip string, so `123.456_f64`
    /// becomes `123.456` rather than the binary expansion
    /// `123.4560000000000030695446184836328029632568359375`.
    pub fn to_decimal(&self) -> Result<Decimal, RoundingError> {
        match *self {
            Self::Integer(n) => Decimal::try_from_i128_with_scale(n, 0).map_err(|_| {
                RoundingError::InvalidNumber(format!("integer {n} exceeds decimal range"))
            }),
            Self::Float(f) => float_to_decimal(f),
            Self::Decimal(d) => Ok(d),
            Self::NaN => Err(RoundingError::InvalidNumber("NaN".to_string())),
            Self::Infinity => Err(RoundingError::InvalidNumber("Infinity".to_string())),
            Self::NegInfinity => Err(RoundingError::InvalidNumber("-Infinity".to_string())),
        }
    }
}

fn float_to_decimal(value: f64) -> Result<Decimal, RoundingError> {
    if !value.is_finite() {
        return Err(RoundingError::InvalidNumber(value.to_string()));
    }
    parse_decimal(&value.to_string())
}

/// Parses a plain digit string.
///
/// Fraction digits beyond the 28 a decimal can hold are rounded off; only a
/// magnitude too large for the 96-bit mantissa is rejected.
fn parse_decimal(repr: &str) -> Result<Decimal, RoundingError> {
    Decimal::from_str_exact(repr)
        .or_else(|_| Decimal::from_str(repr))
        .map_err(|_| {
            RoundingError::InvalidNumber(format!("{repr:?} is not a representable decimal"))
        })
}

/// Decodes a `{"sign": ±1, "coef": .., "exp": ..}` decimal struct.
///
/// `coef` is a non-negative integer, a digit string for coefficients beyond
/// 64 bits, or one of the tags `"NaN"` and `"inf"`.
fn decode_decimal_struct(map: &Map<String, Value>) -> Result<Number, RoundingError> {
    let field = move |name: &str| {
        map.get(name).ok_or_else(|| {
            RoundingError::InvalidNumber(format!("decimal object is missing {name:?}"))
        })
    };

    let negative = match field("sign")?.as_i64() {
        Some(1) => false,
        Some(-1) => true,
        _ => {
            return Err(RoundingError::InvalidNumber(
                "decimal sign must be 1 or -1".to_string(),
            ));
        }
    };

    let coef = match field("coef")? {
        Value::String(tag) if tag == "NaN" => return Ok(Number::NaN),
        Value::String(tag) if tag == "inf" => {
            return Ok(if negative {
                Number::NegInfinity
            } else {
                Number::Infinity
            });
        }
        Value::String(digits)
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) =>
        {
            digits.trim_start_matches('0').to_string()
        }
        Value::Number(n) if n.is_u64() => n.to_string(),
        other => {
            return Err(RoundingError::InvalidNumber(format!(
                "decimal coefficient must be a non-negative integer, got {other}"
            )));
        }
    };

    let exp = field("exp")?.as_i64().ok_or_else(|| {
        RoundingError::InvalidNumber("decimal exponent must be an integer".to_string())
    })?;

    if coef.is_empty() || coef == "0" {
        return Ok(Number::Decimal(Decimal::ZERO));
    }

    let digits = coef.len();
    let repr = match usize::try_from(exp) {
        // Anything past 29 integer digits overflows the mantissa anyway.
        Ok(shift) if digits.saturating_add(shift) > 29 => {
            return Err(RoundingError::InvalidNumber(format!(
                "{coef}e{exp} exceeds decimal range"
            )));
        }
        Ok(shift) => format!("{coef}{}", "0".repeat(shift)),
        Err(_) => {
            let shift = usize::try_from(exp.unsigned_abs()).unwrap_or(usize::MAX);
            if shift >= digits {
                // Digits past the 29th fraction place cannot survive rounding.
                let zeros = (shift - digits).min(29);
                format!("0.{}{coef}", "0".repeat(zeros))
            } else {
                let (int, frac) = coef.split_at(digits - shift);
                format!("{int}.{frac}")
            }
        }
    };

    let sign = if negative { "-" } else { "" };
    parse_decimal(&format!("{sign}{repr}")).map(Number::Decimal)
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<u64> for Number {
    fn from(value: u64) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<i128> for Number {
    fn from(value: i128) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl std::str::FromStr for Number {
    type Err = RoundingError;

    /// Parses a digit string, or one of the tags `NaN`, `Infinity`, `-Infinity`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NaN" => Ok(Self::NaN),
            "Infinity" | "+Infinity" => Ok(Self::Infinity),
            "-Infinity" => Ok(Self::NegInfinity),
            _ => parse_decimal(s).map(Self::Decimal),
        }
    }
}

impl TryFrom<&Value> for Number {
    type Error = RoundingError;

    /// Accepts JSON numbers and `{"sign", "coef", "exp"}` decimal objects.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Integer(i128::from(i)))
                } else if let Some(u) = n.as_u64() {
                    Ok(Self::Integer(i128::from(u)))
                } else if let Some(f) = n.as_f64() {
                    Ok(Self::Float(f))
                } else {
                    Err(RoundingError::InvalidNumber(n.to_string()))
                }
            }
            Value::Object(map) if map.contains_key("coef") => decode_decimal_struct(map),
            other => Err(RoundingError::InvalidNumber(format!(
                "expected a number, got {}",
                json_kind(other)
            ))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use std::str::FromStr;

    #[test]
    fn test_integers_convert_exactly() {
        assert_eq!(Number::from(42).to_decimal().unwrap(), dec!(42));
        assert_eq!(Number::from(-7_i64).to_decimal().unwrap(), dec!(-7));
        assert_eq!(
            Number::from(u64::MAX).to_decimal().unwrap(),
            Decimal::from(u64::MAX)
        );
    }

    #[test]
    fn test_integer_out_of_range() {
        let err = Number::from(i128::MAX).to_decimal().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_NUMBER");
    }

    #[rstest]
    #[case(123.456, dec!(123.456))]
    #[case(123.73, dec!(123.73))]
    #[case(0.1, dec!(0.1))]
    #[case(-123.459, dec!(-123.459))]
    #[case(123.0, dec!(123))]
    #[case(1e-7, dec!(0.0000001))]
    fn test_floats_use_round_trip_digits(#[case] value: f64, #[case] expected: Decimal) {
        assert_eq!(Number::from(value).to_decimal().unwrap(), expected);
    }

    #[rstest]
    #[case(1.234_567_890_123_456_7e-13, dec!(0.0000000000001234567890123457))]
    #[case(1e-30, Decimal::ZERO)]
    #[case(-1e-40, Decimal::ZERO)]
    fn test_tiny_floats_round_to_max_scale(#[case] value: f64, #[case] expected: Decimal) {
        let decimal = Number::from(value).to_decimal().unwrap();
        assert_eq!(decimal, expected);
        assert!(decimal.scale() <= 28);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    #[case(1e300)]
    #[case(-1e29)]
    fn test_unrepresentable_floats(#[case] value: f64) {
        assert!(matches!(
            Number::from(value).to_decimal(),
            Err(RoundingError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_tagged_decimals_rejected() {
        for number in [Number::NaN, Number::Infinity, Number::NegInfinity] {
            assert_eq!(number.to_decimal().unwrap_err().error_code(), "INVALID_NUMBER");
        }
    }

    #[test]
    fn test_decimal_passes_through() {
        let value = dec!(1.2300);
        let decimal = Number::from(value).to_decimal().unwrap();
        assert_eq!(decimal, value);
        assert_eq!(decimal.scale(), 4);
    }

    #[test]
    fn test_from_str() {
        assert!(matches!(Number::from_str("NaN"), Ok(Number::NaN)));
        assert!(matches!(Number::from_str("Infinity"), Ok(Number::Infinity)));
        assert!(matches!(Number::from_str("-Infinity"), Ok(Number::NegInfinity)));
        assert_eq!(
            Number::from_str("-0.05").unwrap().to_decimal().unwrap(),
            dec!(-0.05)
        );
        assert_eq!(
            Number::from_str("0.123456789012345678901234567891")
                .unwrap()
                .to_decimal()
                .unwrap(),
            dec!(0.1234567890123456789012345679)
        );
        assert!(Number::from_str("12,50").is_err());
        assert!(Number::from_str("").is_err());
    }

    #[test]
    fn test_from_json() {
        let n = Number::try_from(&json!(12)).unwrap();
        assert_eq!(n.to_decimal().unwrap(), dec!(12));

        let n = Number::try_from(&json!(u64::MAX)).unwrap();
        assert_eq!(n.to_decimal().unwrap(), Decimal::from(u64::MAX));

        let n = Number::try_from(&json!(123.45)).unwrap();
        assert_eq!(n.to_decimal().unwrap(), dec!(123.45));
    }

    #[rstest]
    #[case(json!({"sign": 1, "coef": 123_455, "exp": -3}), dec!(123.455))]
    #[case(json!({"sign": -1, "coef": 5, "exp": -1}), dec!(-0.5))]
    #[case(json!({"sign": 1, "coef": 12, "exp": 3}), dec!(12000))]
    #[case(json!({"sign": 1, "coef": 0, "exp": 40}), Decimal::ZERO)]
    #[case(json!({"sign": 1, "coef": "123456789012345678901234", "exp": -20}), dec!(1234.56789012345678901234))]
    #[case(json!({"sign": 1, "coef": 7, "exp": -400}), Decimal::ZERO)]
    fn test_from_json_decimal_struct(#[case] value: Value, #[case] expected: Decimal) {
        let n = Number::try_from(&value).unwrap();
        assert_eq!(n.to_decimal().unwrap(), expected);
    }

    #[test]
    fn test_from_json_decimal_struct_tags() {
        let nan = Number::try_from(&json!({"sign": 1, "coef": "NaN", "exp": 0})).unwrap();
        assert!(matches!(nan, Number::NaN));

        let inf = Number::try_from(&json!({"sign": 1, "coef": "inf", "exp": 0})).unwrap();
        assert!(matches!(inf, Number::Infinity));

        let neg = Number::try_from(&json!({"sign": -1, "coef": "inf", "exp": 0})).unwrap();
        assert!(matches!(neg, Number::NegInfinity));
        assert_eq!(neg.to_decimal().unwrap_err().error_code(), "INVALID_NUMBER");
    }

    #[rstest]
    #[case(json!({"sign": 2, "coef": 1, "exp": 0}))]
    #[case(json!({"sign": 1, "coef": -1, "exp": 0}))]
    #[case(json!({"sign": 1, "coef": "12a", "exp": 0}))]
    #[case(json!({"sign": 1, "coef": 1.5, "exp": 0}))]
    #[case(json!({"sign": 1, "coef": 1}))]
    #[case(json!({"sign": 1, "coef": 1, "exp": 29}))]
    fn test_from_json_bad_decimal_struct(#[case] value: Value) {
        assert!(matches!(
            Number::try_from(&value),
            Err(RoundingError::InvalidNumber(_))
        ));
    }

    #[rstest]
    #[case(json!("123.45"))]
    #[case(json!(null))]
    #[case(json!(true))]
    #[case(json!([1]))]
    #[case(json!({"value": 1}))]
    fn test_from_json_non_numeric(#[case] value: Value) {
        assert!(matches!(
            Number::try_from(&value),
            Err(RoundingError::InvalidNumber(_))
        ));
    }
}
