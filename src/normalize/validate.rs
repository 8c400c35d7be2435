//! Positive-number predicate over loosely typed input

use serde_json::Value;
use super::parse_decimal;

/// A value handed to [`is_valid_positive_number`]
///
/// Covers what arrives from a form or a JSON payload: numbers, numeric
/// text, nothing at all, or some other structured value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericInput<'a> {
    Number(f64),
    Text(&'a str),
    Absent,
    /// Booleans, arrays, objects
    Other,
}

impl NumericInput<'_> {
    /// Numeric value, if the input converts to one
    ///
    /// Text is trimmed first; blank text converts to zero.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            NumericInput::Number(n) => Some(*n),
            NumericInput::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    parse_decimal(trimmed)
                }
            }
            NumericInput::Absent | NumericInput::Other => None,
        }
    }
}

impl From<f64> for NumericInput<'_> {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<i32> for NumericInput<'_> {
    fn from(value: i32) -> Self {
        NumericInput::Number(f64::from(value))
    }
}

impl From<u32> for NumericInput<'_> {
    fn from(value: u32) -> Self {
        NumericInput::Number(f64::from(value))
    }
}

impl<'a> From<&'a str> for NumericInput<'a> {
    fn from(value: &'a str) -> Self {
        NumericInput::Text(value)
    }
}

impl<'a> From<&'a String> for NumericInput<'a> {
    fn from(value: &'a String) -> Self {
        NumericInput::Text(value.as_str())
    }
}

impl<'a, T: Into<NumericInput<'a>>> From<Option<T>> for NumericInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(NumericInput::Absent, Into::into)
    }
}

impl<'a> From<&'a Value> for NumericInput<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => NumericInput::Absent,
            Value::Number(n) => n.as_f64().map_or(NumericInput::Other, NumericInput::Number),
            Value::String(s) => NumericInput::Text(s.as_str()),
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => NumericInput::Other,
        }
    }
}

/// True iff `value` converts to a finite number strictly greater than zero.
///
/// Never fails: anything that does not convert is simply not valid.
pub fn is_valid_positive_number<'a>(value: impl Into<NumericInput<'a>>) -> bool {
    value
        .into()
        .to_number()
        .is_some_and(|n| n.is_finite() && n > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_positive_numbers() {
        assert!(is_valid_positive_number(10));
        assert!(is_valid_positive_number(0.1));
        assert!(is_valid_positive_number("10"));
        assert!(is_valid_positive_number("10.5"));
        assert!(is_valid_positive_number(" 3 "));
    }

    #[test]
    fn test_rejects_negative_numbers_and_zero() {
        assert!(!is_valid_positive_number(-10));
        assert!(!is_valid_positive_number(0));
        assert!(!is_valid_positive_number("-10"));
        assert!(!is_valid_positive_number("0"));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(!is_valid_positive_number(f64::NAN));
        assert!(!is_valid_positive_number(f64::INFINITY));
        assert!(!is_valid_positive_number("inf"));
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        assert!(!is_valid_positive_number("abc"));
        assert!(!is_valid_positive_number(""));
        assert!(!is_valid_positive_number(None::<f64>));
        assert!(!is_valid_positive_number(&json!(null)));
        assert!(!is_valid_positive_number(&json!({})));
        assert!(!is_valid_positive_number(&json!([])));
        assert!(!is_valid_positive_number(&json!(true)));
    }

    #[test]
    fn test_json_values_convert() {
        assert!(is_valid_positive_number(&json!(12)));
        assert!(is_valid_positive_number(&json!("2.5")));
        assert!(!is_valid_positive_number(&json!(-1.5)));
    }

    #[test]
    fn test_option_wraps_inner_value() {
        assert!(is_valid_positive_number(Some("4")));
        let owned = String::from("7");
        assert!(is_valid_positive_number(Some(&owned)));
    }
}
