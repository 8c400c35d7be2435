//! Brazilian real amounts: "R$ 1.234,56" <-> 1234.56

use crate::error::NumberParseError;
use super::parse_decimal;

/// Currency symbol rendered in front of every formatted amount
pub const CURRENCY_SYMBOL: &str = "R$";

/// Separator between symbol and digits (non-breaking space, as pt-BR formatters emit)
const SYMBOL_SEPARATOR: char = '\u{a0}';

/// Parse a monetary amount written with pt-BR separators.
///
/// Every `R`, `$` and whitespace character is dropped, `.` thousands
/// separators are removed and the first `,` becomes the decimal point.
/// Empty text means "no amount entered" and yields `0.0`.
pub fn parse_monetary_amount(text: &str) -> Result<f64, NumberParseError> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, 'R' | '$' | '.') && !c.is_whitespace())
        .collect();
    let cleaned = cleaned.replacen(',', ".", 1);

    if cleaned.is_empty() {
        return Ok(0.0);
    }

    parse_decimal(&cleaned).ok_or_else(|| NumberParseError::NotANumber {
        input: text.to_string(),
    })
}

/// Render an amount as pt-BR currency, e.g. `R$ 1.234,57` for 1234.567.
///
/// Rounds half away from zero to whole centavos, on the shortest decimal
/// form of the value (so 1.005 gives `R$ 1,01`). Negative amounts carry a
/// leading minus before the symbol.
pub fn format_monetary_amount(value: f64) -> String {
    if value.is_nan() {
        return format!("{}{}NaN", CURRENCY_SYMBOL, SYMBOL_SEPARATOR);
    }

    let sign = if value < 0.0 { "-" } else { "" };

    if value.is_infinite() {
        return format!("{}{}{}∞", sign, CURRENCY_SYMBOL, SYMBOL_SEPARATOR);
    }

    let (whole, fraction) = round_decimal(value.abs(), 2);

    format!(
        "{}{}{}{},{}",
        sign,
        CURRENCY_SYMBOL,
        SYMBOL_SEPARATOR,
        group_thousands(&whole),
        fraction
    )
}

/// Render an annual rate as a pt-BR percentage: 0.0925 -> `9,25%`, 0.18 -> `18%`.
///
/// At most two fraction digits, trailing zeros dropped.
pub fn format_percentage(rate: f64) -> String {
    if !rate.is_finite() {
        return format!("{}%", rate * 100.0);
    }

    let sign = if rate < 0.0 { "-" } else { "" };
    let (whole, fraction) = round_decimal((rate * 100.0).abs(), 2);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        format!("{}{}%", sign, group_thousands(&whole))
    } else {
        format!("{}{},{}%", sign, group_thousands(&whole), fraction)
    }
}

/// Round a finite non-negative value to `places` fraction digits, half away
/// from zero, returning the whole and fraction digit strings.
///
/// Works on the shortest round-trip decimal text of the `f64`, which never
/// uses exponent notation, rather than on the binary value.
fn round_decimal(value: f64, places: usize) -> (String, String) {
    let text = value.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(places))
        .collect();

    if fraction.as_bytes().get(places).map_or(false, |&d| d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - places;
    let whole = digits[..split].iter().map(|&d| char::from(d)).collect();
    let fraction = digits[split..].iter().map(|&d| char::from(d)).collect();
    (whole, fraction)
}

/// Insert `.` between every group of three digits
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_parse_currency_strings() {
        assert_eq!(parse_monetary_amount("R$ 1.000,00"), Ok(1000.0));
        assert_eq!(parse_monetary_amount("R$ 1.234,56"), Ok(1234.56));
        assert_eq!(parse_monetary_amount("1.000,00"), Ok(1000.0));
        assert_eq!(parse_monetary_amount("1000"), Ok(1000.0));
    }

    #[test]
    fn test_parse_different_formats() {
        assert_eq!(parse_monetary_amount("R$1.000,00"), Ok(1000.0));
        assert_eq!(parse_monetary_amount("R$ 1000,00"), Ok(1000.0));
        assert_eq!(parse_monetary_amount("1000,50"), Ok(1000.5));
        assert_eq!(parse_monetary_amount("R$\u{a0}12.345.678,90"), Ok(12_345_678.9));
    }

    #[test]
    fn test_parse_empty_is_zero() {
        assert_eq!(parse_monetary_amount(""), Ok(0.0));
        assert_eq!(parse_monetary_amount("R$"), Ok(0.0));
        assert_eq!(parse_monetary_amount("  "), Ok(0.0));
    }

    #[test]
    fn test_parse_garbage_is_error() {
        assert_eq!(
            parse_monetary_amount("abc"),
            Err(NumberParseError::NotANumber { input: "abc".to_string() })
        );
        assert!(parse_monetary_amount("12,34,56").is_err());
    }

    #[test]
    fn test_format_positive_numbers() {
        assert_eq!(format_monetary_amount(1000.0), "R$\u{a0}1.000,00");
        assert_eq!(format_monetary_amount(1234.56), "R$\u{a0}1.234,56");
        assert_eq!(format_monetary_amount(0.0), "R$\u{a0}0,00");
        assert_eq!(format_monetary_amount(999.999), "R$\u{a0}1.000,00");
        assert_eq!(format_monetary_amount(1_234_567.8), "R$\u{a0}1.234.567,80");
    }

    #[test]
    fn test_format_negative_numbers() {
        assert_eq!(format_monetary_amount(-1000.0), "-R$\u{a0}1.000,00");
        assert_eq!(format_monetary_amount(-1234.56), "-R$\u{a0}1.234,56");
    }

    #[test]
    fn test_format_decimal_precision() {
        assert!(format_monetary_amount(1234.567).contains("1.234,57"));
        assert!(format_monetary_amount(1234.564).contains("1.234,56"));
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_monetary_amount(f64::NAN), "R$\u{a0}NaN");
        assert_eq!(format_monetary_amount(f64::NEG_INFINITY), "-R$\u{a0}∞");
    }

    #[test]
    fn test_format_then_parse_recovers_value() {
        for &value in &[0.0, 0.01, 7.5, 1234.56, 98_765.43, 1_000_000.0, 22_000.99] {
            let parsed = parse_monetary_amount(&format_monetary_amount(value)).unwrap();
            assert_abs_diff_eq!(parsed, value, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1.000");
        assert_eq!(group_thousands("123456789"), "123.456.789");
    }

    #[test]
    fn test_format_half_cent_rounds_up() {
        // 1.005 and 1.015 sit just below the half cent in binary
        assert_eq!(format_monetary_amount(1.005), "R$\u{a0}1,01");
        assert_eq!(format_monetary_amount(1.015), "R$\u{a0}1,02");
        assert_eq!(format_monetary_amount(-1.005), "-R$\u{a0}1,01");
        assert_eq!(format_monetary_amount(0.995), "R$\u{a0}1,00");
        assert_eq!(format_monetary_amount(1.0049), "R$\u{a0}1,00");
    }

    #[test]
    fn test_format_large_amounts() {
        assert_eq!(format_monetary_amount(1e21), "R$\u{a0}1.000.000.000.000.000.000.000,00");
        assert_eq!(format_monetary_amount(99_999.999), "R$\u{a0}100.000,00");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.0925), "9,25%");
        assert_eq!(format_percentage(0.18), "18%");
        assert_eq!(format_percentage(0.1075), "10,75%");
        assert_eq!(format_percentage(0.125), "12,5%");
        assert_eq!(format_percentage(0.0), "0%");
        assert_eq!(format_percentage(-0.05), "-5%");
    }
}
