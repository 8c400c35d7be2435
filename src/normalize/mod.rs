//! Normalization of locale-formatted user input (pt-BR conventions)
//!
//! Monetary text uses `.` for thousands and `,` for decimals with an optional
//! `R$` prefix ("R$ 1.234,56"). Duration text is a number of years that may
//! carry a unit word ("2 anos", "1,5 ano").
//!
//! Parsers are permissive and never panic: unparseable text comes back as a
//! [`NumberParseError`](crate::error::NumberParseError) and the caller decides
//! whether that means "reject" or "treat as zero".

mod currency;
mod duration;
mod validate;

pub use currency::{
    format_monetary_amount, format_percentage, parse_monetary_amount, CURRENCY_SYMBOL,
};
pub use duration::{months_for_years, parse_duration_years, MONTHS_PER_YEAR};
pub use validate::{is_valid_positive_number, NumericInput};

/// Parse a plain decimal number (optional sign, digits, one point, optional exponent).
///
/// Rejects the textual special values `f64::from_str` would otherwise accept
/// ("inf", "NaN", ...), so only digit-bearing numerals get through.
pub(crate) fn parse_decimal(text: &str) -> Option<f64> {
    let well_formed = text.chars().any(|c| c.is_ascii_digit())
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));

    if !well_formed {
        return None;
    }

    text.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_accepts_numerals() {
        assert_eq!(parse_decimal("10"), Some(10.0));
        assert_eq!(parse_decimal("-10.5"), Some(-10.5));
        assert_eq!(parse_decimal(".5"), Some(0.5));
        assert_eq!(parse_decimal("1e3"), Some(1000.0));
    }

    #[test]
    fn test_parse_decimal_rejects_words() {
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("1.2.3"), None);
        assert_eq!(parse_decimal("1,5"), None);
        assert_eq!(parse_decimal(""), None);
    }
}
