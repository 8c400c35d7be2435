//! Investment horizon text ("2 anos", "1,5") to years and months

use crate::error::NumberParseError;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Parse a duration in years from free text.
///
/// Everything except digits, `.` and `,` is discarded, the first `,` becomes
/// a decimal point and the longest leading decimal numeral is read, so
/// "1.5.2" gives 1.5 and "10 anos" gives 10.
pub fn parse_duration_years(text: &str) -> Result<f64, NumberParseError> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ','))
        .collect();
    let cleaned = cleaned.replacen(',', ".", 1);

    leading_decimal(&cleaned).ok_or_else(|| NumberParseError::NotANumber {
        input: text.to_string(),
    })
}

/// Whole months in a horizon of `years`, rounded to the nearest month.
///
/// `None` when the month count is not a finite value in `0..=u32::MAX`.
pub fn months_for_years(years: f64) -> Option<u32> {
    let months = (years * MONTHS_PER_YEAR).round();
    if months.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&months) {
        Some(months as u32)
    } else {
        None
    }
}

fn leading_decimal(text: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_point = false;
    let mut seen_digit = false;

    for (i, c) in text.char_indices() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }

    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_unit_words() {
        assert_eq!(parse_duration_years("2"), Ok(2.0));
        assert_eq!(parse_duration_years("1 ano"), Ok(1.0));
        assert_eq!(parse_duration_years("10 anos"), Ok(10.0));
    }

    #[test]
    fn test_parse_decimal_comma() {
        assert_eq!(parse_duration_years("1,5 anos"), Ok(1.5));
        assert_eq!(parse_duration_years("2.25"), Ok(2.25));
    }

    #[test]
    fn test_parse_reads_leading_numeral_only() {
        assert_eq!(parse_duration_years("1.5.2"), Ok(1.5));
        assert_eq!(parse_duration_years("1,5,3"), Ok(1.5));
        assert_eq!(parse_duration_years(".5"), Ok(0.5));
    }

    #[test]
    fn test_parse_sign_is_discarded() {
        assert_eq!(parse_duration_years("-3"), Ok(3.0));
    }

    #[test]
    fn test_parse_without_digits_fails() {
        assert!(parse_duration_years("").is_err());
        assert!(parse_duration_years("anos").is_err());
        assert!(parse_duration_years(".").is_err());
    }

    #[test]
    fn test_months_for_years() {
        assert_eq!(months_for_years(1.0), Some(12));
        assert_eq!(months_for_years(2.5), Some(30));
        assert_eq!(months_for_years(0.04), Some(0));
        assert_eq!(months_for_years(0.125), Some(2));
    }

    #[test]
    fn test_months_out_of_range() {
        assert_eq!(months_for_years(f64::NAN), None);
        assert_eq!(months_for_years(f64::INFINITY), None);
        assert_eq!(months_for_years(-1.0), None);
        assert_eq!(months_for_years(999_999_999_999.0), None);
        assert_eq!(months_for_years(f64::from(u32::MAX) / 12.0), Some(u32::MAX));
    }
}
