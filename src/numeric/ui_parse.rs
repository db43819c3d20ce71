// ============================================================================
// UI -> DB Parsing
// Strict parsing of continental UI number strings into canonical DB strings
// ============================================================================
//
// UI strings use a comma as the only decimal separator and either dots or
// single ASCII spaces (never both) as thousands grouping:
//
//     "1.234,56"  -> "1234.56"
//     "1 234,5"   -> "1234.50"   (scale 2)
//     ",50"       -> "0.50"
//
// Nothing is rounded or guessed. The first failing check wins.

use super::errors::{ErrorKind, NumericResult, Rejection};
use super::grouping::{strip_grouping, trim_leading_zeros, validate_grouping};
use super::precision::DecimalSpec;

/// Whitespace removed around inputs. Unicode spaces (NBSP and friends) are
/// deliberately absent so they surface as unsupported characters.
pub(crate) const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Split an optional leading `+`/`-` from the rest.
pub(crate) fn split_sign(s: &str) -> (&str, &str) {
    match s.as_bytes().first() {
        Some(b'+') | Some(b'-') => s.split_at(1),
        _ => ("", s),
    }
}

/// `^\d+\.\d+$`
fn is_dot_decimal_shape(s: &str) -> bool {
    match s.split_once('.') {
        Some((int, frac)) => {
            !int.is_empty()
                && !frac.is_empty()
                && int.bytes().all(|b| b.is_ascii_digit())
                && frac.bytes().all(|b| b.is_ascii_digit())
        }
        None => false,
    }
}

/// Parse a UI-formatted number into a canonical DB decimal string.
///
/// Returns `Ok(None)` for a missing or blank input.
///
/// # Examples
/// ```
/// use strict_decimal::numeric::parse_ui;
///
/// assert_eq!(parse_ui(Some("1.234,56"), 10, 2).unwrap(), Some("1234.56".to_string()));
/// assert_eq!(parse_ui(Some("   "), 10, 2).unwrap(), None);
/// ```
pub fn parse_ui(raw: Option<&str>, precision: i32, scale: i32) -> NumericResult<Option<String>> {
    let trimmed = match raw {
        Some(s) => s.trim_matches(TRIM_CHARS),
        None => return Ok(None),
    };
    if trimmed.is_empty() {
        return Ok(None);
    }

    let spec = DecimalSpec::new(precision, scale)?;
    parse_ui_with_spec(trimmed, spec).map(Some)
}

/// Parse an already-trimmed, non-empty UI string against a validated spec.
pub fn parse_ui_with_spec(trimmed: &str, spec: DecimalSpec) -> NumericResult<String> {
    let (sign, body) = split_sign(trimmed);
    if body.is_empty() {
        return Err(Rejection::new(ErrorKind::SignWithoutDigits));
    }

    if !body.bytes().all(|b| matches!(b, b'0'..=b'9' | b',' | b'.' | b' ')) {
        return Err(Rejection::new(ErrorKind::UnsupportedChars).with_var("VALUE", trimmed));
    }

    let comma_count = body.bytes().filter(|&b| b == b',').count();
    if comma_count > 1 {
        return Err(Rejection::new(ErrorKind::MultipleDecimalSeparators));
    }
    let has_comma = comma_count == 1;

    if !has_comma && is_dot_decimal_shape(body) {
        return Err(Rejection::new(ErrorKind::DotDecimalNotSupported));
    }

    let (int_part, frac_part) = body.split_once(',').unwrap_or((body, ""));

    if spec.scale() == 0 && has_comma {
        return Err(Rejection::new(ErrorKind::DecimalsNotAllowedForScaleZero));
    }

    let int_part = if int_part.is_empty() && has_comma {
        "0"
    } else {
        int_part
    };

    validate_grouping(int_part)?;

    let stripped = strip_grouping(int_part);
    if stripped.is_empty() {
        return Err(Rejection::new(ErrorKind::MissingIntegerDigits));
    }
    let int_digits = trim_leading_zeros(&stripped);

    if !frac_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Rejection::new(ErrorKind::FractionMustBeDigits));
    }
    if frac_part.len() > spec.scale() as usize {
        return Err(Rejection::new(ErrorKind::TooManyFractionDigits).with_var("SCALE", spec.scale()));
    }

    // A zero integer part takes no integer digit, so DECIMAL(p, p) accepts "0,5".
    let significant = if int_digits == "0" { 0 } else { int_digits.len() };
    if significant > spec.max_integer_digits() as usize {
        return Err(Rejection::new(ErrorKind::TooManyIntegerDigits)
            .with_var("MAX_INTEGER_DIGITS", spec.max_integer_digits())
            .with_var("PRECISION", spec.precision())
            .with_var("SCALE", spec.scale()));
    }

    let scale = spec.scale() as usize;
    let mut out = String::with_capacity(sign.len() + int_digits.len() + 1 + scale);
    out.push_str(sign);
    out.push_str(int_digits);
    if scale > 0 {
        out.push('.');
        out.push_str(&format!("{:0<width$}", frac_part, width = scale));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(raw: &str, precision: i32, scale: i32) -> String {
        parse_ui(Some(raw), precision, scale).unwrap().unwrap()
    }

    fn kind(raw: &str, precision: i32, scale: i32) -> ErrorKind {
        parse_ui(Some(raw), precision, scale).unwrap_err().kind()
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(parse_ui(None, 10, 2).unwrap(), None);
        assert_eq!(parse_ui(Some(""), 10, 2).unwrap(), None);
        assert_eq!(parse_ui(Some("   "), 10, 2).unwrap(), None);
        assert_eq!(parse_ui(Some("\t\n"), 10, 2).unwrap(), None);
    }

    #[test]
    fn test_empty_wins_over_invalid_precision() {
        assert_eq!(parse_ui(Some(" "), 0, 5).unwrap(), None);
    }

    #[test]
    fn test_basic_conversions() {
        assert_eq!(ok("1.234,56", 10, 2), "1234.56");
        assert_eq!(ok("1 234,56", 10, 2), "1234.56");
        assert_eq!(ok("1234,56", 10, 2), "1234.56");
        assert_eq!(ok("1234", 10, 2), "1234.00");
        assert_eq!(ok("1234", 10, 0), "1234");
        assert_eq!(ok("  42,5  ", 10, 3), "42.500");
        assert_eq!(ok("1.234.567,8", 12, 2), "1234567.80");
    }

    #[test]
    fn test_leading_and_trailing_comma() {
        assert_eq!(ok(",50", 10, 2), "0.50");
        assert_eq!(ok("50,", 10, 2), "50.00");
        assert_eq!(ok("-,5", 10, 2), "-0.50");
    }

    #[test]
    fn test_signs_are_kept() {
        assert_eq!(ok("-1.234,5", 10, 2), "-1234.50");
        assert_eq!(ok("+7", 10, 1), "+7.0");
    }

    #[test]
    fn test_leading_zeros_trimmed() {
        assert_eq!(ok("007", 10, 0), "7");
        assert_eq!(ok("000", 10, 2), "0.00");
        assert_eq!(ok("0,05", 10, 2), "0.05");
    }

    #[test]
    fn test_invalid_precision_or_scale() {
        assert_eq!(kind("1", 0, 0), ErrorKind::InvalidPrecision);
        assert_eq!(kind("1", 5, 6), ErrorKind::InvalidScale);
        assert_eq!(kind("1", 5, -1), ErrorKind::InvalidScale);
    }

    #[test]
    fn test_lone_sign() {
        assert_eq!(kind("-", 10, 2), ErrorKind::SignWithoutDigits);
        assert_eq!(kind(" + ", 10, 2), ErrorKind::SignWithoutDigits);
    }

    #[test]
    fn test_unsupported_chars() {
        assert_eq!(kind("12a", 10, 2), ErrorKind::UnsupportedChars);
        assert_eq!(kind("1\u{a0}234", 10, 2), ErrorKind::UnsupportedChars);
        assert_eq!(kind("1'234", 10, 2), ErrorKind::UnsupportedChars);
        assert_eq!(kind("--1", 10, 2), ErrorKind::UnsupportedChars);
        assert_eq!(kind("1e5", 10, 2), ErrorKind::UnsupportedChars);
    }

    #[test]
    fn test_nbsp_is_not_trimmed() {
        assert_eq!(kind("\u{a0}12", 10, 2), ErrorKind::UnsupportedChars);
    }

    #[test]
    fn test_multiple_commas() {
        assert_eq!(kind("1,2,3", 10, 2), ErrorKind::MultipleDecimalSeparators);
    }

    #[test]
    fn test_dot_decimal_rejected() {
        assert_eq!(kind("1234.56", 10, 2), ErrorKind::DotDecimalNotSupported);
        // a single dot group has the same shape and is not guessed either
        assert_eq!(kind("1.234", 10, 0), ErrorKind::DotDecimalNotSupported);
        // two dot groups are unambiguous grouping
        assert_eq!(ok("1.234.567", 10, 0), "1234567");
    }

    #[test]
    fn test_scale_zero_rejects_comma() {
        assert_eq!(kind("12,5", 10, 0), ErrorKind::DecimalsNotAllowedForScaleZero);
        assert_eq!(kind("12,", 10, 0), ErrorKind::DecimalsNotAllowedForScaleZero);
    }

    #[test]
    fn test_grouping_errors() {
        assert_eq!(kind("1.234 567,00", 12, 2), ErrorKind::MixedThousandsSeparators);
        assert_eq!(kind("12.34,00", 12, 2), ErrorKind::DotGroupingMalformed);
        assert_eq!(kind("1234.567,00", 12, 2), ErrorKind::DotGroupingMalformed);
        assert_eq!(kind("12 34", 12, 2), ErrorKind::SpaceGroupingMalformed);
        assert_eq!(kind("1  234", 12, 2), ErrorKind::SpaceGroupingMalformed);
        assert_eq!(kind(".", 12, 2), ErrorKind::DotGroupingMalformed);
    }

    #[test]
    fn test_fraction_errors() {
        assert_eq!(kind("1,2.5", 10, 2), ErrorKind::FractionMustBeDigits);
        assert_eq!(kind("1,2 5", 10, 2), ErrorKind::FractionMustBeDigits);
        assert_eq!(kind("1,234", 10, 2), ErrorKind::TooManyFractionDigits);
    }

    #[test]
    fn test_no_rounding() {
        let err = parse_ui(Some("0,125"), 10, 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooManyFractionDigits);
        assert_eq!(err.vars_map().get("SCALE").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_too_many_integer_digits() {
        assert_eq!(kind("123456", 5, 0), ErrorKind::TooManyIntegerDigits);
        assert_eq!(kind("1.000,00", 5, 2), ErrorKind::TooManyIntegerDigits);
        assert_eq!(ok("999", 5, 2), "999.00");
        // leading zeros do not count
        assert_eq!(ok("000999", 5, 2), "999.00");
    }

    #[test]
    fn test_scale_equals_precision() {
        assert_eq!(ok(",5", 2, 2), "0.50");
        assert_eq!(ok("0,99", 2, 2), "0.99");
        assert_eq!(kind("1,00", 2, 2), ErrorKind::TooManyIntegerDigits);
    }

    #[test]
    fn test_dot_decimal_shape() {
        assert!(is_dot_decimal_shape("1.5"));
        assert!(is_dot_decimal_shape("1234.567"));
        assert!(!is_dot_decimal_shape("1.234.567"));
        assert!(!is_dot_decimal_shape(".5"));
        assert!(!is_dot_decimal_shape("5."));
        assert!(!is_dot_decimal_shape("5"));
    }
}
