// ============================================================================
// Thousands Grouping
// Validation and insertion of 3-digit grouping separators
// ============================================================================

use super::errors::{ErrorKind, NumericResult, Rejection};

/// Check `^\d{1,3}(<sep>\d{3})*$`.
pub fn is_well_grouped(int_part: &str, sep: u8) -> bool {
    let mut groups = int_part.as_bytes().split(|&b| b == sep);

    let head_ok = match groups.next() {
        Some(head) => (1..=3).contains(&head.len()) && head.iter().all(u8::is_ascii_digit),
        None => false,
    };

    head_ok && groups.all(|g| g.len() == 3 && g.iter().all(u8::is_ascii_digit))
}

/// Validate the grouping of a UI integer part.
///
/// Dot and space grouping are each accepted on their own; mixing them is
/// always rejected, even when both would be well-formed individually.
pub fn validate_grouping(int_part: &str) -> NumericResult<()> {
    if int_part.is_empty() {
        return Err(Rejection::new(ErrorKind::MissingIntegerPart));
    }

    let has_dot = int_part.contains('.');
    let has_space = int_part.contains(' ');

    match (has_dot, has_space) {
        (true, true) => Err(Rejection::new(ErrorKind::MixedThousandsSeparators)),
        (true, false) if !is_well_grouped(int_part, b'.') => {
            Err(Rejection::new(ErrorKind::DotGroupingMalformed))
        }
        (false, true) if !is_well_grouped(int_part, b' ') => {
            Err(Rejection::new(ErrorKind::SpaceGroupingMalformed))
        }
        (false, false) if !int_part.bytes().all(|b| b.is_ascii_digit()) => {
            Err(Rejection::new(ErrorKind::IntegerMustBeDigits))
        }
        _ => Ok(()),
    }
}

/// Remove `.` and ` ` grouping separators.
pub fn strip_grouping(int_part: &str) -> String {
    int_part.chars().filter(|c| !matches!(c, '.' | ' ')).collect()
}

/// Insert `sep` every three digits from the right.
///
/// No-op for an empty separator or a run of three digits or fewer.
pub fn insert_grouping(digits: &str, sep: &str) -> String {
    if sep.is_empty() || digits.len() <= 3 {
        return digits.to_string();
    }

    let head = match digits.len() % 3 {
        0 => 3,
        n => n,
    };

    let mut out = String::with_capacity(digits.len() + (digits.len() / 3) * sep.len());
    out.push_str(&digits[..head]);
    for chunk in digits.as_bytes()[head..].chunks(3) {
        out.push_str(sep);
        out.extend(chunk.iter().map(|&b| b as char));
    }
    out
}

/// Left-trim zeros, keeping at least one digit.
pub fn trim_leading_zeros(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        if digits.is_empty() {
            digits
        } else {
            "0"
        }
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_grouped() {
        assert!(is_well_grouped("1", b'.'));
        assert!(is_well_grouped("123", b'.'));
        assert!(is_well_grouped("1.234", b'.'));
        assert!(is_well_grouped("12.345.678", b'.'));
        assert!(is_well_grouped("1 234 567", b' '));

        assert!(!is_well_grouped("", b'.'));
        assert!(!is_well_grouped("1234.567", b'.'));
        assert!(!is_well_grouped("1.23", b'.'));
        assert!(!is_well_grouped("1..234", b'.'));
        assert!(!is_well_grouped(".234", b'.'));
        assert!(!is_well_grouped("1.234.", b'.'));
        assert!(!is_well_grouped("1 2345", b' '));
    }

    #[test]
    fn test_validate_grouping_kinds() {
        assert!(validate_grouping("1234").is_ok());
        assert!(validate_grouping("1.234.567").is_ok());
        assert!(validate_grouping("1 234").is_ok());

        let kind = |s: &str| validate_grouping(s).unwrap_err().kind();
        assert_eq!(kind(""), ErrorKind::MissingIntegerPart);
        assert_eq!(kind("1.234 567"), ErrorKind::MixedThousandsSeparators);
        assert_eq!(kind("12.34"), ErrorKind::DotGroupingMalformed);
        assert_eq!(kind("12 34"), ErrorKind::SpaceGroupingMalformed);
        assert_eq!(kind("12a"), ErrorKind::IntegerMustBeDigits);
    }

    #[test]
    fn test_mixed_rejected_even_if_each_valid() {
        assert_eq!(
            validate_grouping("1.234 567").unwrap_err().kind(),
            ErrorKind::MixedThousandsSeparators
        );
        assert_eq!(
            validate_grouping("1 234.567").unwrap_err().kind(),
            ErrorKind::MixedThousandsSeparators
        );
    }

    #[test]
    fn test_insert_grouping() {
        assert_eq!(insert_grouping("1", "."), "1");
        assert_eq!(insert_grouping("123", "."), "123");
        assert_eq!(insert_grouping("1234", "."), "1.234");
        assert_eq!(insert_grouping("123456", " "), "123 456");
        assert_eq!(insert_grouping("1234567", "."), "1.234.567");
        assert_eq!(insert_grouping("1234567", ""), "1234567");
    }

    #[test]
    fn test_strip_and_trim() {
        assert_eq!(strip_grouping("1.234.567"), "1234567");
        assert_eq!(strip_grouping("1 234"), "1234");
        assert_eq!(trim_leading_zeros("000"), "0");
        assert_eq!(trim_leading_zeros("0012"), "12");
        assert_eq!(trim_leading_zeros("120"), "120");
        assert_eq!(trim_leading_zeros(""), "");
    }
}
