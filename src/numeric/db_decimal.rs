// ============================================================================
// Canonical DB Decimal
// Validated canonical decimal string with boundary conversion to rust_decimal
// ============================================================================

use super::errors::{ErrorKind, NumericResult, Rejection};
use super::ui_parse::{split_sign, TRIM_CHARS};
use std::fmt;
use std::str::FromStr;

/// A canonical DB decimal string: `^[+-]?\d+(\.\d+)?$`.
///
/// The text is stored as given (after trimming); nothing is normalized or
/// rounded. Use [`DbDecimal::to_decimal`] only at API boundaries where
/// arithmetic is needed.
///
/// # Example
/// ```
/// use strict_decimal::numeric::DbDecimal;
///
/// let d: DbDecimal = "-1234.50".parse().unwrap();
/// assert!(d.is_negative());
/// assert_eq!(d.integer_digits(), "1234");
/// assert_eq!(d.fraction_digits(), "50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DbDecimal(String);

impl DbDecimal {
    /// The canonical text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    fn body(&self) -> &str {
        split_sign(&self.0).1
    }

    /// Check if the value carries a leading `-`.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    /// Digits before the decimal point, without sign.
    pub fn integer_digits(&self) -> &str {
        let body = self.body();
        body.split_once('.').map_or(body, |(int, _)| int)
    }

    /// Digits after the decimal point; empty when there is none.
    pub fn fraction_digits(&self) -> &str {
        self.body().split_once('.').map_or("", |(_, frac)| frac)
    }

    /// Number of fractional digits.
    #[inline]
    pub fn scale(&self) -> usize {
        self.fraction_digits().len()
    }

    /// Convert to rust_decimal::Decimal.
    ///
    /// Intended for callers that need arithmetic on a stored value. The
    /// conversion is exact or fails; values beyond rust_decimal's 28-digit
    /// range are reported, not truncated.
    pub fn to_decimal(&self) -> Result<rust_decimal::Decimal, rust_decimal::Error> {
        rust_decimal::Decimal::from_str_exact(&self.0)
    }
}

impl FromStr for DbDecimal {
    type Err = Rejection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_matches(TRIM_CHARS);
        validate_db(trimmed)?;
        Ok(Self(trimmed.to_string()))
    }
}

/// Check the canonical shape, sign included.
pub(crate) fn validate_db(trimmed: &str) -> NumericResult<()> {
    let (_, body) = split_sign(trimmed);
    if body.is_empty() {
        let kind = if trimmed.is_empty() {
            ErrorKind::DbInvalidFormat
        } else {
            ErrorKind::DbSignWithoutDigits
        };
        return Err(Rejection::new(kind).with_var("VALUE", trimmed));
    }

    let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    let valid = match body.split_once('.') {
        Some((int, frac)) => all_digits(int) && all_digits(frac),
        None => all_digits(body),
    };
    if !valid {
        return Err(Rejection::new(ErrorKind::DbInvalidFormat).with_var("VALUE", trimmed));
    }

    Ok(())
}

impl TryFrom<String> for DbDecimal {
    type Error = Rejection;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl AsRef<str> for DbDecimal {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DbDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DbDecimal> for String {
    fn from(d: DbDecimal) -> Self {
        d.0
    }
}
