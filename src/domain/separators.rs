// ============================================================================
// Render Separators
// Whitelisted thousands/decimal separator pair for DB -> UI rendering
// ============================================================================

use crate::numeric::{ErrorKind, NumericResult, Rejection};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Thousands grouping separator: none, dot or ASCII space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ThousandsSeparator {
    /// No grouping ("1234567")
    None,
    /// Dot grouping ("1.234.567")
    #[default]
    Dot,
    /// Space grouping ("1 234 567")
    Space,
}

impl ThousandsSeparator {
    pub const fn as_str(self) -> &'static str {
        match self {
            ThousandsSeparator::None => "",
            ThousandsSeparator::Dot => ".",
            ThousandsSeparator::Space => " ",
        }
    }

    /// Parse from its string form.
    ///
    /// # Errors
    /// `InvalidThousandsSep` for anything other than "", "." or " ".
    pub fn parse(s: &str) -> NumericResult<Self> {
        match s {
            "" => Ok(ThousandsSeparator::None),
            "." => Ok(ThousandsSeparator::Dot),
            " " => Ok(ThousandsSeparator::Space),
            other => Err(Rejection::new(ErrorKind::InvalidThousandsSep).with_var("SEPARATOR", other)),
        }
    }
}

/// Decimal separator: comma or dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DecimalSeparator {
    #[default]
    Comma,
    Dot,
}

impl DecimalSeparator {
    pub const fn as_str(self) -> &'static str {
        match self {
            DecimalSeparator::Comma => ",",
            DecimalSeparator::Dot => ".",
        }
    }

    /// Parse from its string form.
    ///
    /// # Errors
    /// `InvalidDecimalSep` for anything other than "," or ".".
    pub fn parse(s: &str) -> NumericResult<Self> {
        match s {
            "," => Ok(DecimalSeparator::Comma),
            "." => Ok(DecimalSeparator::Dot),
            other => Err(Rejection::new(ErrorKind::InvalidDecimalSep).with_var("SEPARATOR", other)),
        }
    }
}

/// A validated separator pair.
///
/// Invariant: a non-empty thousands separator differs from the decimal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSeparators", into = "RawSeparators"))]
pub struct Separators {
    thousands: ThousandsSeparator,
    decimal: DecimalSeparator,
}

impl Separators {
    /// Continental default: "1.234,56"
    pub const CONTINENTAL: Self = Self {
        thousands: ThousandsSeparator::Dot,
        decimal: DecimalSeparator::Comma,
    };

    /// Space grouping: "1 234,56"
    pub const SPACE_GROUPED: Self = Self {
        thousands: ThousandsSeparator::Space,
        decimal: DecimalSeparator::Comma,
    };

    /// No grouping: "1234,56"
    pub const PLAIN: Self = Self {
        thousands: ThousandsSeparator::None,
        decimal: DecimalSeparator::Comma,
    };

    /// Space grouping with a dot decimal: "1 234.56"
    pub const SPACE_GROUPED_DOT_DECIMAL: Self = Self {
        thousands: ThousandsSeparator::Space,
        decimal: DecimalSeparator::Dot,
    };

    /// Canonical DB shape: "1234.56"
    pub const DATABASE: Self = Self {
        thousands: ThousandsSeparator::None,
        decimal: DecimalSeparator::Dot,
    };

    /// Combine two separators.
    ///
    /// # Errors
    /// `SeparatorsMustDiffer` when both are the dot.
    pub fn new(thousands: ThousandsSeparator, decimal: DecimalSeparator) -> NumericResult<Self> {
        if thousands.as_str() == decimal.as_str() {
            return Err(Rejection::new(ErrorKind::SeparatorsMustDiffer)
                .with_var("SEPARATOR", thousands.as_str()));
        }
        Ok(Self { thousands, decimal })
    }

    /// Parse and validate a raw separator pair, thousands first.
    pub fn parse(thousands: &str, decimal: &str) -> NumericResult<Self> {
        let thousands = ThousandsSeparator::parse(thousands)?;
        let decimal = DecimalSeparator::parse(decimal)?;
        Self::new(thousands, decimal)
    }

    #[inline]
    pub const fn thousands(self) -> ThousandsSeparator {
        self.thousands
    }

    #[inline]
    pub const fn decimal(self) -> DecimalSeparator {
        self.decimal
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::CONTINENTAL
    }
}

impl fmt::Display for Separators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "thousands={:?} decimal={:?}",
            self.thousands.as_str(),
            self.decimal.as_str()
        )
    }
}

/// Wire shape for serde: plain strings, validated on the way in.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawSeparators {
    thousands: String,
    decimal: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSeparators> for Separators {
    type Error = Rejection;

    fn try_from(raw: RawSeparators) -> Result<Self, Self::Error> {
        Separators::parse(&raw.thousands, &raw.decimal)
    }
}

#[cfg(feature = "serde")]
impl From<Separators> for RawSeparators {
    fn from(s: Separators) -> Self {
        RawSeparators {
            thousands: s.thousands.as_str().to_string(),
            decimal: s.decimal.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_pairs() {
        assert_eq!(Separators::parse(".", ",").unwrap(), Separators::CONTINENTAL);
        assert_eq!(Separators::parse(" ", ",").unwrap(), Separators::SPACE_GROUPED);
        assert_eq!(Separators::parse("", ",").unwrap(), Separators::PLAIN);
        assert_eq!(Separators::parse("", ".").unwrap(), Separators::DATABASE);
        assert!(Separators::parse(" ", ".").is_ok());
    }

    #[test]
    fn test_parse_invalid_pairs() {
        let kind = |t: &str, d: &str| Separators::parse(t, d).unwrap_err().kind();
        assert_eq!(kind(",", ","), ErrorKind::InvalidThousandsSep);
        assert_eq!(kind("\u{a0}", ","), ErrorKind::InvalidThousandsSep);
        assert_eq!(kind("..", ","), ErrorKind::InvalidThousandsSep);
        assert_eq!(kind(".", ""), ErrorKind::InvalidDecimalSep);
        assert_eq!(kind(".", " "), ErrorKind::InvalidDecimalSep);
        assert_eq!(kind(".", "."), ErrorKind::SeparatorsMustDiffer);
    }

    #[test]
    fn test_thousands_checked_before_decimal() {
        assert_eq!(
            Separators::parse("x", "y").unwrap_err().kind(),
            ErrorKind::InvalidThousandsSep
        );
    }

    #[test]
    fn test_default_is_continental() {
        let s = Separators::default();
        assert_eq!(s.thousands(), ThousandsSeparator::Dot);
        assert_eq!(s.decimal(), DecimalSeparator::Comma);
    }
}
