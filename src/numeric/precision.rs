// ============================================================================
// Precision / Scale
// Validated DECIMAL(precision, scale) target description
// ============================================================================

use super::errors::{ErrorKind, NumericResult, Rejection};
use std::fmt;

/// A validated fixed-point target, as in a `DECIMAL(precision, scale)` column.
///
/// Invariant: `precision >= 1` and `scale <= precision`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalSpec {
    precision: u32,
    scale: u32,
}

impl DecimalSpec {
    /// Validate a precision/scale pair.
    ///
    /// Signed inputs are accepted so negative values reach the check and are
    /// reported instead of being unrepresentable.
    ///
    /// # Errors
    /// - `InvalidPrecision` if `precision < 1`
    /// - `InvalidScale` if `scale` is outside `[0, precision]`
    pub fn new(precision: i32, scale: i32) -> NumericResult<Self> {
        if precision < 1 {
            return Err(Rejection::new(ErrorKind::InvalidPrecision).with_var("PRECISION", precision));
        }
        if scale < 0 || scale > precision {
            return Err(Rejection::new(ErrorKind::InvalidScale)
                .with_var("SCALE", scale)
                .with_var("PRECISION", precision));
        }

        Ok(Self {
            precision: precision.unsigned_abs(),
            scale: scale.unsigned_abs(),
        })
    }

    #[inline]
    pub const fn precision(self) -> u32 {
        self.precision
    }

    #[inline]
    pub const fn scale(self) -> u32 {
        self.scale
    }

    /// Number of digits allowed before the decimal point.
    #[inline]
    pub const fn max_integer_digits(self) -> u32 {
        self.precision - self.scale
    }
}

impl fmt::Display for DecimalSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DECIMAL({}, {})", self.precision, self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_precision_scale() {
        let spec = DecimalSpec::new(10, 2).unwrap();
        assert_eq!(spec.precision(), 10);
        assert_eq!(spec.scale(), 2);
        assert_eq!(spec.max_integer_digits(), 8);
        assert_eq!(spec.to_string(), "DECIMAL(10, 2)");
    }

    #[test]
    fn test_scale_equal_to_precision() {
        let spec = DecimalSpec::new(4, 4).unwrap();
        assert_eq!(spec.max_integer_digits(), 0);
    }

    #[test]
    fn test_invalid_precision() {
        assert_eq!(
            DecimalSpec::new(0, 0).unwrap_err().kind(),
            ErrorKind::InvalidPrecision
        );
        assert_eq!(
            DecimalSpec::new(-3, 0).unwrap_err().kind(),
            ErrorKind::InvalidPrecision
        );
    }

    #[test]
    fn test_invalid_scale() {
        let err = DecimalSpec::new(5, 6).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidScale);
        assert_eq!(err.vars_map().get("SCALE").map(String::as_str), Some("6"));

        assert_eq!(
            DecimalSpec::new(5, -1).unwrap_err().kind(),
            ErrorKind::InvalidScale
        );
    }

    #[test]
    fn test_precision_checked_before_scale() {
        assert_eq!(
            DecimalSpec::new(0, -1).unwrap_err().kind(),
            ErrorKind::InvalidPrecision
        );
    }
}
