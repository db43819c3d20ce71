// ============================================================================
// Strict Decimal Library
// Lossless conversion between continental UI numbers and DB decimal strings
// ============================================================================

//! # Strict Decimal
//!
//! Strict, lossless conversion between human-entered "continental" number
//! strings and canonical fixed-point decimal strings for exact-precision
//! storage (`DECIMAL(precision, scale)` columns).
//!
//! ## Features
//!
//! - **String-only**: digits are never parsed into floats or big numbers
//! - **No rounding**: excess fraction digits are rejected
//! - **No guessing**: comma is the only UI decimal separator; `1234.56` is refused
//! - **Typed errors**: every rejection has its own [`ErrorKind`] and a localized message
//! - **Pluggable i18n** through the [`TextLookup`](interfaces::TextLookup) trait
//!
//! ## Example
//!
//! ```rust
//! use strict_decimal::{from_db, to_db, ErrorKind};
//!
//! // UI -> DB
//! assert_eq!(to_db(Some("1.234,56"), 10, 2).unwrap().as_deref(), Some("1234.56"));
//! assert_eq!(to_db(Some(",50"), 10, 2).unwrap().as_deref(), Some("0.50"));
//! assert_eq!(to_db(Some("  "), 10, 2).unwrap(), None);
//!
//! // DB -> UI
//! assert_eq!(from_db(Some("1234.5"), 2, ".", ",").unwrap(), "1.234,50");
//!
//! // Rejections
//! let err = to_db(Some("1234.56"), 10, 2).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::DotDecimalNotSupported);
//! println!("{}", err); // localized message
//! ```

pub mod domain;
pub mod formatter;
pub mod interfaces;
pub mod numeric;
pub mod utils;

use domain::{Separators, DEFAULT_CATALOG, DEFAULT_NAMESPACE};
use interfaces::{DefaultTextLookup, TextLookup};
use numeric::{DecimalSpec, Rejection};

pub use numeric::{ErrorKind, ValidationError, ValidationResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        DecimalSeparator, FormatterConfig, Separators, ThousandsSeparator,
    };
    pub use crate::formatter::{create_from_config, NumberFormatter, NumberFormatterBuilder};
    pub use crate::interfaces::{
        CatalogTextLookup, DefaultTextLookup, LoggingTextLookup, TextLookup,
    };
    pub use crate::numeric::{DbDecimal, DecimalSpec, ErrorKind, ValidationError, ValidationResult};
    pub use crate::{from_db, to_db, validate_precision_scale, validate_separators};
}

// ============================================================================
// Free Functions (default, untranslated messages)
// ============================================================================

fn localize_default(rejection: Rejection) -> ValidationError {
    let kind = rejection.kind();
    let vars = rejection.vars_map();
    let message = DefaultTextLookup.lookup(
        kind.key(),
        DEFAULT_CATALOG,
        DEFAULT_NAMESPACE,
        kind.default_text(),
        &vars,
    );
    ValidationError::new(kind, message, vars)
}

/// Parse a UI number (`"1.234,56"`) into a canonical DB string (`"1234.56"`).
///
/// Blank or missing input yields `Ok(None)`. See [`NumberFormatter`](formatter::NumberFormatter)
/// for localized messages.
pub fn to_db(raw: Option<&str>, precision: i32, scale: i32) -> ValidationResult<Option<String>> {
    numeric::parse_ui(raw, precision, scale).map_err(localize_default)
}

/// Render a canonical DB string with the given separators.
///
/// Blank or missing input yields an empty string.
pub fn from_db(
    db: Option<&str>,
    scale: i32,
    thousands_sep: &str,
    decimal_sep: &str,
) -> ValidationResult<String> {
    numeric::render_db(db, scale, thousands_sep, decimal_sep).map_err(localize_default)
}

/// Validate a `DECIMAL(precision, scale)` pair.
pub fn validate_precision_scale(precision: i32, scale: i32) -> ValidationResult<DecimalSpec> {
    DecimalSpec::new(precision, scale).map_err(localize_default)
}

/// Validate a render separator pair, thousands first.
pub fn validate_separators(thousands_sep: &str, decimal_sep: &str) -> ValidationResult<Separators> {
    Separators::parse(thousands_sep, decimal_sep).map_err(localize_default)
}
