// ============================================================================
// Numeric Errors
// Validation error taxonomy for UI <-> DB decimal string conversion
// ============================================================================

use std::collections::HashMap;
use std::fmt;

/// Every way a conversion can be rejected.
///
/// Each kind maps to exactly one check in the conversion pipeline and has a
/// stable machine-readable key (see [`ErrorKind::key`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// precision < 1
    InvalidPrecision,
    /// scale outside [0, precision]
    InvalidScale,
    /// Lone sign with no digits after it
    SignWithoutDigits,
    /// Character outside `[0-9,. ]`
    UnsupportedChars,
    /// More than one comma
    MultipleDecimalSeparators,
    /// Bare `123.45` shape without a comma
    DotDecimalNotSupported,
    /// Comma present while scale is 0
    DecimalsNotAllowedForScaleZero,
    /// Integer part empty before grouping validation
    MissingIntegerPart,
    /// Integer part empty after stripping grouping separators
    MissingIntegerDigits,
    /// Both `.` and ` ` used as grouping
    MixedThousandsSeparators,
    /// Dot grouping not in 3-digit chunks
    DotGroupingMalformed,
    /// Space grouping not in 3-digit chunks
    SpaceGroupingMalformed,
    /// Ungrouped integer part contains a non-digit
    IntegerMustBeDigits,
    /// Fraction part contains a non-digit
    FractionMustBeDigits,
    /// Fraction longer than scale
    TooManyFractionDigits,
    /// Integer digits exceed precision - scale
    TooManyIntegerDigits,
    /// from_db scale < 0
    InvalidScaleFromDb,
    /// from_db lone sign
    DbSignWithoutDigits,
    /// from_db input is not `\d+(\.\d+)?`
    DbInvalidFormat,
    /// from_db fraction longer than the requested scale
    DbTooManyFractionDigits,
    /// Thousands separator not one of "", ".", " "
    InvalidThousandsSep,
    /// Decimal separator not one of ",", "."
    InvalidDecimalSep,
    /// Thousands and decimal separator are the same character
    SeparatorsMustDiffer,
}

impl ErrorKind {
    /// All kinds, in pipeline order.
    pub const ALL: [ErrorKind; 23] = [
        ErrorKind::InvalidPrecision,
        ErrorKind::InvalidScale,
        ErrorKind::SignWithoutDigits,
        ErrorKind::UnsupportedChars,
        ErrorKind::MultipleDecimalSeparators,
        ErrorKind::DotDecimalNotSupported,
        ErrorKind::DecimalsNotAllowedForScaleZero,
        ErrorKind::MissingIntegerPart,
        ErrorKind::MissingIntegerDigits,
        ErrorKind::MixedThousandsSeparators,
        ErrorKind::DotGroupingMalformed,
        ErrorKind::SpaceGroupingMalformed,
        ErrorKind::IntegerMustBeDigits,
        ErrorKind::FractionMustBeDigits,
        ErrorKind::TooManyFractionDigits,
        ErrorKind::TooManyIntegerDigits,
        ErrorKind::InvalidScaleFromDb,
        ErrorKind::DbSignWithoutDigits,
        ErrorKind::DbInvalidFormat,
        ErrorKind::DbTooManyFractionDigits,
        ErrorKind::InvalidThousandsSep,
        ErrorKind::InvalidDecimalSep,
        ErrorKind::SeparatorsMustDiffer,
    ];

    /// Stable lookup key used for message catalogs.
    pub const fn key(self) -> &'static str {
        match self {
            ErrorKind::InvalidPrecision => "invalid_precision",
            ErrorKind::InvalidScale => "invalid_scale",
            ErrorKind::SignWithoutDigits => "sign_without_digits",
            ErrorKind::UnsupportedChars => "unsupported_chars",
            ErrorKind::MultipleDecimalSeparators => "multiple_decimal_separators",
            ErrorKind::DotDecimalNotSupported => "dot_decimal_not_supported",
            ErrorKind::DecimalsNotAllowedForScaleZero => "decimals_not_allowed_for_scale_zero",
            ErrorKind::MissingIntegerPart => "missing_integer_part",
            ErrorKind::MissingIntegerDigits => "missing_integer_digits",
            ErrorKind::MixedThousandsSeparators => "mixed_thousands_separators",
            ErrorKind::DotGroupingMalformed => "dot_grouping_malformed",
            ErrorKind::SpaceGroupingMalformed => "space_grouping_malformed",
            ErrorKind::IntegerMustBeDigits => "integer_must_be_digits",
            ErrorKind::FractionMustBeDigits => "fraction_must_be_digits",
            ErrorKind::TooManyFractionDigits => "too_many_fraction_digits",
            ErrorKind::TooManyIntegerDigits => "too_many_integer_digits",
            ErrorKind::InvalidScaleFromDb => "invalid_scale_from_db",
            ErrorKind::DbSignWithoutDigits => "db_sign_without_digits",
            ErrorKind::DbInvalidFormat => "db_invalid_format",
            ErrorKind::DbTooManyFractionDigits => "db_too_many_fraction_digits",
            ErrorKind::InvalidThousandsSep => "invalid_thousands_sep",
            ErrorKind::InvalidDecimalSep => "invalid_decimal_sep",
            ErrorKind::SeparatorsMustDiffer => "separators_must_differ",
        }
    }

    /// English fallback text, with `%PLACEHOLDER%` variables.
    pub const fn default_text(self) -> &'static str {
        match self {
            ErrorKind::InvalidPrecision => "Precision must be at least 1, got %PRECISION%.",
            ErrorKind::InvalidScale => "Scale must be between 0 and %PRECISION%, got %SCALE%.",
            ErrorKind::SignWithoutDigits => "A sign must be followed by digits.",
            ErrorKind::UnsupportedChars => {
                "The number \"%VALUE%\" contains unsupported characters. Use digits, a comma for decimals and a dot or space for thousands."
            },
            ErrorKind::MultipleDecimalSeparators => "Only one decimal comma is allowed.",
            ErrorKind::DotDecimalNotSupported => {
                "A dot cannot be used as the decimal separator. Use a comma instead."
            },
            ErrorKind::DecimalsNotAllowedForScaleZero => "Decimals are not allowed for this value.",
            ErrorKind::MissingIntegerPart => "The integer part is missing.",
            ErrorKind::MissingIntegerDigits => "The integer part contains no digits.",
            ErrorKind::MixedThousandsSeparators => {
                "Dots and spaces cannot both be used as thousands separators."
            },
            ErrorKind::DotGroupingMalformed => {
                "Thousands separated with dots must be in groups of three digits."
            },
            ErrorKind::SpaceGroupingMalformed => {
                "Thousands separated with spaces must be in groups of three digits."
            },
            ErrorKind::IntegerMustBeDigits => "The integer part may only contain digits.",
            ErrorKind::FractionMustBeDigits => "The decimal part may only contain digits.",
            ErrorKind::TooManyFractionDigits => "At most %SCALE% decimal places are allowed.",
            ErrorKind::TooManyIntegerDigits => {
                "At most %MAX_INTEGER_DIGITS% digits are allowed before the decimal separator."
            },
            ErrorKind::InvalidScaleFromDb => "Scale must not be negative, got %SCALE%.",
            ErrorKind::DbSignWithoutDigits => "The stored value has a sign but no digits.",
            ErrorKind::DbInvalidFormat => "The stored value \"%VALUE%\" is not a valid decimal.",
            ErrorKind::DbTooManyFractionDigits => {
                "The stored value has more than %SCALE% decimal places."
            },
            ErrorKind::InvalidThousandsSep => "Unsupported thousands separator \"%SEPARATOR%\".",
            ErrorKind::InvalidDecimalSep => "Unsupported decimal separator \"%SEPARATOR%\".",
            ErrorKind::SeparatorsMustDiffer => {
                "Thousands and decimal separators must differ, both are \"%SEPARATOR%\"."
            },
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ============================================================================
// Rejection (pure core)
// ============================================================================

/// A failed check, before any message text has been produced.
///
/// The conversion core returns this; the service layer turns it into a
/// [`ValidationError`] through a text lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    kind: ErrorKind,
    vars: Vec<(&'static str, String)>,
}

impl Rejection {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            vars: Vec::new(),
        }
    }

    pub fn with_var(mut self, name: &'static str, value: impl ToString) -> Self {
        self.vars.push((name, value.to_string()));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn vars(&self) -> &[(&'static str, String)] {
        &self.vars
    }

    /// Variables as an owned map, the shape a text lookup consumes.
    pub fn vars_map(&self) -> HashMap<String, String> {
        self.vars
            .iter()
            .map(|(name, value)| ((*name).to_string(), value.clone()))
            .collect()
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for Rejection {}

/// Result type alias for the pure conversion core
pub type NumericResult<T> = Result<T, Rejection>;

// ============================================================================
// ValidationError (public surface)
// ============================================================================

/// A rejected conversion with its localized, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    kind: ErrorKind,
    message: String,
    vars: HashMap<String, String>,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, vars: HashMap<String, String>) -> Self {
        Self {
            kind,
            message: message.into(),
            vars,
        }
    }

    /// Stable machine-readable kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Localized message, safe to show verbatim.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Placeholder values used to build the message.
    pub fn vars(&self) -> &HashMap<String, String> {
        &self.vars
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Result type alias for the public conversion functions
pub type ValidationResult<T> = Result<T, ValidationError>;
