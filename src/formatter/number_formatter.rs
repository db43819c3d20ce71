// ============================================================================
// Number Formatter
// Stateless service turning UI and DB decimal strings into each other
// ============================================================================

use crate::domain::{FormatterConfig, Separators};
use crate::interfaces::{DefaultTextLookup, TextLookup};
use crate::numeric::{
    parse_ui, render_db, render_db_with, DbDecimal, DecimalSpec, Rejection, ValidationError,
    ValidationResult,
};
use std::fmt;
use std::sync::Arc;

/// Strict decimal string formatter.
///
/// Holds no per-call state: every method is a pure function of its inputs,
/// the configured separators and the text lookup. Safe to share across
/// threads behind an `Arc` or by cloning.
#[derive(Clone)]
pub struct NumberFormatter {
    /// Formatter configuration (render separators, message catalog)
    config: FormatterConfig,

    /// Text provider for localized error messages
    text_lookup: Arc<dyn TextLookup>,
}

impl NumberFormatter {
    /// Create a new formatter
    pub fn new(config: FormatterConfig, text_lookup: Arc<dyn TextLookup>) -> Self {
        Self {
            config,
            text_lookup,
        }
    }

    /// Formatter with continental defaults and untranslated messages
    pub fn with_defaults() -> Self {
        Self::new(FormatterConfig::default(), Arc::new(DefaultTextLookup))
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Parse a UI number into a canonical DB string for `DECIMAL(precision, scale)`.
    ///
    /// Blank input yields `Ok(None)`.
    pub fn to_db(
        &self,
        raw: Option<&str>,
        precision: i32,
        scale: i32,
    ) -> ValidationResult<Option<String>> {
        parse_ui(raw, precision, scale).map_err(|r| self.localize(r))
    }

    /// Like [`to_db`](Self::to_db), returning a typed value.
    pub fn to_db_decimal(
        &self,
        raw: Option<&str>,
        precision: i32,
        scale: i32,
    ) -> ValidationResult<Option<DbDecimal>> {
        let parsed = self.to_db(raw, precision, scale)?;
        parsed
            .map(|s| s.parse::<DbDecimal>())
            .transpose()
            .map_err(|r| self.localize(r))
    }

    /// Render a canonical DB string with explicit separators.
    ///
    /// Blank input yields an empty string.
    pub fn from_db(
        &self,
        db: Option<&str>,
        scale: i32,
        thousands_sep: &str,
        decimal_sep: &str,
    ) -> ValidationResult<String> {
        render_db(db, scale, thousands_sep, decimal_sep).map_err(|r| self.localize(r))
    }

    /// Render a canonical DB string with the configured separators.
    pub fn render(&self, db: Option<&str>, scale: i32) -> ValidationResult<String> {
        let separators = self.config.separators;
        self.from_db(
            db,
            scale,
            separators.thousands().as_str(),
            separators.decimal().as_str(),
        )
    }

    /// Render a typed DB value with the configured separators.
    pub fn render_decimal(&self, value: &DbDecimal, spec: DecimalSpec) -> ValidationResult<String> {
        render_db_with(value.as_str(), spec.scale(), self.config.separators)
            .map_err(|r| self.localize(r))
    }

    // ========================================================================
    // Validation Helpers
    // ========================================================================

    /// Validate a precision/scale pair.
    pub fn validate_precision_scale(&self, precision: i32, scale: i32) -> ValidationResult<DecimalSpec> {
        DecimalSpec::new(precision, scale).map_err(|r| self.localize(r))
    }

    /// Validate a raw separator pair.
    pub fn validate_separators(&self, thousands_sep: &str, decimal_sep: &str) -> ValidationResult<Separators> {
        Separators::parse(thousands_sep, decimal_sep).map_err(|r| self.localize(r))
    }

    /// Turn a rejection into a user-facing error through the text lookup.
    pub fn localize(&self, rejection: Rejection) -> ValidationError {
        let kind = rejection.kind();
        let vars = rejection.vars_map();
        let message = self.text_lookup.lookup(
            kind.key(),
            &self.config.catalog,
            &self.config.namespace,
            kind.default_text(),
            &vars,
        );
        ValidationError::new(kind, message, vars)
    }
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for NumberFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberFormatter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
