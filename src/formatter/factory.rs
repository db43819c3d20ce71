// ============================================================================
// Number Formatter Factory
// Creates formatters with validated configuration
// ============================================================================

use crate::domain::{FormatterConfig, Separators};
use crate::formatter::NumberFormatter;
use crate::interfaces::{substitute_vars, DefaultTextLookup, TextLookup};
use std::sync::Arc;

/// Creates a formatter from configuration
///
/// # Example
/// ```
/// use strict_decimal::prelude::*;
/// use strict_decimal::formatter::create_from_config;
/// use std::sync::Arc;
///
/// let formatter = create_from_config(FormatterConfig::space_grouped(), Arc::new(DefaultTextLookup)).unwrap();
/// assert_eq!(formatter.render(Some("1234.5"), 2).unwrap(), "1 234,50");
/// ```
pub fn create_from_config(
    config: FormatterConfig,
    text_lookup: Arc<dyn TextLookup>,
) -> Result<NumberFormatter, String> {
    config.validate()?;
    Ok(NumberFormatter::new(config, text_lookup))
}

/// Builder for creating formatters with fluent API
///
/// # Example
/// ```
/// use strict_decimal::formatter::NumberFormatterBuilder;
///
/// let formatter = NumberFormatterBuilder::new()
///     .separators(" ", ",")
///     .unwrap()
///     .catalog("forms")
///     .build()
///     .unwrap();
///
/// assert_eq!(formatter.render(Some("1234567"), 0).unwrap(), "1 234 567");
/// ```
pub struct NumberFormatterBuilder {
    config: FormatterConfig,
    text_lookup: Arc<dyn TextLookup>,
}

impl NumberFormatterBuilder {
    /// Create a new builder with continental defaults
    pub fn new() -> Self {
        Self {
            config: FormatterConfig::default(),
            text_lookup: Arc::new(DefaultTextLookup),
        }
    }

    // ========================================================================
    // Separator Configuration
    // ========================================================================

    /// Render with dot grouping and a decimal comma (default)
    pub fn continental(mut self) -> Self {
        self.config.separators = Separators::CONTINENTAL;
        self
    }

    /// Render with space grouping and a decimal comma
    pub fn space_grouped(mut self) -> Self {
        self.config.separators = Separators::SPACE_GROUPED;
        self
    }

    /// Render without grouping
    pub fn plain(mut self) -> Self {
        self.config.separators = Separators::PLAIN;
        self
    }

    /// Set render separators from their raw string forms.
    ///
    /// # Errors
    /// Returns the rejection's message when the pair is not allowed.
    pub fn separators(mut self, thousands_sep: &str, decimal_sep: &str) -> Result<Self, String> {
        self.config.separators = Separators::parse(thousands_sep, decimal_sep)
            .map_err(|r| substitute_vars(r.kind().default_text(), &r.vars_map()))?;
        Ok(self)
    }

    // ========================================================================
    // Message Configuration
    // ========================================================================

    /// Set message catalog
    pub fn catalog(mut self, catalog: impl Into<String>) -> Self {
        self.config.catalog = catalog.into();
        self
    }

    /// Set message namespace
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.namespace = namespace.into();
        self
    }

    /// Set the text lookup used for error messages
    pub fn text_lookup(mut self, text_lookup: Arc<dyn TextLookup>) -> Self {
        self.text_lookup = text_lookup;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the formatter
    pub fn build(self) -> Result<NumberFormatter, String> {
        create_from_config(self.config, self.text_lookup)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &FormatterConfig {
        &self.config
    }
}

impl Default for NumberFormatterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::CatalogTextLookup;
    use crate::numeric::ErrorKind;

    #[test]
    fn test_create_from_config() {
        let formatter = create_from_config(FormatterConfig::plain(), Arc::new(DefaultTextLookup)).unwrap();
        assert_eq!(formatter.render(Some("1234.5"), 1).unwrap(), "1234,5");
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let config = FormatterConfig::default().with_catalog("");
        assert!(create_from_config(config, Arc::new(DefaultTextLookup)).is_err());
    }

    #[test]
    fn test_builder_presets() {
        let f = NumberFormatterBuilder::new().space_grouped().build().unwrap();
        assert_eq!(f.config().separators, Separators::SPACE_GROUPED);

        let f = NumberFormatterBuilder::new().plain().continental().build().unwrap();
        assert_eq!(f.config().separators, Separators::CONTINENTAL);
    }

    #[test]
    fn test_builder_separators() {
        let builder = NumberFormatterBuilder::new().separators("", ".").unwrap();
        assert_eq!(builder.get_config().separators, Separators::DATABASE);

        let err = NumberFormatterBuilder::new().separators(".", ".").err().unwrap();
        assert_eq!(err, "Thousands and decimal separators must differ, both are \".\".");
        assert!(NumberFormatterBuilder::new().separators("_", ",").is_err());
    }

    #[test]
    fn test_builder_with_catalog() {
        let catalog = CatalogTextLookup::new();
        catalog.insert("forms", "price", "sign_without_digits", "Sign alone");

        let f = NumberFormatterBuilder::new()
            .catalog("forms")
            .namespace("price")
            .text_lookup(Arc::new(catalog))
            .build()
            .unwrap();

        let err = f.to_db(Some("+"), 10, 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SignWithoutDigits);
        assert_eq!(err.message(), "Sign alone");
    }
}
