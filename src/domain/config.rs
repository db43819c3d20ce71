// ============================================================================
// Formatter Configuration
// Config-driven defaults for rendering and error message lookup
// ============================================================================

use super::separators::Separators;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Message catalog used when none is configured
pub const DEFAULT_CATALOG: &str = "validation";

/// Message namespace used when none is configured
pub const DEFAULT_NAMESPACE: &str = "number_format";

/// Configuration for a [`NumberFormatter`](crate::formatter::NumberFormatter)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatterConfig {
    /// Separators used by `render` when none are passed explicitly
    pub separators: Separators,

    /// Catalog passed to the text lookup for error messages
    pub catalog: String,

    /// Namespace passed to the text lookup for error messages
    pub namespace: String,
}

impl FormatterConfig {
    pub fn new(separators: Separators) -> Self {
        Self {
            separators,
            catalog: DEFAULT_CATALOG.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }

    /// Builder method: Set render separators
    pub fn with_separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }

    /// Builder method: Set message catalog
    pub fn with_catalog(mut self, catalog: impl Into<String>) -> Self {
        self.catalog = catalog.into();
        self
    }

    /// Builder method: Set message namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.catalog.trim().is_empty() {
            return Err("Catalog cannot be empty".to_string());
        }
        if self.namespace.trim().is_empty() {
            return Err("Namespace cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self::continental()
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl FormatterConfig {
    /// "1.234,56"
    pub fn continental() -> Self {
        Self::new(Separators::CONTINENTAL)
    }

    /// "1 234,56"
    pub fn space_grouped() -> Self {
        Self::new(Separators::SPACE_GROUPED)
    }

    /// "1234,56"
    pub fn plain() -> Self {
        Self::new(Separators::PLAIN)
    }

    /// "1234.56", for exports that expect the canonical shape
    pub fn database() -> Self {
        Self::new(Separators::DATABASE)
    }

    /// Space grouping with a dot decimal: "1 234.56"
    pub fn space_grouped_dot_decimal() -> Self {
        Self::new(Separators::SPACE_GROUPED_DOT_DECIMAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DecimalSeparator, ThousandsSeparator};

    #[test]
    fn test_default_config() {
        let config = FormatterConfig::default();
        assert_eq!(config.separators, Separators::CONTINENTAL);
        assert_eq!(config.catalog, DEFAULT_CATALOG);
        assert_eq!(config.namespace, DEFAULT_NAMESPACE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = FormatterConfig::plain()
            .with_catalog("forms")
            .with_namespace("invoice");

        assert_eq!(config.separators, Separators::PLAIN);
        assert_eq!(config.catalog, "forms");
        assert_eq!(config.namespace, "invoice");
    }

    #[test]
    fn test_validation() {
        let config = FormatterConfig::default().with_catalog("  ");
        assert!(config.validate().is_err());

        let config = FormatterConfig::default().with_namespace("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(
            FormatterConfig::space_grouped().separators.thousands(),
            ThousandsSeparator::Space
        );
        assert_eq!(
            FormatterConfig::database().separators.decimal(),
            DecimalSeparator::Dot
        );
        let s = FormatterConfig::space_grouped_dot_decimal().separators;
        assert_eq!(s.thousands(), ThousandsSeparator::Space);
        assert_eq!(s.decimal(), DecimalSeparator::Dot);
    }
}
