// ============================================================================
// Domain Module
// Separator whitelists and formatter configuration
// ============================================================================

pub mod config;
pub mod separators;

pub use config::{FormatterConfig, DEFAULT_CATALOG, DEFAULT_NAMESPACE};
pub use separators::{DecimalSeparator, Separators, ThousandsSeparator};
