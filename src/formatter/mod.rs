// ============================================================================
// Formatter Module
// The formatter service and its factory
// ============================================================================

pub mod factory;
mod number_formatter;

pub use factory::{create_from_config, NumberFormatterBuilder};
pub use number_formatter::NumberFormatter;
