// ============================================================================
// Utilities Module
// Helpers for hosts embedding the formatter
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::{init_tracing, init_tracing_with, DEFAULT_FILTER};
