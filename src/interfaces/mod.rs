// ============================================================================
// Interfaces Module
// Contains collaborator contracts and their stock implementations
// ============================================================================

mod catalog;
mod text_lookup;

pub use catalog::CatalogTextLookup;
pub use text_lookup::{substitute_vars, DefaultTextLookup, LoggingTextLookup, TextLookup};
