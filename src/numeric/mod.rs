// ============================================================================
// Numeric Module
// Strict string-level conversion between UI and DB decimal representations
// ============================================================================
//
// This module provides:
// - parse_ui: UI string ("1.234,56") -> canonical DB string ("1234.56")
// - render_db: canonical DB string -> UI string with chosen separators
// - DecimalSpec: validated DECIMAL(precision, scale) target
// - DbDecimal: validated canonical DB string
// - ErrorKind / Rejection / ValidationError: the rejection taxonomy
//
// Design principles:
// - No floating-point or numeric parsing; digits are handled as text
// - No rounding: excess fraction digits are rejected
// - First failing check wins, every check has its own ErrorKind
// - Stateless and side-effect free

mod db_decimal;
mod db_render;
mod errors;
mod grouping;
mod precision;
mod ui_parse;

pub use db_decimal::DbDecimal;
pub use db_render::{render_db, render_db_with};
pub use errors::{ErrorKind, NumericResult, Rejection, ValidationError, ValidationResult};
pub use grouping::{insert_grouping, is_well_grouped, validate_grouping};
pub use precision::DecimalSpec;
pub use ui_parse::{parse_ui, parse_ui_with_spec};
