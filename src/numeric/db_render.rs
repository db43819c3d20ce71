// ============================================================================
// DB -> UI Rendering
// Strict rendering of canonical DB decimal strings for display
// ============================================================================

use super::db_decimal::validate_db;
use super::errors::{ErrorKind, NumericResult, Rejection};
use super::grouping::{insert_grouping, trim_leading_zeros};
use super::ui_parse::{split_sign, TRIM_CHARS};
use crate::domain::Separators;

/// Render a canonical DB decimal string with the given separators.
///
/// Returns an empty string for a missing or blank input. The fraction is
/// zero-padded to `scale` digits; a longer fraction is rejected, never rounded.
///
/// # Examples
/// ```
/// use strict_decimal::numeric::render_db;
///
/// assert_eq!(render_db(Some("1234.5"), 2, ".", ",").unwrap(), "1.234,50");
/// assert_eq!(render_db(None, 2, ".", ",").unwrap(), "");
/// ```
pub fn render_db(
    db: Option<&str>,
    scale: i32,
    thousands_sep: &str,
    decimal_sep: &str,
) -> NumericResult<String> {
    let trimmed = match db {
        Some(s) => s.trim_matches(TRIM_CHARS),
        None => return Ok(String::new()),
    };
    if trimmed.is_empty() {
        return Ok(String::new());
    }

    if scale < 0 {
        return Err(Rejection::new(ErrorKind::InvalidScaleFromDb).with_var("SCALE", scale));
    }

    let separators = Separators::parse(thousands_sep, decimal_sep)?;
    render_db_with(trimmed, scale.unsigned_abs(), separators)
}

/// Render an already-trimmed, non-empty DB string with validated separators.
pub fn render_db_with(trimmed: &str, scale: u32, separators: Separators) -> NumericResult<String> {
    validate_db(trimmed)?;
    let (sign, body) = split_sign(trimmed);

    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    let int_digits = trim_leading_zeros(int_part);

    let scale = scale as usize;
    if frac_part.len() > scale {
        return Err(Rejection::new(ErrorKind::DbTooManyFractionDigits).with_var("SCALE", scale));
    }

    let grouped = insert_grouping(int_digits, separators.thousands().as_str());

    let mut out = String::with_capacity(sign.len() + grouped.len() + 1 + scale);
    out.push_str(sign);
    out.push_str(&grouped);
    if scale > 0 {
        out.push_str(separators.decimal().as_str());
        out.push_str(&format!("{:0<width$}", frac_part, width = scale));
    }

    Ok(out)
}
