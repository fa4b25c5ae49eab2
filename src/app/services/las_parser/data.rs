//! Numeric data row tokenization
//!
//! Data-section lines are split on runs of whitespace and each token is
//! parsed with leading-prefix float semantics, so a unit glued to a reading
//! (`8665.0FT`, `2.41g/cc`) still yields its number. A token with no numeric
//! prefix becomes `f64::NAN` at its position; only a NaN *leading* token
//! drops the whole row. Row width is not checked against the declared curve
//! count.

use crate::constants::parse_leading_float;

/// Tokenize one data-section line into a numeric row
///
/// Returns `None` when the row must be dropped: no tokens, or a leading
/// token with no usable numeric prefix.
pub fn parse_data_row(line: &str) -> Option<Vec<f64>> {
    let values: Vec<f64> = line
        .split_whitespace()
        .map(|token| parse_leading_float(token).unwrap_or(f64::NAN))
        .collect();

    match values.first() {
        Some(first) if !first.is_nan() => Some(values),
        _ => None,
    }
}
