//! Multi-value cell decomposition.
//!
//! Cells of multi-value attributes hold several items joined by a `*`
//! surrounded by whitespace, e.g. `audio * video`.

use std::sync::LazyLock;

use regex::Regex;

static MULTI_VALUE_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\*\s").expect("Invalid multi-value delimiter regex"));

/// Returns true if the cell contains the multi-value delimiter.
pub fn is_multi_value(cell: &str) -> bool {
    MULTI_VALUE_DELIMITER.is_match(cell)
}

/// Split a cell into its trimmed items.
///
/// A cell without the delimiter yields a single item: the trimmed cell.
pub fn split_multi_value(cell: &str) -> Vec<&str> {
    if !is_multi_value(cell) {
        return vec![cell.trim()];
    }
    MULTI_VALUE_DELIMITER.split(cell).map(str::trim).collect()
}
