//! Source line accounting.
//!
//! Data rows are addressed by their zero-based index in the record set, but
//! diagnostics must point at the line of the input file. Between the two
//! sit the column-name row, any extra header lines the caller skipped, and the
//! switch from 0-based to 1-based counting.

use serde::{Deserialize, Serialize};

/// Lines added to every row index regardless of configuration: one for the
/// column-name row, one for 1-based line numbering.
pub const STRUCTURAL_OFFSET: usize = 2;

/// Map a zero-based row index to its 1-based source line.
pub fn line_of(row_index: usize, header_offset: usize) -> usize {
    row_index + header_offset + STRUCTURAL_OFFSET
}

/// Line mapping fixed for one validation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineLocator {
    header_offset: usize,
}

impl LineLocator {
    pub fn new(header_offset: usize) -> Self {
        Self { header_offset }
    }

    pub fn header_offset(&self) -> usize {
        self.header_offset
    }

    pub fn line_of(&self, row_index: usize) -> usize {
        line_of(row_index, self.header_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_row_without_offset_is_line_two() {
        assert_eq!(LineLocator::default().line_of(0), 2);
    }

    #[test]
    fn header_offset_shifts_lines() {
        assert_eq!(LineLocator::new(1).line_of(0), 3);
        assert_eq!(line_of(4, 3), 9);
    }
}
