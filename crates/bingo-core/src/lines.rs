//! Win Patterns
//!
//! The 12 fixed 5-cell lines and first-match detection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Number of win patterns
pub const LINE_COUNT: usize = 12;

/// Fixed enumeration order: rows 0-4, columns 0-4, then the two
/// diagonals. Detection reports the first match in this order.
pub const WIN_LINES: [[u8; 5]; LINE_COUNT] = [
    // Rows
    [0, 1, 2, 3, 4],
    [5, 6, 7, 8, 9],
    [10, 11, 12, 13, 14],
    [15, 16, 17, 18, 19],
    [20, 21, 22, 23, 24],
    // Columns
    [0, 5, 10, 15, 20],
    [1, 6, 11, 16, 21],
    [2, 7, 12, 17, 22],
    [3, 8, 13, 18, 23],
    [4, 9, 14, 19, 24],
    // Diagonals
    [0, 6, 12, 18, 24],
    [4, 8, 12, 16, 20],
];

/// A matched win pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    /// Position in the fixed enumeration order
    pub index: u8,
    pub cells: [u8; 5],
}

impl WinLine {
    /// Human label for the banner ("Row 1", "Column 3", "Diagonal")
    pub fn label(&self) -> String {
        match self.index {
            0..=4 => format!("Row {}", self.index + 1),
            5..=9 => format!("Column {}", self.index - 4),
            _ => "Diagonal".to_string(),
        }
    }

    pub fn contains(&self, cell: u8) -> bool {
        self.cells.contains(&cell)
    }
}

/// First fully covered pattern, or `None`. Extra simultaneous lines
/// are deliberately ignored.
pub fn find_win(marked: &BTreeSet<u8>) -> Option<WinLine> {
    WIN_LINES
        .iter()
        .enumerate()
        .find(|(_, cells)| cells.iter().all(|c| marked.contains(c)))
        .map(|(index, cells)| WinLine {
            index: index as u8,
            cells: *cells,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(cells: &[u8]) -> BTreeSet<u8> {
        cells.iter().copied().collect()
    }

    #[test]
    fn no_win_on_partial_line() {
        assert_eq!(find_win(&marked(&[0, 1, 2, 3])), None);
    }

    #[test]
    fn detects_each_row_column_and_diagonal() {
        for (index, cells) in WIN_LINES.iter().enumerate() {
            let hit = find_win(&marked(cells)).expect("full line should match");
            assert_eq!(hit.index, index as u8);
            assert_eq!(hit.cells, *cells);
        }
    }

    #[test]
    fn first_match_wins_enumeration_order() {
        // Row 0 and column 0 both covered: row 0 is reported
        let mut cells = marked(&[0, 1, 2, 3, 4]);
        cells.extend([5, 10, 15, 20]);
        let hit = find_win(&cells).unwrap();
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn full_board_reports_row_zero() {
        let all = marked(&(0..25).collect::<Vec<u8>>());
        let hit = find_win(&all).unwrap();
        assert_eq!(hit.index, 0);
    }

    #[test]
    fn labels() {
        assert_eq!(find_win(&marked(&[0, 1, 2, 3, 4])).unwrap().label(), "Row 1");
        assert_eq!(
            find_win(&marked(&[1, 6, 11, 16, 21])).unwrap().label(),
            "Column 2"
        );
        assert_eq!(
            find_win(&marked(&[0, 6, 12, 18, 24])).unwrap().label(),
            "Diagonal"
        );
    }
}
