//! Bingo Board Model
//!
//! Board generation and marked-cell state.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::lines::{find_win, WinLine};

/// Cells per side of a board
pub const SIDE: usize = 5;
/// Total cells per board
pub const CELL_COUNT: usize = SIDE * SIDE;
/// Index of the free center cell (row 2, column 2)
pub const FREE_INDEX: u8 = 12;
/// Numbers per column range (B 1-15, I 16-30, N 31-45, G 46-60, O 61-75)
pub const COLUMN_SPAN: u8 = 15;
/// Number of boards in the fixed pool
pub const POOL_SIZE: u32 = 10;
/// Column letters for headers
pub const COLUMN_LETTERS: [char; SIDE] = ['B', 'I', 'N', 'G', 'O'];

/// One cell of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// The pre-marked center cell
    Free,
    /// A regular numbered cell
    Number(u8),
}

/// One bingo card: 25 cells, marked state, and a running score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: u32,
    /// Row-major 5x5 layout, `cells[row * 5 + col]`
    pub cells: Vec<Cell>,
    /// Indices the player has covered; always contains `FREE_INDEX`
    pub marked: BTreeSet<u8>,
    pub score: u32,
    pub last_updated_ms: f64,
}

impl Board {
    /// Generate one board. Each column draws 5 distinct numbers from
    /// its 15-number range, sorted ascending top-to-bottom.
    pub fn generate(id: u32, rng: &mut impl Rng) -> Self {
        let mut cells = vec![Cell::Free; CELL_COUNT];
        for col in 0..SIDE {
            let low = col as u8 * COLUMN_SPAN + 1;
            let mut pool: Vec<u8> = (low..low + COLUMN_SPAN).collect();
            pool.shuffle(rng);
            let mut picks: Vec<u8> = pool[..SIDE].to_vec();
            picks.sort_unstable();
            for (row, n) in picks.into_iter().enumerate() {
                cells[row * SIDE + col] = Cell::Number(n);
            }
        }
        cells[FREE_INDEX as usize] = Cell::Free;

        let mut marked = BTreeSet::new();
        marked.insert(FREE_INDEX);

        Self {
            id,
            cells,
            marked,
            score: 0,
            last_updated_ms: 0.0,
        }
    }

    /// Generate the whole fixed pool, ids `1..=POOL_SIZE`
    pub fn generate_pool(rng: &mut impl Rng) -> Vec<Self> {
        (1..=POOL_SIZE).map(|id| Self::generate(id, rng)).collect()
    }

    pub fn cell(&self, index: u8) -> Option<Cell> {
        self.cells.get(index as usize).copied()
    }

    pub fn is_marked(&self, index: u8) -> bool {
        self.marked.contains(&index)
    }

    /// Toggle a cell. The free cell and out-of-range indices are
    /// ignored. Returns the new marked status, or `None` if the
    /// toggle was rejected.
    pub fn toggle(&mut self, index: u8, now_ms: f64) -> Option<bool> {
        if index as usize >= CELL_COUNT || index == FREE_INDEX {
            return None;
        }
        let now_marked = if self.marked.remove(&index) {
            false
        } else {
            self.marked.insert(index);
            true
        };
        self.last_updated_ms = now_ms;
        Some(now_marked)
    }

    /// Check the 12 fixed line patterns. On the first covered line
    /// found the score goes up by exactly 1; extra simultaneous lines
    /// are not counted.
    pub fn check_win(&mut self) -> Option<WinLine> {
        let line = find_win(&self.marked)?;
        self.score += 1;
        Some(line)
    }

    /// New round: drop every mark except the free cell, keep score
    pub fn clear_marks(&mut self, now_ms: f64) {
        self.marked.clear();
        self.marked.insert(FREE_INDEX);
        self.last_updated_ms = now_ms;
    }
}

/// Generate the pool with the thread RNG (what the app uses on first run)
pub fn fresh_pool() -> Vec<Board> {
    Board::generate_pool(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board() -> Board {
        Board::generate(1, &mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn free_cell_is_center_and_premarked() {
        for b in Board::generate_pool(&mut StdRng::seed_from_u64(42)) {
            assert_eq!(b.cell(FREE_INDEX), Some(Cell::Free));
            assert!(b.is_marked(FREE_INDEX));
            // Exactly one free cell
            let free_count = b.cells.iter().filter(|c| **c == Cell::Free).count();
            assert_eq!(free_count, 1);
        }
    }

    #[test]
    fn free_cell_is_not_removable() {
        let mut b = board();
        assert_eq!(b.toggle(FREE_INDEX, 1.0), None);
        assert!(b.is_marked(FREE_INDEX));
    }

    #[test]
    fn columns_are_distinct_increasing_and_in_range() {
        for b in Board::generate_pool(&mut StdRng::seed_from_u64(99)) {
            for col in 0..SIDE {
                let low = col as u8 * COLUMN_SPAN + 1;
                let high = low + COLUMN_SPAN - 1;
                let mut prev: Option<u8> = None;
                for row in 0..SIDE {
                    let idx = (row * SIDE + col) as u8;
                    if idx == FREE_INDEX {
                        continue;
                    }
                    let Some(Cell::Number(n)) = b.cell(idx) else {
                        panic!("non-free cell without a number");
                    };
                    assert!(n >= low && n <= high, "{n} outside {low}..={high}");
                    if let Some(p) = prev {
                        assert!(n > p, "column {col} not strictly increasing");
                    }
                    prev = Some(n);
                }
            }
        }
    }

    #[test]
    fn toggle_twice_round_trips() {
        let mut b = board();
        let before = b.marked.clone();
        assert_eq!(b.toggle(3, 1.0), Some(true));
        assert_eq!(b.toggle(3, 2.0), Some(false));
        assert_eq!(b.marked, before);
    }

    #[test]
    fn toggle_out_of_range_is_rejected() {
        let mut b = board();
        assert_eq!(b.toggle(25, 1.0), None);
        assert_eq!(b.toggle(200, 1.0), None);
    }

    #[test]
    fn full_first_row_scores_once() {
        let mut b = board();
        for idx in 0..5u8 {
            b.toggle(idx, 1.0);
        }
        let line = b.check_win().expect("first row should win");
        assert_eq!(line.cells, [0, 1, 2, 3, 4]);
        assert_eq!(b.score, 1);
    }

    #[test]
    fn all_cells_marked_scores_one_per_check() {
        let mut b = board();
        for idx in 0..CELL_COUNT as u8 {
            if idx != FREE_INDEX {
                b.toggle(idx, 1.0);
            }
        }
        assert!(b.check_win().is_some());
        assert_eq!(b.score, 1);
        // A second invocation counts again, but still only once
        assert!(b.check_win().is_some());
        assert_eq!(b.score, 2);
    }

    #[test]
    fn clear_marks_keeps_score() {
        let mut b = board();
        for idx in 0..5u8 {
            b.toggle(idx, 1.0);
        }
        b.check_win();
        b.clear_marks(9.0);
        assert_eq!(b.marked.len(), 1);
        assert!(b.is_marked(FREE_INDEX));
        assert_eq!(b.score, 1);
    }
}
