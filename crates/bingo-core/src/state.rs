//! Snapshot Codec
//!
//! The one schema-versioned codec between the in-memory game and
//! durable storage. Marked-cell sets are stored as ordered lists and
//! rehydrated as sets; the free cell is re-asserted on decode.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, CELL_COUNT, FREE_INDEX};

/// Bump when the stored shape changes
pub const SCHEMA_VERSION: u32 = 1;
/// Fixed key of the single game-state record
pub const GAME_STATE_KEY: u32 = 1;

/// Free-cell sentinel in the stored number list
const FREE_SENTINEL: u8 = 0;

/// One board row in the `boards` store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredBoard {
    pub schema: u32,
    pub id: u32,
    /// 25 entries, 0 = free cell
    pub numbers: Vec<u8>,
    /// Marked indices, ascending
    pub marked: Vec<u8>,
    pub score: u32,
    pub last_updated_ms: f64,
}

/// The single `gameState` record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub schema: u32,
    /// Selected board ids in display order
    pub selected: Vec<u32>,
    pub boards: Vec<StoredBoard>,
    pub saved_at_ms: f64,
}

impl StoredBoard {
    pub fn encode(board: &Board) -> Self {
        Self {
            schema: SCHEMA_VERSION,
            id: board.id,
            numbers: board
                .cells
                .iter()
                .map(|c| match c {
                    Cell::Free => FREE_SENTINEL,
                    Cell::Number(n) => *n,
                })
                .collect(),
            marked: board.marked.iter().copied().collect(),
            score: board.score,
            last_updated_ms: board.last_updated_ms,
        }
    }

    /// `None` on unknown schema or malformed layout; the caller falls
    /// back to a fresh pool.
    pub fn decode(&self) -> Option<Board> {
        if self.schema != SCHEMA_VERSION || self.numbers.len() != CELL_COUNT {
            return None;
        }
        let cells: Vec<Cell> = self
            .numbers
            .iter()
            .map(|&n| {
                if n == FREE_SENTINEL {
                    Cell::Free
                } else {
                    Cell::Number(n)
                }
            })
            .collect();
        let mut marked: BTreeSet<u8> = self
            .marked
            .iter()
            .copied()
            .filter(|i| (*i as usize) < CELL_COUNT)
            .collect();
        marked.insert(FREE_INDEX);
        Some(Board {
            id: self.id,
            cells,
            marked,
            score: self.score,
            last_updated_ms: self.last_updated_ms,
        })
    }
}

impl GameSnapshot {
    pub fn capture(selected: &[u32], boards: &[Board], now_ms: f64) -> Self {
        Self {
            schema: SCHEMA_VERSION,
            selected: selected.to_vec(),
            boards: boards.iter().map(StoredBoard::encode).collect(),
            saved_at_ms: now_ms,
        }
    }

    /// The well-defined empty state used when nothing is stored or
    /// storage is unavailable.
    pub fn empty() -> Self {
        Self {
            schema: SCHEMA_VERSION,
            selected: Vec::new(),
            boards: Vec::new(),
            saved_at_ms: 0.0,
        }
    }

    /// `None` on unknown schema version
    pub fn decode(&self) -> Option<(Vec<u32>, Vec<Board>)> {
        if self.schema != SCHEMA_VERSION {
            return None;
        }
        let boards: Vec<Board> = self.boards.iter().filter_map(StoredBoard::decode).collect();
        // Selection entries whose board row was dropped are dropped too
        let selected = self
            .selected
            .iter()
            .copied()
            .filter(|id| boards.iter().any(|b| b.id == *id))
            .collect();
        Some((selected, boards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool() -> Vec<Board> {
        Board::generate_pool(&mut StdRng::seed_from_u64(11))
    }

    #[test]
    fn snapshot_round_trip_preserves_selection_and_marks() {
        let mut boards = pool();
        boards[0].toggle(3, 5.0);
        boards[0].toggle(17, 6.0);
        boards[2].toggle(4, 7.0);
        let selected = vec![3, 1];

        let snap = GameSnapshot::capture(&selected, &boards, 8.0);
        let (sel, restored) = snap.decode().expect("current schema decodes");

        assert_eq!(sel, selected, "selection order survives");
        assert_eq!(restored, boards, "boards round-trip exactly");
    }

    #[test]
    fn marked_list_is_ordered() {
        let mut boards = pool();
        boards[0].toggle(20, 1.0);
        boards[0].toggle(3, 2.0);
        let stored = StoredBoard::encode(&boards[0]);
        let mut sorted = stored.marked.clone();
        sorted.sort_unstable();
        assert_eq!(stored.marked, sorted);
        assert!(stored.marked.contains(&FREE_INDEX));
    }

    #[test]
    fn decode_reasserts_free_cell_and_drops_junk_indices() {
        let mut stored = StoredBoard::encode(&pool()[0]);
        stored.marked = vec![3, 99];
        let board = stored.decode().unwrap();
        assert!(board.is_marked(FREE_INDEX));
        assert!(board.is_marked(3));
        assert!(!board.is_marked(99));
        assert_eq!(board.marked.len(), 2);
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let mut snap = GameSnapshot::capture(&[1], &pool(), 1.0);
        snap.schema = SCHEMA_VERSION + 1;
        assert!(snap.decode().is_none());

        let mut stored = StoredBoard::encode(&pool()[0]);
        stored.schema = 0;
        assert!(stored.decode().is_none());
    }

    #[test]
    fn selection_without_a_board_row_is_dropped() {
        let boards = pool();
        let snap = GameSnapshot::capture(&[2, 42], &boards, 1.0);
        let (sel, _) = snap.decode().unwrap();
        assert_eq!(sel, vec![2]);
    }

    #[test]
    fn empty_state_is_well_defined() {
        let (sel, boards) = GameSnapshot::empty().decode().unwrap();
        assert!(sel.is_empty());
        assert!(boards.is_empty());
    }

    #[test]
    fn snapshot_survives_json() {
        let snap = GameSnapshot::capture(&[1, 2], &pool(), 3.0);
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
