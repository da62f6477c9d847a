//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The
//! mutation helpers are thin wrappers over pure functions so the game
//! rules stay testable without a browser.

use leptos::prelude::*;
use reactive_stores::Store;

use bingo_core::{Board, GameSnapshot, WinLine, POOL_SIZE};

/// Transient win highlight, cleared after the flash delay
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WinFlash {
    pub board_id: u32,
    pub line: WinLine,
}

/// Where persisted state currently comes from
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum StorageStatus {
    #[default]
    Loading,
    Ready,
    /// Durable store unavailable; playing on in-memory defaults
    Unavailable,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The fixed board pool
    pub boards: Vec<Board>,
    /// Selected board ids in display order
    pub selected: Vec<u32>,
    /// Bumped by every mutation that should reach storage
    pub save_revision: u32,
    pub storage_status: StorageStatus,
    pub online: bool,
    pub winning: Option<WinFlash>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            online: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Install a loaded (or freshly generated) game
pub fn store_apply_loaded(
    store: &AppStore,
    selected: Vec<u32>,
    boards: Vec<Board>,
    status: StorageStatus,
) {
    store.boards().set(boards);
    store.selected().set(selected);
    store.storage_status().set(status);
}

/// Toggle one cell; returns the completed line, if any
pub fn store_toggle_cell(
    store: &AppStore,
    board_id: u32,
    index: u8,
    now_ms: f64,
) -> Option<WinLine> {
    let won = toggle_cell(&mut store.boards().write(), board_id, index, now_ms);
    mark_dirty(store);
    won
}

/// Add a board to the selection; `false` if the id is invalid or
/// already in play
pub fn store_select_board(store: &AppStore, board_id: u32) -> bool {
    let added = select_board(&mut store.selected().write(), board_id);
    if added {
        mark_dirty(store);
    }
    added
}

pub fn store_unselect_board(store: &AppStore, board_id: u32) {
    store.selected().write().retain(|id| *id != board_id);
    mark_dirty(store);
}

/// New round on one board: marks reset, score kept
pub fn store_clear_marks(store: &AppStore, board_id: u32, now_ms: f64) {
    if let Some(board) = store
        .boards()
        .write()
        .iter_mut()
        .find(|b| b.id == board_id)
    {
        board.clear_marks(now_ms);
    }
    mark_dirty(store);
}

/// Snapshot the current state for persistence
pub fn store_snapshot(store: &AppStore, now_ms: f64) -> GameSnapshot {
    GameSnapshot::capture(
        &store.selected().get_untracked(),
        &store.boards().get_untracked(),
        now_ms,
    )
}

fn mark_dirty(store: &AppStore) {
    store.save_revision().update(|rev| *rev = rev.wrapping_add(1));
}

// ========================
// Pure mutation logic
// ========================

fn toggle_cell(boards: &mut [Board], board_id: u32, index: u8, now_ms: f64) -> Option<WinLine> {
    let board = boards.iter_mut().find(|b| b.id == board_id)?;
    match board.toggle(index, now_ms) {
        // Win detection runs when a cell is newly covered
        Some(true) => board.check_win(),
        _ => None,
    }
}

fn select_board(selected: &mut Vec<u32>, board_id: u32) -> bool {
    if board_id == 0 || board_id > POOL_SIZE || selected.contains(&board_id) {
        return false;
    }
    selected.push(board_id);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use bingo_core::FREE_INDEX;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pool() -> Vec<Board> {
        Board::generate_pool(&mut StdRng::seed_from_u64(5))
    }

    #[test]
    fn toggling_a_row_to_completion_reports_the_win() {
        let mut boards = pool();
        for idx in [0u8, 1, 2, 3] {
            assert_eq!(toggle_cell(&mut boards, 2, idx, 1.0), None);
        }
        let line = toggle_cell(&mut boards, 2, 4, 2.0).expect("row 1 complete");
        assert_eq!(line.cells, [0, 1, 2, 3, 4]);
        assert_eq!(boards[1].score, 1);
    }

    #[test]
    fn unmarking_does_not_trigger_win_detection() {
        let mut boards = pool();
        for idx in 0..5u8 {
            toggle_cell(&mut boards, 1, idx, 1.0);
        }
        // Row complete; toggling a cell off must not score again
        assert_eq!(toggle_cell(&mut boards, 1, 7, 2.0), None);
        assert_eq!(boards[0].score, 1);
    }

    #[test]
    fn free_cell_clicks_are_ignored() {
        let mut boards = pool();
        assert_eq!(toggle_cell(&mut boards, 1, FREE_INDEX, 1.0), None);
        assert!(boards[0].is_marked(FREE_INDEX));
    }

    #[test]
    fn unknown_board_is_a_no_op() {
        let mut boards = pool();
        assert_eq!(toggle_cell(&mut boards, 99, 0, 1.0), None);
    }

    #[test]
    fn selection_rejects_out_of_range_and_duplicates() {
        let mut selected = Vec::new();
        assert!(select_board(&mut selected, 3));
        assert!(!select_board(&mut selected, 3));
        assert!(!select_board(&mut selected, 0));
        assert!(!select_board(&mut selected, POOL_SIZE + 1));
        assert!(select_board(&mut selected, POOL_SIZE));
        assert_eq!(selected, vec![3, POOL_SIZE]);
    }
}
