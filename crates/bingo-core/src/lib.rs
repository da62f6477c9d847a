//! Bingo Game Core
//!
//! Board model, win detection, and the storage/wire codecs shared by
//! the frontend and the offline worker. No browser types in here, so
//! everything is unit-testable on the host.

pub mod board;
pub mod lines;
pub mod msgs;
pub mod state;

pub use board::{fresh_pool, Board, Cell, CELL_COUNT, COLUMN_LETTERS, FREE_INDEX, POOL_SIZE, SIDE};
pub use lines::{find_win, WinLine, LINE_COUNT};
pub use msgs::{ControlMessage, PushPayload};
pub use state::{GameSnapshot, StoredBoard, GAME_STATE_KEY, SCHEMA_VERSION};
