//! Persistence Layer
//!
//! IndexedDB-backed game snapshots. Best-effort: every entry point
//! returns `Result<_, String>`, callers log failures and keep playing
//! on in-memory state.

mod game_store;
mod idb;

pub use game_store::{clear, load, save};
