//! UI Components
//!
//! Leptos components for the bingo screen.

mod board_card;
mod board_cell;
mod board_picker;
mod status_bar;
mod win_banner;

pub use board_card::BoardCard;
pub use board_cell::BoardCell;
pub use board_picker::BoardPicker;
pub use status_bar::StatusBar;
pub use win_banner::WinBanner;
