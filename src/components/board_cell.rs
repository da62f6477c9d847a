//! Board Cell Component
//!
//! A single cell button in the 5x5 grid.

use leptos::prelude::*;

use bingo_core::Cell;

use super::win_banner::flash_win;
use crate::store::{store_toggle_cell, use_app_store, WinFlash};

#[component]
pub fn BoardCell(
    board_id: u32,
    index: u8,
    cell: Cell,
    marked: bool,
    winning: bool,
) -> impl IntoView {
    let store = use_app_store();

    let free = matches!(cell, Cell::Free);
    let label = match cell {
        Cell::Free => "FREE".to_string(),
        Cell::Number(n) => n.to_string(),
    };

    let class = move || {
        let mut class = String::from("cell");
        if free {
            class.push_str(" free");
        }
        if marked {
            class.push_str(" marked");
        }
        if winning {
            class.push_str(" winning");
        }
        class
    };

    let on_click = move |_| {
        // The free cell stays covered; nothing to do
        if free {
            return;
        }
        if let Some(line) = store_toggle_cell(&store, board_id, index, js_sys::Date::now()) {
            flash_win(store, WinFlash { board_id, line });
        }
    };

    view! {
        <button class=class disabled=free on:click=on_click>
            {label}
        </button>
    }
}
