//! Board Card Component
//!
//! One selected board: header with score and per-board actions, plus
//! the 5x5 grid.

use leptos::prelude::*;

use bingo_core::COLUMN_LETTERS;

use super::BoardCell;
use crate::store::{store_clear_marks, store_unselect_board, use_app_store, AppStateStoreFields};

#[component]
pub fn BoardCard(board_id: u32) -> impl IntoView {
    let store = use_app_store();

    let board = Memo::new(move |_| store.boards().get().into_iter().find(|b| b.id == board_id));

    let winning_line = Memo::new(move |_| {
        store
            .winning()
            .get()
            .filter(|flash| flash.board_id == board_id)
            .map(|flash| flash.line)
    });

    let new_round = move |_| store_clear_marks(&store, board_id, js_sys::Date::now());
    let remove = move |_| store_unselect_board(&store, board_id);

    view! {
        {move || {
            board.get().map(|b| {
                let line = winning_line.get();
                view! {
                    <section class="board-card">
                        <header class="board-header">
                            <h2>{format!("Board {}", b.id)}</h2>
                            <span class="score">{format!("{} wins", b.score)}</span>
                            <button class="new-round-btn" on:click=new_round>"New round"</button>
                            <button class="remove-btn" on:click=remove>"×"</button>
                        </header>

                        <div class="column-letters">
                            {COLUMN_LETTERS
                                .iter()
                                .map(|c| view! { <span>{c.to_string()}</span> })
                                .collect_view()}
                        </div>

                        <div class="board-grid">
                            {b.cells
                                .iter()
                                .enumerate()
                                .map(|(i, cell)| {
                                    let index = i as u8;
                                    view! {
                                        <BoardCell
                                            board_id=board_id
                                            index=index
                                            cell=*cell
                                            marked=b.marked.contains(&index)
                                            winning=line.map(|l| l.contains(index)).unwrap_or(false)
                                        />
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>
                }
            })
        }}
    }
}
