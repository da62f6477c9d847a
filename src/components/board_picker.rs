//! Board Picker Component
//!
//! Number entry for adding a board to the game. Ids outside the pool
//! range (or already in play) just disable the button; there is no
//! error path to surface.

use leptos::prelude::*;

use bingo_core::POOL_SIZE;

use crate::store::{store_select_board, use_app_store, AppStateStoreFields};

#[component]
pub fn BoardPicker() -> impl IntoView {
    let store = use_app_store();
    let (entry, set_entry) = signal(String::new());

    let parsed = Memo::new(move |_| entry.get().trim().parse::<u32>().ok());
    let can_add = Memo::new(move |_| match parsed.get() {
        Some(id) => (1..=POOL_SIZE).contains(&id) && !store.selected().get().contains(&id),
        None => false,
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = parsed.get() else { return };
        if store_select_board(&store, id) {
            set_entry.set(String::new());
        }
    };

    view! {
        <form class="board-picker" on:submit=on_submit>
            <input
                type="number"
                min="1"
                max=POOL_SIZE.to_string()
                placeholder=format!("Board 1-{}", POOL_SIZE)
                prop:value=move || entry.get()
                on:input=move |ev| set_entry.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || !can_add.get()>"Add board"</button>
        </form>
    }
}
