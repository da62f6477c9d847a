//! Status Bar Component
//!
//! Online/offline indicator, storage status, and the worker controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use bingo_core::{fresh_pool, ControlMessage};

use crate::context::AppContext;
use crate::storage;
use crate::store::{store_apply_loaded, use_app_store, AppStateStoreFields, StorageStatus};
use crate::worker_client;

#[component]
pub fn StatusBar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let update_app = move |_| match worker_client::send(ControlMessage::SkipWaiting) {
        Ok(()) => ctx.set_status("update requested"),
        Err(e) => ctx.set_status(e),
    };

    let clear_caches = move |_| match worker_client::send(ControlMessage::ClearCaches) {
        Ok(()) => ctx.set_status("cached assets cleared"),
        Err(e) => ctx.set_status(e),
    };

    let reset_game = move |_| {
        spawn_local(async move {
            if let Err(e) = storage::clear().await {
                web_sys::console::warn_1(&format!("reset failed: {e}").into());
            }
            store_apply_loaded(&store, Vec::new(), fresh_pool(), StorageStatus::Ready);
            ctx.set_status("game data reset");
        });
    };

    view! {
        <footer class="status-bar">
            <span class=move || {
                if store.online().get() { "net-badge online" } else { "net-badge offline" }
            }>
                {move || if store.online().get() { "online" } else { "offline" }}
            </span>

            <span class="storage-badge">
                {move || match store.storage_status().get() {
                    StorageStatus::Loading => "loading saved game",
                    StorageStatus::Ready => "saved on this device",
                    StorageStatus::Unavailable => "storage unavailable, playing in memory",
                }}
            </span>

            <span class="board-count">
                {move || {
                    format!(
                        "{} of {} boards in play",
                        store.selected().get().len(),
                        store.boards().get().len(),
                    )
                }}
            </span>

            <button on:click=update_app>"Update app"</button>
            <button on:click=clear_caches>"Clear cached assets"</button>
            <button on:click=reset_game>"Reset game data"</button>

            {move || {
                ctx.status_line
                    .get()
                    .map(|line| view! { <span class="status-line">{line}</span> })
            }}
        </footer>
    }
}
