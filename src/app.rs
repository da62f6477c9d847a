//! Bingo Frontend App
//!
//! Root component: loads the saved game on mount, schedules debounced
//! saves, and renders the picker, the selected board cards, and the
//! status bar.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use bingo_core::fresh_pool;

use crate::components::{BoardCard, BoardPicker, StatusBar, WinBanner};
use crate::context::AppContext;
use crate::storage;
use crate::store::{
    store_apply_loaded, store_snapshot, AppState, AppStateStoreFields, AppStore, StorageStatus,
};

/// Coalesce rapid mutations into one delayed write; last write wins
const SAVE_DEBOUNCE_MS: u32 = 800;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);
    provide_context(AppContext::new(signal(None::<String>)));

    bind_online_listeners(store);

    // Load the saved game once on mount; regenerate the pool when
    // nothing (usable) is stored.
    Effect::new(move |_| {
        spawn_local(async move {
            match storage::load().await {
                Ok(Some(snapshot)) => match snapshot.decode() {
                    Some((selected, boards)) if !boards.is_empty() => {
                        store_apply_loaded(&store, selected, boards, StorageStatus::Ready);
                    }
                    _ => {
                        web_sys::console::warn_1(
                            &"stored game unreadable, regenerating pool".into(),
                        );
                        store_apply_loaded(&store, Vec::new(), fresh_pool(), StorageStatus::Ready);
                    }
                },
                Ok(None) => {
                    store_apply_loaded(&store, Vec::new(), fresh_pool(), StorageStatus::Ready);
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("storage unavailable: {e}").into());
                    store_apply_loaded(
                        &store,
                        Vec::new(),
                        fresh_pool(),
                        StorageStatus::Unavailable,
                    );
                }
            }
        });
    });

    // Debounced persistence: wait out the window, then write unless a
    // newer mutation superseded this revision.
    Effect::new(move |_| {
        let revision = store.save_revision().get();
        if revision == 0 {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(SAVE_DEBOUNCE_MS).await;
            if store.save_revision().get_untracked() != revision {
                return;
            }
            if store.storage_status().get_untracked() == StorageStatus::Unavailable {
                return;
            }
            let snapshot = store_snapshot(&store, js_sys::Date::now());
            if let Err(e) = storage::save(&snapshot).await {
                web_sys::console::warn_1(&format!("save failed: {e}").into());
                store.storage_status().set(StorageStatus::Unavailable);
            }
        });
    });

    view! {
        <div class="app-layout">
            <header class="top-bar">
                <h1>"Bingo"</h1>
                <BoardPicker />
            </header>

            <WinBanner />

            <main class="card-grid">
                <For
                    each=move || store.selected().get()
                    key=|id| *id
                    children=move |id| view! { <BoardCard board_id=id /> }
                />
                {move || {
                    store.selected().get().is_empty().then(|| {
                        view! { <p class="empty-hint">"No boards in play. Pick one above."</p> }
                    })
                }}
            </main>

            <StatusBar />
        </div>
    }
}

/// Track the navigator's online state for the status bar.
fn bind_online_listeners(store: AppStore) {
    let Some(window) = web_sys::window() else { return };
    store.online().set(window.navigator().on_line());

    let on_online = Closure::<dyn FnMut()>::new(move || store.online().set(true));
    let on_offline = Closure::<dyn FnMut()>::new(move || store.online().set(false));
    let _ = window.add_event_listener_with_callback("online", on_online.as_ref().unchecked_ref());
    let _ =
        window.add_event_listener_with_callback("offline", on_offline.as_ref().unchecked_ref());
    on_online.forget();
    on_offline.forget();
}
