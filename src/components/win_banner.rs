//! Win Banner Component
//!
//! Transient banner naming the completed line; auto-clears after a
//! fixed delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{use_app_store, AppStateStoreFields, AppStore, WinFlash};

/// How long the highlight stays up
pub const WIN_FLASH_MS: u32 = 2000;

#[component]
pub fn WinBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || {
            store.winning().get().map(|flash| {
                view! {
                    <div class="win-banner">
                        {format!("BINGO! Board {} completed {}", flash.board_id, flash.line.label())}
                    </div>
                }
            })
        }}
    }
}

/// Show the highlight, then clear it unless a newer win replaced it
pub fn flash_win(store: AppStore, flash: WinFlash) {
    store.winning().set(Some(flash));
    spawn_local(async move {
        TimeoutFuture::new(WIN_FLASH_MS).await;
        if store.winning().get_untracked() == Some(flash) {
            store.winning().set(None);
        }
    });
}
