//! Bingo Frontend Entry Point

mod app;
mod components;
mod context;
mod storage;
mod store;
mod worker_client;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    worker_client::register();
    mount_to_body(App);
}
