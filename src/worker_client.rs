//! Worker Client
//!
//! Registers the offline worker and posts control messages to it.
//! Registration failure is tolerated: the game still runs, it just
//! is not installable/offline-capable.

use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

use bingo_core::ControlMessage;

/// Served next to the app bundle
const WORKER_URL: &str = "/worker.js";

pub fn register() {
    let Some(window) = web_sys::window() else { return };
    let container = window.navigator().service_worker();
    spawn_local(async move {
        match JsFuture::from(container.register(WORKER_URL)).await {
            Ok(_) => web_sys::console::log_1(&"offline worker registered".into()),
            Err(e) => {
                web_sys::console::warn_1(&format!("offline worker unavailable: {e:?}").into())
            }
        }
    });
}

/// Post a command to the controlling worker, if there is one.
pub fn send(msg: ControlMessage) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let container = window.navigator().service_worker();
    let controller = container
        .controller()
        .ok_or("no active worker controller")?;
    let value = serde_wasm_bindgen::to_value(&msg).map_err(|e| e.to_string())?;
    controller
        .post_message(&value)
        .map_err(|e| format!("post message: {e:?}"))
}
