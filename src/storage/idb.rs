//! IndexedDB Plumbing
//!
//! Wraps the callback-based `IdbRequest` API into awaitable futures
//! and owns database open/upgrade.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IdbDatabase, IdbOpenDbRequest, IdbRequest, IdbVersionChangeEvent};

pub const DB_NAME: &str = "bingo";
pub const DB_VERSION: u32 = 1;
/// Board rows keyed by board id
pub const BOARDS_STORE: &str = "boards";
/// Single snapshot record under a fixed key
pub const STATE_STORE: &str = "gameState";

/// Await a request's success/error callbacks.
pub async fn await_request(request: IdbRequest) -> Result<JsValue, String> {
    let (tx, rx) = oneshot::channel::<Result<JsValue, String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let success_tx = tx.clone();
    let success_req = request.clone();
    let onsuccess = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
        if let Some(tx) = success_tx.borrow_mut().take() {
            let _ = tx.send(
                success_req
                    .result()
                    .map_err(|e| format!("request result: {e:?}")),
            );
        }
    });

    let error_tx = tx.clone();
    let error_req = request.clone();
    let onerror = Closure::<dyn FnMut(web_sys::Event)>::new(move |_| {
        if let Some(tx) = error_tx.borrow_mut().take() {
            let message = error_req
                .error()
                .ok()
                .flatten()
                .map(|e| e.message())
                .unwrap_or_else(|| "unknown IndexedDB error".to_string());
            let _ = tx.send(Err(message));
        }
    });

    request.set_onsuccess(Some(onsuccess.as_ref().unchecked_ref()));
    request.set_onerror(Some(onerror.as_ref().unchecked_ref()));

    let out = rx.await.map_err(|_| "IndexedDB request dropped".to_string());
    request.set_onsuccess(None);
    request.set_onerror(None);
    out?
}

/// Open the database, creating missing object stores on first run or
/// version bump.
pub async fn open_db() -> Result<IdbDatabase, String> {
    let window = web_sys::window().ok_or("no window")?;
    let factory = window
        .indexed_db()
        .map_err(|e| format!("indexedDB access denied: {e:?}"))?
        .ok_or("indexedDB unavailable")?;
    let request = factory
        .open_with_u32(DB_NAME, DB_VERSION)
        .map_err(|e| format!("open {DB_NAME}: {e:?}"))?;

    let onupgrade =
        Closure::<dyn FnMut(IdbVersionChangeEvent)>::new(move |ev: IdbVersionChangeEvent| {
            let Some(target) = ev.target() else { return };
            let Ok(open_request) = target.dyn_into::<IdbOpenDbRequest>() else {
                return;
            };
            let Ok(result) = open_request.result() else {
                return;
            };
            let Ok(db) = result.dyn_into::<IdbDatabase>() else {
                return;
            };
            let names = db.object_store_names();
            if !names.contains(BOARDS_STORE) {
                let _ = db.create_object_store(BOARDS_STORE);
            }
            if !names.contains(STATE_STORE) {
                let _ = db.create_object_store(STATE_STORE);
            }
        });
    request.set_onupgradeneeded(Some(onupgrade.as_ref().unchecked_ref()));

    let result = await_request(IdbRequest::from(request)).await;
    drop(onupgrade);
    result?
        .dyn_into::<IdbDatabase>()
        .map_err(|_| "open result was not a database".to_string())
}
