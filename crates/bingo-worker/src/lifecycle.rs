//! Worker Lifecycle
//!
//! Install pre-populates the current cache bucket; activate drops
//! stale buckets and takes control of open pages.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Cache, ServiceWorkerGlobalScope};

use crate::routes::{stale_caches, CACHE_NAME, PRECACHE};

pub async fn install(scope: ServiceWorkerGlobalScope) -> Result<(), JsValue> {
    let caches = scope.caches()?;
    let cache: Cache = JsFuture::from(caches.open(CACHE_NAME)).await?.dyn_into()?;
    let assets = js_sys::Array::new();
    for path in PRECACHE {
        assets.push(&JsValue::from_str(path));
    }
    // A failed addAll rejects the install and leaves the previous
    // version in control.
    JsFuture::from(cache.add_all_with_str_sequence(&assets)).await?;
    Ok(())
}

pub async fn activate(scope: ServiceWorkerGlobalScope) -> Result<(), JsValue> {
    let caches = scope.caches()?;
    let keys = JsFuture::from(caches.keys()).await?;
    let names: Vec<String> = js_sys::Array::from(&keys)
        .iter()
        .filter_map(|v| v.as_string())
        .collect();
    for name in stale_caches(&names) {
        let _ = JsFuture::from(caches.delete(&name)).await;
    }
    JsFuture::from(scope.clients().claim()).await?;
    Ok(())
}
