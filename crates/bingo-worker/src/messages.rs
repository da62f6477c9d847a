//! Control Messages
//!
//! The page posts a small command vocabulary; anything that fails to
//! decode is ignored.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::ServiceWorkerGlobalScope;

use bingo_core::ControlMessage;

pub fn parse(data: JsValue) -> Option<ControlMessage> {
    serde_wasm_bindgen::from_value(data).ok()
}

pub async fn handle(scope: ServiceWorkerGlobalScope, msg: ControlMessage) -> Result<(), JsValue> {
    match msg {
        ControlMessage::SkipWaiting => {
            JsFuture::from(scope.skip_waiting()?).await?;
        }
        ControlMessage::ClearCaches => {
            let caches = scope.caches()?;
            let keys = JsFuture::from(caches.keys()).await?;
            for name in js_sys::Array::from(&keys)
                .iter()
                .filter_map(|v| v.as_string())
            {
                let _ = JsFuture::from(caches.delete(&name)).await;
            }
        }
    }
    Ok(())
}
