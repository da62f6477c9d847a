//! Push Notifications
//!
//! Renders push payloads as system notifications and opens the
//! target url on click.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Notification, NotificationOptions, PushEvent, ServiceWorkerGlobalScope};

use bingo_core::PushPayload;

/// Fixed notification art, part of the precached icon set
const NOTIFICATION_ICON: &str = "/icons/icon-192.png";
const NOTIFICATION_BADGE: &str = "/icons/icon-192.png";

/// A payload that fails to parse still produces a notification with
/// the default title.
pub fn payload_from(event: &PushEvent) -> PushPayload {
    event
        .data()
        .map(|data| data.text())
        .and_then(|text| serde_json::from_str(&text).ok())
        .unwrap_or_default()
}

pub async fn show(scope: ServiceWorkerGlobalScope, payload: PushPayload) -> Result<(), JsValue> {
    let options = NotificationOptions::new();
    options.set_body(&payload.body);
    options.set_icon(NOTIFICATION_ICON);
    options.set_badge(NOTIFICATION_BADGE);
    options.set_data(&JsValue::from_str(&payload.url));
    let promise = scope
        .registration()
        .show_notification_with_options(&payload.title, &options)?;
    JsFuture::from(promise).await?;
    Ok(())
}

pub async fn open_target(
    scope: ServiceWorkerGlobalScope,
    notification: Notification,
) -> Result<(), JsValue> {
    notification.close();
    let url = notification
        .data()
        .as_string()
        .unwrap_or_else(|| "/".to_string());
    JsFuture::from(scope.clients().open_window(&url)).await?;
    Ok(())
}
