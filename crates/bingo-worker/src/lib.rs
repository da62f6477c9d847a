//! Offline Cache Worker
//!
//! Service worker entry point: binds lifecycle, fetch, message, and
//! push handlers on the worker global scope. Handlers run under
//! `waitUntil`/`respondWith`, and the fetch path always resolves to a
//! response, so a dead network never surfaces as an error.

mod fetch;
mod lifecycle;
mod messages;
mod push;
pub mod routes;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{
    ExtendableEvent, ExtendableMessageEvent, FetchEvent, NotificationEvent, PushEvent,
    ServiceWorkerGlobalScope,
};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Ok(scope) = js_sys::global().dyn_into::<ServiceWorkerGlobalScope>() else {
        web_sys::console::error_1(&"bingo-worker loaded outside a service worker scope".into());
        return;
    };

    bind_install(&scope);
    bind_activate(&scope);
    bind_fetch(&scope);
    bind_message(&scope);
    bind_push(&scope);
    bind_notification_click(&scope);

    web_sys::console::log_1(&format!("bingo-worker ready ({})", routes::CACHE_NAME).into());
}

fn bind_install(scope: &ServiceWorkerGlobalScope) {
    let worker = scope.clone();
    let handler = Closure::<dyn FnMut(ExtendableEvent)>::new(move |event: ExtendableEvent| {
        let worker = worker.clone();
        let work = future_to_promise(async move {
            lifecycle::install(worker).await?;
            Ok(JsValue::UNDEFINED)
        });
        let _ = event.wait_until(&work);
    });
    scope.set_oninstall(Some(handler.as_ref().unchecked_ref()));
    handler.forget();
}

fn bind_activate(scope: &ServiceWorkerGlobalScope) {
    let worker = scope.clone();
    let handler = Closure::<dyn FnMut(ExtendableEvent)>::new(move |event: ExtendableEvent| {
        let worker = worker.clone();
        let work = future_to_promise(async move {
            lifecycle::activate(worker).await?;
            Ok(JsValue::UNDEFINED)
        });
        let _ = event.wait_until(&work);
    });
    scope.set_onactivate(Some(handler.as_ref().unchecked_ref()));
    handler.forget();
}

fn bind_fetch(scope: &ServiceWorkerGlobalScope) {
    let worker = scope.clone();
    let handler = Closure::<dyn FnMut(FetchEvent)>::new(move |event: FetchEvent| {
        let worker = worker.clone();
        let request = event.request();
        let response = future_to_promise(async move {
            Ok(JsValue::from(fetch::respond(worker, request).await))
        });
        let _ = event.respond_with(&response);
    });
    scope.set_onfetch(Some(handler.as_ref().unchecked_ref()));
    handler.forget();
}

fn bind_message(scope: &ServiceWorkerGlobalScope) {
    let worker = scope.clone();
    let handler =
        Closure::<dyn FnMut(ExtendableMessageEvent)>::new(move |event: ExtendableMessageEvent| {
            let Some(msg) = messages::parse(event.data()) else {
                web_sys::console::warn_1(&"ignoring unknown worker message".into());
                return;
            };
            let worker = worker.clone();
            let work = future_to_promise(async move {
                messages::handle(worker, msg).await?;
                Ok(JsValue::UNDEFINED)
            });
            let _ = event.wait_until(&work);
        });
    scope.set_onmessage(Some(handler.as_ref().unchecked_ref()));
    handler.forget();
}

fn bind_push(scope: &ServiceWorkerGlobalScope) {
    let worker = scope.clone();
    let handler = Closure::<dyn FnMut(PushEvent)>::new(move |event: PushEvent| {
        let payload = push::payload_from(&event);
        let worker = worker.clone();
        let work = future_to_promise(async move {
            push::show(worker, payload).await?;
            Ok(JsValue::UNDEFINED)
        });
        let _ = event.wait_until(&work);
    });
    scope.set_onpush(Some(handler.as_ref().unchecked_ref()));
    handler.forget();
}

fn bind_notification_click(scope: &ServiceWorkerGlobalScope) {
    let worker = scope.clone();
    let handler = Closure::<dyn FnMut(NotificationEvent)>::new(move |event: NotificationEvent| {
        let worker = worker.clone();
        let notification = event.notification();
        let work = future_to_promise(async move {
            push::open_target(worker, notification).await?;
            Ok(JsValue::UNDEFINED)
        });
        let _ = event.wait_until(&work);
    });
    scope.set_onnotificationclick(Some(handler.as_ref().unchecked_ref()));
    handler.forget();
}
