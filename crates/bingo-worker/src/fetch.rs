//! Fetch Strategies
//!
//! Executes the routing table against the Cache Storage API. Every
//! path resolves to a response; a request never fails with an
//! unhandled rejection.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{
    Cache, Headers, Request, RequestMode, Response, ResponseInit, ServiceWorkerGlobalScope, Url,
};

use crate::routes::{classify, fallback_document, Strategy, CACHE_NAME};

/// Answer one intercepted request.
pub async fn respond(scope: ServiceWorkerGlobalScope, request: Request) -> Response {
    let path = request_path(&request);
    let is_navigation = request.mode() == RequestMode::Navigate;
    let strategy = classify(&request.method(), is_navigation, &path);

    match strategy {
        Strategy::Bypass => pass_through(&scope, &request).await,
        Strategy::NetworkFirst => network_first(&scope, &request, strategy).await,
        Strategy::CacheFirst => cache_first(&scope, &request).await,
        Strategy::NetworkWithCacheFill => network_with_fill(&scope, &request).await,
    }
}

fn request_path(request: &Request) -> String {
    match Url::new(&request.url()) {
        Ok(url) => url.pathname(),
        Err(_) => request.url(),
    }
}

async fn pass_through(scope: &ServiceWorkerGlobalScope, request: &Request) -> Response {
    network(scope, request).await.unwrap_or_else(|_| synthetic_offline())
}

async fn network_first(
    scope: &ServiceWorkerGlobalScope,
    request: &Request,
    strategy: Strategy,
) -> Response {
    match network(scope, request).await {
        Ok(response) => {
            if response.ok() {
                store_copy(scope, request, &response).await;
            }
            response
        }
        Err(_) => {
            if let Some(hit) = cache_match(scope, request).await {
                return hit;
            }
            if let Some(doc) = fallback_document(strategy) {
                if let Some(shell) = cache_match_path(scope, doc).await {
                    return shell;
                }
            }
            synthetic_offline()
        }
    }
}

async fn cache_first(scope: &ServiceWorkerGlobalScope, request: &Request) -> Response {
    if let Some(hit) = cache_match(scope, request).await {
        refresh_in_background(scope, request.url());
        return hit;
    }
    match network(scope, request).await {
        Ok(response) => {
            if response.ok() {
                store_copy(scope, request, &response).await;
            }
            response
        }
        Err(_) => synthetic_offline(),
    }
}

async fn network_with_fill(scope: &ServiceWorkerGlobalScope, request: &Request) -> Response {
    match network(scope, request).await {
        Ok(response) => {
            if response.ok() {
                store_copy(scope, request, &response).await;
            }
            response
        }
        Err(_) => match cache_match(scope, request).await {
            Some(hit) => hit,
            None => synthetic_offline(),
        },
    }
}

async fn network(
    scope: &ServiceWorkerGlobalScope,
    request: &Request,
) -> Result<Response, JsValue> {
    let value = JsFuture::from(scope.fetch_with_request(request)).await?;
    value.dyn_into::<Response>()
}

async fn open_cache(scope: &ServiceWorkerGlobalScope) -> Option<Cache> {
    let caches = scope.caches().ok()?;
    let value = JsFuture::from(caches.open(CACHE_NAME)).await.ok()?;
    value.dyn_into::<Cache>().ok()
}

/// Resolves to `None` on a cache miss (the promise fulfills with
/// `undefined`, which fails the cast).
async fn cache_match(scope: &ServiceWorkerGlobalScope, request: &Request) -> Option<Response> {
    let cache = open_cache(scope).await?;
    let hit = JsFuture::from(cache.match_with_request(request)).await.ok()?;
    hit.dyn_into::<Response>().ok()
}

async fn cache_match_path(scope: &ServiceWorkerGlobalScope, path: &str) -> Option<Response> {
    let cache = open_cache(scope).await?;
    let hit = JsFuture::from(cache.match_with_str(path)).await.ok()?;
    hit.dyn_into::<Response>().ok()
}

async fn store_copy(scope: &ServiceWorkerGlobalScope, request: &Request, response: &Response) {
    let Ok(copy) = response.clone() else { return };
    let Some(cache) = open_cache(scope).await else { return };
    let _ = JsFuture::from(cache.put_with_request(request, &copy)).await;
}

/// Re-fetch a cache-first hit and update the bucket without blocking
/// the response.
fn refresh_in_background(scope: &ServiceWorkerGlobalScope, url: String) {
    let scope = scope.clone();
    spawn_local(async move {
        let Ok(value) = JsFuture::from(scope.fetch_with_str(&url)).await else {
            return;
        };
        let Ok(response) = value.dyn_into::<Response>() else {
            return;
        };
        if !response.ok() {
            return;
        }
        let Some(cache) = open_cache(&scope).await else {
            return;
        };
        let _ = JsFuture::from(cache.put_with_str(&url, &response)).await;
    });
}

/// The 503 every failed path degrades to.
fn synthetic_offline() -> Response {
    let init = ResponseInit::new();
    init.set_status(503);
    init.set_status_text("Service Unavailable");
    if let Ok(headers) = Headers::new() {
        let _ = headers.set("Content-Type", "text/plain");
        init.set_headers(&headers);
    }
    Response::new_with_opt_str_and_init(Some("offline: no cached copy of this resource"), &init)
        .expect("failed to build offline response")
}
