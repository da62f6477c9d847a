//! Request Routing
//!
//! Pure routing decisions for the fetch handler: which strategy a
//! request gets and which cache buckets survive activation. No
//! browser types here so the table is unit-testable.

/// Current cache bucket; bumping the version tag invalidates all
/// prior buckets at activation.
pub const CACHE_NAME: &str = "bingo-static-v2";

/// App shell assets pre-populated at install
pub const PRECACHE: &[&str] = &[
    "/",
    "/index.html",
    "/style.css",
    "/manifest.webmanifest",
    "/bingo_ui.js",
    "/bingo_ui_bg.wasm",
    "/worker.js",
    "/worker_bg.wasm",
    "/icons/icon-192.png",
    "/icons/icon-512.png",
    "/icons/maskable-512.png",
];

/// Served to offline navigations when the network is down
pub const OFFLINE_FALLBACK: &str = "/index.html";

/// How a request is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Navigations: network first, cached app shell as fallback
    NetworkFirst,
    /// Precached assets: cache first, refreshed in the background
    CacheFirst,
    /// Other GETs: network, filling the cache on success
    NetworkWithCacheFill,
    /// Non-GET traffic goes straight through untouched
    Bypass,
}

pub fn classify(method: &str, is_navigation: bool, path: &str) -> Strategy {
    if !method.eq_ignore_ascii_case("GET") {
        return Strategy::Bypass;
    }
    if is_navigation {
        return Strategy::NetworkFirst;
    }
    if PRECACHE.contains(&path) {
        return Strategy::CacheFirst;
    }
    Strategy::NetworkWithCacheFill
}

/// Cache buckets to delete at activation: everything that is not the
/// current version.
pub fn stale_caches(existing: &[String]) -> Vec<String> {
    existing
        .iter()
        .filter(|name| name.as_str() != CACHE_NAME)
        .cloned()
        .collect()
}

/// The cached document a failed request degrades to, if any
pub fn fallback_document(strategy: Strategy) -> Option<&'static str> {
    match strategy {
        Strategy::NetworkFirst => Some(OFFLINE_FALLBACK),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigations_are_network_first() {
        assert_eq!(classify("GET", true, "/"), Strategy::NetworkFirst);
        assert_eq!(classify("GET", true, "/anything"), Strategy::NetworkFirst);
    }

    #[test]
    fn precached_assets_are_cache_first() {
        assert_eq!(
            classify("GET", false, "/bingo_ui_bg.wasm"),
            Strategy::CacheFirst
        );
        assert_eq!(
            classify("get", false, "/icons/icon-192.png"),
            Strategy::CacheFirst
        );
    }

    #[test]
    fn other_gets_fill_the_cache() {
        assert_eq!(
            classify("GET", false, "/api/whatever.json"),
            Strategy::NetworkWithCacheFill
        );
    }

    #[test]
    fn non_get_is_bypassed() {
        assert_eq!(classify("POST", false, "/index.html"), Strategy::Bypass);
        assert_eq!(classify("PUT", true, "/"), Strategy::Bypass);
    }

    #[test]
    fn activation_keeps_only_the_current_bucket() {
        let existing = vec!["bingo-static-v1".to_string(), CACHE_NAME.to_string()];
        let stale = stale_caches(&existing);
        assert_eq!(stale, vec!["bingo-static-v1".to_string()]);
        assert!(!stale.contains(&CACHE_NAME.to_string()));
    }

    #[test]
    fn offline_navigation_degrades_to_cached_document() {
        let strategy = classify("GET", true, "/");
        assert_eq!(fallback_document(strategy), Some(OFFLINE_FALLBACK));
        assert!(PRECACHE.contains(&OFFLINE_FALLBACK));
    }

    #[test]
    fn asset_requests_have_no_document_fallback() {
        assert_eq!(fallback_document(Strategy::CacheFirst), None);
        assert_eq!(fallback_document(Strategy::NetworkWithCacheFill), None);
    }
}
