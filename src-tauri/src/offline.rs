//! Standalone cache policy for static app assets.
//!
//! Keeps one versioned cache and purges older versions on activation. Reads
//! same-origin `GET`s cache-first and falls back to the cached root document
//! for navigations when the [`Network`] fails. Nothing in the desktop shell
//! calls it; Tauri serves the bundled assets directly.

use std::collections::HashMap;

use tracing::{debug, info, warn};

/// Prefix shared by every cache this app creates.
pub const CACHE_PREFIX: &str = "gradebook";
/// Path of the document served when a navigation fails offline.
pub const ROOT_DOCUMENT: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRequest {
    pub method: String,
    pub path: String,
    pub same_origin: bool,
    pub navigation: bool,
}

impl AssetRequest {
    pub fn get(path: &str) -> Self {
        Self {
            method: "GET".to_string(),
            path: path.to_string(),
            same_origin: true,
            navigation: false,
        }
    }

    pub fn navigate(path: &str) -> Self {
        Self {
            navigation: true,
            ..Self::get(path)
        }
    }

    fn is_cacheable(&self) -> bool {
        self.same_origin && self.method.eq_ignore_ascii_case("GET")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResponse {
    pub status: u16,
    /// Opaque responses come from no-cors cross-origin fetches and cannot
    /// be inspected.
    pub opaque: bool,
    pub body: Vec<u8>,
}

impl AssetResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            opaque: false,
            body: body.into(),
        }
    }

    fn is_storable(&self) -> bool {
        self.status == 200 && !self.opaque
    }
}

/// Anything that can fetch an asset over the network.
pub trait Network {
    fn fetch(&self, request: &AssetRequest) -> Result<AssetResponse, String>;
}

/// A set of named caches, one of which is current.
pub struct AssetCache {
    current: String,
    caches: HashMap<String, HashMap<String, AssetResponse>>,
}

impl AssetCache {
    pub fn new(version: &str) -> Self {
        Self::with_caches(version, HashMap::new())
    }

    /// Resume with caches left behind by earlier versions.
    pub fn with_caches(
        version: &str,
        caches: HashMap<String, HashMap<String, AssetResponse>>,
    ) -> Self {
        Self {
            current: format!("{}-{}", CACHE_PREFIX, version),
            caches,
        }
    }

    pub fn name(&self) -> &str {
        &self.current
    }

    pub fn cache_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.caches.keys().cloned().collect();
        names.sort();
        names
    }

    /// Pre-populate the current cache with the app shell.
    pub fn install<I>(&mut self, assets: I)
    where
        I: IntoIterator<Item = (String, AssetResponse)>,
    {
        let cache = self.caches.entry(self.current.clone()).or_default();
        cache.extend(assets);
        info!("Installed {} assets into {}", cache.len(), self.current);
    }

    /// Delete every cache that is not the current version.
    pub fn activate(&mut self) -> Vec<String> {
        let mut stale: Vec<String> = self
            .caches
            .keys()
            .filter(|name| **name != self.current)
            .cloned()
            .collect();
        stale.sort();

        for name in &stale {
            self.caches.remove(name);
            info!("Deleted stale cache {}", name);
        }
        stale
    }

    pub fn lookup(&self, path: &str) -> Option<&AssetResponse> {
        self.caches.get(&self.current).and_then(|cache| cache.get(path))
    }

    /// Serve a request cache-first, falling back to the network.
    pub fn fetch(
        &mut self,
        request: &AssetRequest,
        network: &dyn Network,
    ) -> Result<AssetResponse, String> {
        if !request.is_cacheable() {
            return network.fetch(request);
        }

        if let Some(hit) = self.lookup(&request.path) {
            debug!("Cache hit: {}", request.path);
            return Ok(hit.clone());
        }

        match network.fetch(request) {
            Ok(response) => {
                if response.is_storable() {
                    self.caches
                        .entry(self.current.clone())
                        .or_default()
                        .insert(request.path.clone(), response.clone());
                }
                Ok(response)
            }
            Err(e) if request.navigation => {
                warn!("Offline navigation to {}: {}", request.path, e);
                self.lookup(ROOT_DOCUMENT).cloned().ok_or(e)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeNetwork {
        responses: HashMap<String, AssetResponse>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeNetwork {
        fn new(responses: Vec<(&str, AssetResponse)>) -> Self {
            Self {
                responses: responses
                    .into_iter()
                    .map(|(path, response)| (path.to_string(), response))
                    .collect(),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn offline() -> Self {
            Self::new(Vec::new())
        }
    }

    impl Network for FakeNetwork {
        fn fetch(&self, request: &AssetRequest) -> Result<AssetResponse, String> {
            self.calls.borrow_mut().push(request.path.clone());
            self.responses
                .get(&request.path)
                .cloned()
                .ok_or_else(|| "network unreachable".to_string())
        }
    }

    #[test]
    fn test_activate_purges_only_stale_versions() {
        let mut old = HashMap::new();
        old.insert("gradebook-v1".to_string(), HashMap::new());
        old.insert("gradebook-v2".to_string(), HashMap::new());

        let mut cache = AssetCache::with_caches("v2", old);
        let removed = cache.activate();

        assert_eq!(removed, vec!["gradebook-v1".to_string()]);
        assert_eq!(cache.cache_names(), vec!["gradebook-v2".to_string()]);
    }

    #[test]
    fn test_cache_first() {
        let mut cache = AssetCache::new("v1");
        cache.install(vec![("/app.js".to_string(), AssetResponse::ok("cached"))]);
        let network = FakeNetwork::new(vec![("/app.js", AssetResponse::ok("fresh"))]);

        let response = cache.fetch(&AssetRequest::get("/app.js"), &network).unwrap();
        assert_eq!(response.body, b"cached".to_vec());
        assert!(network.calls.borrow().is_empty());
    }

    #[test]
    fn test_miss_populates_cache_with_ok_responses() {
        let mut cache = AssetCache::new("v1");
        let network = FakeNetwork::new(vec![
            ("/styles.css", AssetResponse::ok("body {}")),
            (
                "/missing.png",
                AssetResponse {
                    status: 404,
                    opaque: false,
                    body: Vec::new(),
                },
            ),
            (
                "/opaque.js",
                AssetResponse {
                    status: 200,
                    opaque: true,
                    body: Vec::new(),
                },
            ),
        ]);

        for path in ["/styles.css", "/missing.png", "/opaque.js"] {
            cache.fetch(&AssetRequest::get(path), &network).unwrap();
        }

        assert!(cache.lookup("/styles.css").is_some());
        assert!(cache.lookup("/missing.png").is_none());
        assert!(cache.lookup("/opaque.js").is_none());
    }

    #[test]
    fn test_non_get_and_cross_origin_bypass_cache() {
        let mut cache = AssetCache::new("v1");
        let network = FakeNetwork::new(vec![("/api", AssetResponse::ok("{}"))]);

        let post = AssetRequest {
            method: "POST".to_string(),
            ..AssetRequest::get("/api")
        };
        let foreign = AssetRequest {
            same_origin: false,
            ..AssetRequest::get("/api")
        };

        cache.fetch(&post, &network).unwrap();
        cache.fetch(&foreign, &network).unwrap();
        assert!(cache.lookup("/api").is_none());
        assert_eq!(network.calls.borrow().len(), 2);
    }

    #[test]
    fn test_offline_navigation_falls_back_to_root() {
        let mut cache = AssetCache::new("v1");
        cache.install(vec![(
            ROOT_DOCUMENT.to_string(),
            AssetResponse::ok("<html></html>"),
        )]);

        let response = cache
            .fetch(&AssetRequest::navigate("/history"), &FakeNetwork::offline())
            .unwrap();
        assert_eq!(response.body, b"<html></html>".to_vec());

        assert!(cache
            .fetch(&AssetRequest::get("/history.js"), &FakeNetwork::offline())
            .is_err());
    }
}
