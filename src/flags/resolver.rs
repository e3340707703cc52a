//! Flag Resolver
//!
//! Local asset lookup with a memoized remote fallback. The cache is keyed
//! by the code as given and is never evicted. Each code gets its own
//! async once-cell, so concurrent first requests share a single fetch and
//! the map lock is never held across the network call.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{Mutex, OnceCell};

use super::client::FlagSource;
use crate::render::ImageSource;

type FlagCell = Arc<OnceCell<Option<Arc<[u8]>>>>;

/// Resolves country codes to flag images
pub struct FlagResolver {
    source: Arc<dyn FlagSource>,
    flags_dir: PathBuf,
    cache_failures: bool,
    cache: Mutex<HashMap<String, FlagCell>>,
}

impl FlagResolver {
    /// Create a resolver over a remote source and a local flags directory
    pub fn new(source: Arc<dyn FlagSource>, flags_dir: impl Into<PathBuf>) -> Self {
        Self {
            source,
            flags_dir: flags_dir.into(),
            cache_failures: true,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Builder method: whether failed fetches stay cached
    pub fn cache_failures(mut self, cache_failures: bool) -> Self {
        self.cache_failures = cache_failures;
        self
    }

    /// Resolve a code to an image
    ///
    /// Returns `None` for missing or malformed codes and for failed
    /// fetches; never errors.
    pub async fn resolve(&self, code: Option<&str>) -> Option<ImageSource> {
        let code = valid_code(code?)?;

        let local = self.local_path(code);
        if local.is_file() {
            tracing::debug!(code = %code, path = ?local, "Using local flag asset");
            return Some(ImageSource::File(local));
        }

        let data = self.fetch_cached(code).await?;
        Some(ImageSource::bytes(data, "png"))
    }

    /// Local asset path for a code, case as given
    pub fn local_path(&self, code: &str) -> PathBuf {
        self.flags_dir.join(format!("{}.png", code.trim()))
    }

    /// Remote URL for a code, for diagnostics
    pub fn flag_url(&self, code: &str) -> String {
        self.source.url_for(&code.trim().to_lowercase())
    }

    /// Number of codes with a settled cache entry
    pub async fn cached_count(&self) -> usize {
        let cache = self.cache.lock().await;
        cache.values().filter(|cell| cell.initialized()).count()
    }

    async fn fetch_cached(&self, code: &str) -> Option<Arc<[u8]>> {
        let cell = {
            let mut cache = self.cache.lock().await;
            Arc::clone(cache.entry(code.to_string()).or_default())
        };

        if self.cache_failures {
            cell.get_or_init(|| self.fetch_remote(code)).await.clone()
        } else {
            cell.get_or_try_init(|| async { self.fetch_remote(code).await.map(Some).ok_or(()) })
                .await
                .ok()
                .cloned()
                .flatten()
        }
    }

    async fn fetch_remote(&self, code: &str) -> Option<Arc<[u8]>> {
        let lower = code.to_lowercase();
        match self.source.fetch(&lower).await {
            Ok(data) if !data.is_empty() => Some(Arc::from(data)),
            Ok(_) => {
                tracing::warn!(code = %lower, "Flag fetch returned no data");
                None
            }
            Err(e) => {
                tracing::warn!(code = %lower, error = %e, "Flag fetch failed");
                None
            }
        }
    }
}

/// Trimmed code if it is exactly two characters
fn valid_code(code: &str) -> Option<&str> {
    let code = code.trim();
    (code.chars().count() == 2).then_some(code)
}
