//! Application State
//!
//! Shared state accessible by all handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use super::error::StartupError;
use super::session::SessionStore;
use crate::config::{AssetsConfig, Config};
use crate::data::DataStore;
use crate::flags::{FlagCdnClient, FlagResolver};
use crate::views::ViewContext;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Country list and GDP series
    pub store: Arc<DataStore>,
    /// Local/CDN flag lookup with its process-wide cache
    pub flags: Arc<FlagResolver>,
    /// Optional image assets
    pub assets: Arc<AssetsConfig>,
    /// Per-browser view routers
    pub sessions: Arc<SessionStore>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        store: Arc<DataStore>,
        flags: Arc<FlagResolver>,
        assets: AssetsConfig,
        max_sessions: usize,
    ) -> Self {
        Self {
            store,
            flags,
            assets: Arc::new(assets),
            sessions: Arc::new(SessionStore::new(max_sessions)),
            start_time: Instant::now(),
        }
    }

    /// Build the state from configuration, loading both data tables eagerly
    pub fn from_config(config: &Config) -> Result<Self, StartupError> {
        let store = Arc::new(DataStore::from_config(&config.data));
        store.load_all()?;

        let client = FlagCdnClient::new(&config.flags)?;
        let flags = FlagResolver::new(Arc::new(client), config.assets.flags_dir())
            .cache_failures(config.flags.cache_failures);

        Ok(Self::new(
            store,
            Arc::new(flags),
            config.assets.clone(),
            config.server.max_sessions,
        ))
    }

    /// Borrow the pieces a view needs
    pub fn view_context(&self) -> ViewContext<'_> {
        ViewContext {
            store: &self.store,
            flags: &self.flags,
            assets: &self.assets,
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
