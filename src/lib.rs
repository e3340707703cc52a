//! # HostScope
//!
//! World Cup host feasibility explorer: a small web app that lets you pick a
//! country and see its economy at a glance alongside a rough estimate of what
//! hosting the tournament would cost and return.
//!
//! ## Modules
//!
//! - [`data`]: Country table and GDP series, loaded once and shared
//! - [`flags`]: Flag lookup from local assets or the flag CDN, cached per code
//! - [`render`]: HTML page model, background styling and the GDP chart
//! - [`views`]: Landing and dashboard views plus the per-session view router
//! - [`api`]: Axum routes, sessions and server startup
//! - [`format`]: Display formatting for money, percentages and counts
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hostscope::data::DataStore;
//! use hostscope::format::format_money;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = DataStore::new("data/countries_mock.json", "data/gdp_10y_mock.csv");
//!
//!     if let Some(brazil) = store.country("Brazil")? {
//!         println!("{}: {}", brazil.name, format_money(Some(brazil.gdp_usd)));
//!     }
//!
//!     for point in store.series_for("Brazil")? {
//!         println!("{} {}", point.year, point.gdp_usd);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod data;
pub mod flags;
pub mod format;
pub mod logging;
pub mod render;
pub mod views;

#[cfg(test)]
mod testing;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, AppState};

pub use config::{
    AssetsConfig, Config, ConfigError, DataConfig, FlagConfig, LoggingConfig, ServerConfig,
};

pub use data::{Country, DataLoadError, DataResult, DataStore, GdpSeriesPoint};

pub use flags::{FlagCdnClient, FlagFetchError, FlagResolver, FlagSource};

pub use render::{ImageSource, Page, StyleDirective};

pub use views::{ViewContext, ViewRouter, ViewState};
