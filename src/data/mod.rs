//! Country Data
//!
//! Read-only tables backing the dashboard:
//!
//! - **types**: `Country` records and `GdpSeriesPoint` rows
//! - **store**: `DataStore`, loading both tables once and serving lookups
//! - **error**: `DataLoadError`
//!
//! Both tables are loaded from static files and never written back.
//!
//! ```text
//! countries_mock.json ─┐
//!                      ├─> DataStore (OnceCell per table) ─> views / api
//! gdp_10y_mock.csv ────┘
//! ```

pub mod error;
pub mod store;
pub mod types;

pub use error::{DataLoadError, DataResult};
pub use store::DataStore;
pub use types::{Country, GdpSeriesPoint};
