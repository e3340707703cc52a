//! Flag Images
//!
//! Resolves a two-letter country code to a background image:
//!
//! 1. a local asset at `<assets_dir>/flags/<CODE>.png`, if present
//! 2. otherwise one fetch from the flag CDN, cached per code for the
//!    lifetime of the process
//!
//! ## Architecture
//!
//! - **FlagSource**: trait for the remote side
//! - **FlagCdnClient**: `reqwest` implementation against flagcdn.com
//! - **FlagResolver**: local lookup + memoized remote fetch

mod client;
mod resolver;

pub use client::{flag_url, FlagCdnClient, FlagFetchError, FlagSource};
pub use resolver::FlagResolver;
