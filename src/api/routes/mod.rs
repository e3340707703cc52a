//! Route Handlers
//!
//! Route handlers organized by functionality.

pub mod countries;
pub mod health;
pub mod pages;
