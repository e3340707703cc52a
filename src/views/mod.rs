//! Views
//!
//! The dashboard has two views and one piece of state:
//!
//! ```text
//!            select(C)                 select(C')
//! Landing ─────────────> Dashboard(C) ───────────> Dashboard(C')
//!    ^                        │
//!    └──────── back() ────────┘
//! ```
//!
//! A `ViewRouter` owns the state for one session. Every transition is
//! followed by a full `render`, so the page always reflects the current
//! state.

pub mod dashboard;
pub mod landing;

use crate::config::AssetsConfig;
use crate::data::{DataResult, DataStore};
use crate::flags::FlagResolver;
use crate::render::Page;

/// Placeholder entry heading the landing picker
pub const SELECT_PLACEHOLDER: &str = "Select your country…";

/// Everything a view needs to render
#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub store: &'a DataStore,
    pub flags: &'a FlagResolver,
    pub assets: &'a AssetsConfig,
}

/// Which view is showing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Landing,
    Dashboard(String),
}

/// Session state plus dispatch to the matching view
#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    state: ViewState,
}

impl ViewRouter {
    /// New router in the `Landing` state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Selected country, if on the dashboard
    pub fn selected(&self) -> Option<&str> {
        match &self.state {
            ViewState::Landing => None,
            ViewState::Dashboard(name) => Some(name),
        }
    }

    /// Show the dashboard for `name`
    ///
    /// A blank name or the picker placeholder leaves the state unchanged.
    /// Returns whether the state changed.
    pub fn select(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || name == SELECT_PLACEHOLDER {
            return false;
        }
        if self.selected() == Some(name) {
            return false;
        }

        tracing::debug!(country = %name, "Selecting country");
        self.state = ViewState::Dashboard(name.to_string());
        true
    }

    /// Return to the landing view
    pub fn back(&mut self) {
        self.state = ViewState::Landing;
    }

    /// Render the view for the current state
    ///
    /// A selected country that is no longer in the list resets to `Landing`.
    pub async fn render(&mut self, ctx: &ViewContext<'_>) -> DataResult<Page> {
        if let ViewState::Dashboard(name) = &self.state {
            match ctx.store.country(name)? {
                Some(country) => return dashboard::render(ctx, &country).await,
                None => {
                    tracing::warn!(
                        country = %name,
                        "Selected country not found, returning to landing"
                    );
                    self.back();
                }
            }
        }

        landing::render(ctx)
    }
}
