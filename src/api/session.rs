//! Browser Sessions
//!
//! Each browser gets an opaque cookie and its own `ViewRouter`. Routers sit
//! behind a per-session mutex so renders for one session never overlap.
//! When the store is full the least recently used session is dropped.

use axum::http::{header::COOKIE, HeaderMap};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::views::ViewRouter;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "hostscope_session";

/// Shared handle to one session's router
pub type SessionRouter = Arc<Mutex<ViewRouter>>;

/// In-memory session store
pub struct SessionStore {
    sessions: Mutex<HashMap<Uuid, SessionEntry>>,
    max_sessions: usize,
}

struct SessionEntry {
    router: SessionRouter,
    last_seen: Instant,
}

/// Result of a session lookup
pub struct Session {
    pub id: Uuid,
    pub router: SessionRouter,
    /// True when the id was just issued and the cookie must be set
    pub created: bool,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            max_sessions: max_sessions.max(1),
        }
    }

    /// Find the session for `id`, or start a new one in the landing state
    pub async fn get_or_create(&self, id: Option<Uuid>) -> Session {
        let mut sessions = self.sessions.lock().await;

        if let Some(id) = id {
            if let Some(entry) = sessions.get_mut(&id) {
                entry.last_seen = Instant::now();
                return Session {
                    id,
                    router: Arc::clone(&entry.router),
                    created: false,
                };
            }
        }

        if sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| *id);
            if let Some(oldest) = oldest {
                sessions.remove(&oldest);
                tracing::debug!(session_id = %oldest, "Evicted least recently used session");
            }
        }

        let id = Uuid::new_v4();
        let router = Arc::new(Mutex::new(ViewRouter::new()));
        sessions.insert(
            id,
            SessionEntry {
                router: Arc::clone(&router),
                last_seen: Instant::now(),
            },
        );

        tracing::info!(session_id = %id, "Session started");
        Session {
            id,
            router,
            created: true,
        }
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Session id from the request's `Cookie` headers, if present and well-formed
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` value for a session id
pub fn session_cookie(id: Uuid) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}
