//! Page Routes
//!
//! Server-rendered views. Each browser session owns one `ViewRouter`;
//! actions mutate it and redirect back to `/`, which re-renders the whole
//! page from the new state.
//!
//! - GET / - Current view for this session
//! - POST /select - Show the dashboard for a country
//! - POST /back - Return to the landing view

use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use std::sync::Arc;

use crate::api::dto::SelectForm;
use crate::api::error::{ApiError, ApiResult};
use crate::api::session::{session_cookie, session_id_from_headers, Session};
use crate::api::state::AppState;
use crate::views::SELECT_PLACEHOLDER;

/// GET /
///
/// Render the session's current view.
pub async fn index(State(state): State<Arc<AppState>>, headers: HeaderMap) -> ApiResult<Response> {
    let session = state
        .sessions
        .get_or_create(session_id_from_headers(&headers))
        .await;

    let page = {
        let mut router = session.router.lock().await;
        router.render(&state.view_context()).await?
    };

    with_cookie(&session, Html(page.to_html()).into_response())
}

/// POST /select
///
/// Switch to the dashboard for the submitted country.
pub async fn select(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(form): Form<SelectForm>,
) -> ApiResult<Response> {
    let name = form.country.trim();
    let is_placeholder = name.is_empty() || name == SELECT_PLACEHOLDER;

    if !is_placeholder && state.store.country(name)?.is_none() {
        return Err(ApiError::NotFound(format!("Country '{}' not found", name)));
    }

    let session = state
        .sessions
        .get_or_create(session_id_from_headers(&headers))
        .await;

    if session.router.lock().await.select(name) {
        tracing::info!(session_id = %session.id, country = %name, "Country selected");
    }

    with_cookie(&session, Redirect::to("/").into_response())
}

/// POST /back
///
/// Return to the landing view.
pub async fn back(State(state): State<Arc<AppState>>, headers: HeaderMap) -> ApiResult<Response> {
    let session = state
        .sessions
        .get_or_create(session_id_from_headers(&headers))
        .await;

    session.router.lock().await.back();
    tracing::info!(session_id = %session.id, "Returned to landing");

    with_cookie(&session, Redirect::to("/").into_response())
}

/// Attach the session cookie when the session was just created
fn with_cookie(session: &Session, mut response: Response) -> ApiResult<Response> {
    if session.created {
        let cookie = HeaderValue::from_str(&session_cookie(session.id))
            .map_err(|e| ApiError::Internal(format!("Invalid session cookie: {}", e)))?;
        response.headers_mut().insert(SET_COOKIE, cookie);
    }
    Ok(response)
}
