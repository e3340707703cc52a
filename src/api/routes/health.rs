//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (both data tables load)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Loads the tables on first call, so a fresh process becomes ready on
/// its first probe. Load errors are logged and reported as 503.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    if state.store.is_loaded() {
        return StatusCode::OK;
    }

    match state.store.load_all() {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Data not ready");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// GET /health
///
/// Table sizes, flag cache and session counts.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let countries = state.store.countries().map(|c| c.len());
    let series_points = state.store.gdp_series().map(|s| s.len());

    let status = match (&countries, &series_points) {
        (Ok(_), Ok(_)) => "healthy",
        _ => "unhealthy",
    };

    Json(HealthResponse {
        status: status.to_string(),
        countries: countries.unwrap_or(0),
        series_points: series_points.unwrap_or(0),
        cached_flags: state.flags.cached_count().await,
        sessions: state.sessions.len().await,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Fixture, COUNTRIES_JSON};

    fn state_for(fixture: &Fixture) -> Arc<AppState> {
        Arc::new(AppState::new(
            Arc::clone(&fixture.store),
            Arc::clone(&fixture.flags),
            fixture.assets.clone(),
            10,
        ))
    }

    #[tokio::test]
    async fn test_liveness() {
        assert_eq!(liveness().await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readiness_loads_tables() {
        let fixture = Fixture::new();
        assert!(!fixture.store.is_loaded());

        let status = readiness(State(state_for(&fixture))).await;

        assert_eq!(status, StatusCode::OK);
        assert!(fixture.store.is_loaded());
    }

    #[tokio::test]
    async fn test_broken_series_is_not_ready() {
        let fixture = Fixture::with_data(COUNTRIES_JSON, "country,year,gdp_usd\nBrazil,soon,1\n");
        let state = state_for(&fixture);

        assert_eq!(readiness(State(Arc::clone(&state))).await, StatusCode::SERVICE_UNAVAILABLE);

        let Json(health) = full_health(State(state)).await;
        assert_eq!(health.status, "unhealthy");
        assert_eq!(health.countries, 4);
        assert_eq!(health.series_points, 0);
    }

    #[tokio::test]
    async fn test_full_health_counts() {
        let fixture = Fixture::new();
        let state = state_for(&fixture);
        state.sessions.get_or_create(None).await;
        state.flags.resolve(Some("BR")).await;

        let Json(health) = full_health(State(state)).await;

        assert_eq!(health.status, "healthy");
        assert_eq!(health.series_points, 13);
        assert_eq!(health.cached_flags, 1);
        assert_eq!(health.sessions, 1);
    }
}
