//! Country Routes
//!
//! Read-only JSON view of the data behind the dashboard.
//!
//! - GET /api/v1/countries - List countries
//! - GET /api/v1/countries/:name - One country with display strings
//! - GET /api/v1/countries/:name/gdp - GDP series sorted by year

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    CountryListResponse, CountryResponse, CountrySummary, FormattedFigures, GdpPointDto,
    GdpSeriesResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::data::Country;

/// GET /api/v1/countries
pub async fn list_countries(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CountryListResponse>> {
    let countries = state.store.countries()?;
    let summaries: Vec<CountrySummary> = countries.iter().map(CountrySummary::from).collect();

    Ok(Json(CountryListResponse {
        total: summaries.len(),
        countries: summaries,
    }))
}

/// GET /api/v1/countries/:name
pub async fn get_country(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<CountryResponse>> {
    let country = find_country(&state, &name)?;
    let flag_url = country.flag_code().map(|code| state.flags.flag_url(code));

    Ok(Json(CountryResponse {
        formatted: FormattedFigures::from(&country),
        flag_url,
        country,
    }))
}

/// GET /api/v1/countries/:name/gdp
pub async fn get_gdp_series(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<GdpSeriesResponse>> {
    let country = find_country(&state, &name)?;
    let points = state.store.series_for(&country.name)?;

    Ok(Json(GdpSeriesResponse {
        country: country.name,
        points: points.iter().map(GdpPointDto::from).collect(),
    }))
}

fn find_country(state: &AppState, name: &str) -> ApiResult<Country> {
    state
        .store
        .country(name)?
        .ok_or_else(|| ApiError::NotFound(format!("Country '{}' not found", name)))
}
