//! Data Transfer Objects
//!
//! Request and response types for the endpoints.

use serde::{Deserialize, Serialize};

use crate::data::{Country, GdpSeriesPoint};
use crate::format::{format_count, format_money, format_percent, format_score};

// ============================================
// PAGE FORMS
// ============================================

/// Country picker / switcher submission
#[derive(Debug, Deserialize)]
pub struct SelectForm {
    /// Selected country name; blank for the placeholder entry
    #[serde(default)]
    pub country: String,
}

// ============================================
// COUNTRY DTOs
// ============================================

/// Entry in the country list
#[derive(Debug, Serialize, Deserialize)]
pub struct CountrySummary {
    pub name: String,
    pub flag_code: Option<String>,
}

/// Country list response
#[derive(Debug, Serialize, Deserialize)]
pub struct CountryListResponse {
    pub countries: Vec<CountrySummary>,
    pub total: usize,
}

/// Display strings as shown on the dashboard
#[derive(Debug, Serialize, Deserialize)]
pub struct FormattedFigures {
    pub population: String,
    pub gdp: String,
    pub gdp_per_capita: String,
    pub gdp_lift: String,
    pub host_cost: String,
    pub net_impact: String,
    pub feasibility_score: String,
}

/// Single country response
#[derive(Debug, Serialize, Deserialize)]
pub struct CountryResponse {
    pub country: Country,
    pub formatted: FormattedFigures,
    /// CDN URL the flag background comes from, when a code exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_url: Option<String>,
}

/// One point of a GDP series
#[derive(Debug, Serialize, Deserialize)]
pub struct GdpPointDto {
    pub year: i32,
    pub gdp_usd: f64,
}

/// GDP series response, sorted by year
#[derive(Debug, Serialize, Deserialize)]
pub struct GdpSeriesResponse {
    pub country: String,
    pub points: Vec<GdpPointDto>,
}

impl From<&Country> for CountrySummary {
    fn from(country: &Country) -> Self {
        Self {
            name: country.name.clone(),
            flag_code: country.flag_code().map(str::to_string),
        }
    }
}

impl From<&Country> for FormattedFigures {
    fn from(country: &Country) -> Self {
        Self {
            population: format_count(country.population),
            gdp: format_money(Some(country.gdp_usd)),
            gdp_per_capita: format_money(Some(country.gdp_per_capita_usd)),
            gdp_lift: format_percent(country.wc_gdp_lift_pct),
            host_cost: format_money(country.wc_host_cost_usd),
            net_impact: format_money(country.wc_net_impact_usd),
            feasibility_score: format_score(country.feasibility_score),
        }
    }
}

impl From<&GdpSeriesPoint> for GdpPointDto {
    fn from(point: &GdpSeriesPoint) -> Self {
        Self {
            year: point.year,
            gdp_usd: point.gdp_usd,
        }
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" or "unhealthy"
    pub status: String,
    pub countries: usize,
    pub series_points: usize,
    pub cached_flags: usize,
    pub sessions: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
