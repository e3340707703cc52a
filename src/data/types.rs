//! Core data types for the dashboard tables
//!
//! - `Country`: one entry of the country list
//! - `GdpSeriesPoint`: one (country, year, GDP) row of the time series

use serde::{Deserialize, Deserializer, Serialize};

/// A country record from the country list
///
/// `name` is unique and is the join key into the GDP series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Country {
    /// Display name, also the selection key
    pub name: String,
    /// Capital city
    pub capital: String,
    /// Population count
    pub population: u64,
    /// Gross domestic product in current USD
    pub gdp_usd: f64,
    /// GDP per capita in current USD
    pub gdp_per_capita_usd: f64,
    /// ISO 3166-1 alpha-2 code
    #[serde(default)]
    pub iso2: Option<String>,
    /// Explicit flag code, takes precedence over `iso2`
    #[serde(default)]
    pub flag_code: Option<String>,
    /// Projected GDP lift from hosting, in percent
    #[serde(default)]
    pub wc_gdp_lift_pct: Option<f64>,
    /// Estimated hosting cost in USD
    #[serde(default)]
    pub wc_host_cost_usd: Option<f64>,
    /// Estimated net impact in USD (may be negative)
    #[serde(default)]
    pub wc_net_impact_usd: Option<f64>,
    /// Opaque 0-100 feasibility score
    #[serde(default)]
    pub feasibility_score: Option<f64>,
}

impl Country {
    /// Create a country with the required fields; optional fields are empty
    pub fn new(
        name: impl Into<String>,
        capital: impl Into<String>,
        population: u64,
        gdp_usd: f64,
        gdp_per_capita_usd: f64,
    ) -> Self {
        Self {
            name: name.into(),
            capital: capital.into(),
            population,
            gdp_usd,
            gdp_per_capita_usd,
            iso2: None,
            flag_code: None,
            wc_gdp_lift_pct: None,
            wc_host_cost_usd: None,
            wc_net_impact_usd: None,
            feasibility_score: None,
        }
    }

    /// Builder method: set the ISO2 code
    pub fn iso2(mut self, code: impl Into<String>) -> Self {
        self.iso2 = Some(code.into());
        self
    }

    /// Builder method: set the hosting figures
    pub fn hosting(
        mut self,
        gdp_lift_pct: Option<f64>,
        host_cost_usd: Option<f64>,
        net_impact_usd: Option<f64>,
        feasibility_score: Option<f64>,
    ) -> Self {
        self.wc_gdp_lift_pct = gdp_lift_pct;
        self.wc_host_cost_usd = host_cost_usd;
        self.wc_net_impact_usd = net_impact_usd;
        self.feasibility_score = feasibility_score;
        self
    }

    /// Code used for flag lookup: `flag_code` if set, else `iso2`
    ///
    /// Blank strings count as missing.
    pub fn flag_code(&self) -> Option<&str> {
        fn non_blank(code: &Option<String>) -> Option<&str> {
            code.as_deref().filter(|c| !c.trim().is_empty())
        }
        non_blank(&self.flag_code).or_else(|| non_blank(&self.iso2))
    }
}

/// One year of GDP for one country
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GdpSeriesPoint {
    /// Country name, matches `Country::name`
    pub country: String,
    /// Calendar year
    #[serde(deserialize_with = "coerce_year")]
    pub year: i32,
    /// GDP in current USD
    pub gdp_usd: f64,
}

impl GdpSeriesPoint {
    pub fn new(country: impl Into<String>, year: i32, gdp_usd: f64) -> Self {
        Self {
            country: country.into(),
            year,
            gdp_usd,
        }
    }
}

/// Accepts `2014` as well as `2014.0`; anything non-integral is an error
fn coerce_year<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_year(&raw).map_err(serde::de::Error::custom)
}

fn parse_year(raw: &str) -> Result<i32, String> {
    let raw = raw.trim();
    if let Ok(year) = raw.parse::<i32>() {
        return Ok(year);
    }

    match raw.parse::<f64>() {
        Ok(v) if v.fract() == 0.0 && v >= i32::MIN as f64 && v <= i32::MAX as f64 => {
            Ok(v as i32)
        }
        _ => Err(format!("invalid year: {:?}", raw)),
    }
}
