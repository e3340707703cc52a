//! Data Store
//!
//! Loads the country list and the GDP series from disk on first use and
//! keeps them for the lifetime of the process. Nothing is ever evicted or
//! reloaded; the files are treated as static inputs.

use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::error::{DataLoadError, DataResult};
use super::types::{Country, GdpSeriesPoint};
use crate::config::DataConfig;

/// Memoized, read-only access to the two data tables
pub struct DataStore {
    countries_path: PathBuf,
    gdp_path: PathBuf,
    countries: OnceCell<Arc<[Country]>>,
    gdp_series: OnceCell<Arc<[GdpSeriesPoint]>>,
}

impl DataStore {
    /// Create a store reading from the given files
    ///
    /// Nothing is read until the first accessor call (or `load_all`).
    pub fn new(countries_path: impl Into<PathBuf>, gdp_path: impl Into<PathBuf>) -> Self {
        Self {
            countries_path: countries_path.into(),
            gdp_path: gdp_path.into(),
            countries: OnceCell::new(),
            gdp_series: OnceCell::new(),
        }
    }

    /// Create a store from the `[data]` config section
    pub fn from_config(config: &DataConfig) -> Self {
        let dir = Path::new(&config.data_dir);
        Self::new(dir.join(&config.countries_file), dir.join(&config.gdp_file))
    }

    /// Load both tables now, failing on the first error
    pub fn load_all(&self) -> DataResult<()> {
        let countries = self.countries()?;
        let series = self.gdp_series()?;
        tracing::info!(
            countries = countries.len(),
            series_points = series.len(),
            "Data tables loaded"
        );
        Ok(())
    }

    /// All countries, in file order
    pub fn countries(&self) -> DataResult<Arc<[Country]>> {
        self.countries
            .get_or_try_init(|| load_countries(&self.countries_path).map(Arc::from))
            .map(Arc::clone)
    }

    /// All GDP rows, in file order
    pub fn gdp_series(&self) -> DataResult<Arc<[GdpSeriesPoint]>> {
        self.gdp_series
            .get_or_try_init(|| load_gdp_series(&self.gdp_path).map(Arc::from))
            .map(Arc::clone)
    }

    /// Country names in file order
    pub fn country_names(&self) -> DataResult<Vec<String>> {
        Ok(self.countries()?.iter().map(|c| c.name.clone()).collect())
    }

    /// Look up a country by exact name
    pub fn country(&self, name: &str) -> DataResult<Option<Country>> {
        Ok(self.countries()?.iter().find(|c| c.name == name).cloned())
    }

    /// GDP rows for one country, sorted by year ascending
    pub fn series_for(&self, name: &str) -> DataResult<Vec<GdpSeriesPoint>> {
        let mut points: Vec<GdpSeriesPoint> = self
            .gdp_series()?
            .iter()
            .filter(|p| p.country == name)
            .cloned()
            .collect();
        points.sort_by_key(|p| p.year);
        Ok(points)
    }

    /// Whether both tables have been loaded
    pub fn is_loaded(&self) -> bool {
        self.countries.get().is_some() && self.gdp_series.get().is_some()
    }

    pub fn countries_path(&self) -> &Path {
        &self.countries_path
    }

    pub fn gdp_path(&self) -> &Path {
        &self.gdp_path
    }
}

fn load_countries(path: &Path) -> DataResult<Vec<Country>> {
    tracing::debug!(path = ?path, "Reading country list");

    let bytes = std::fs::read(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let countries: Vec<Country> =
        serde_json::from_slice(&bytes).map_err(|source| DataLoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = HashSet::new();
    for country in &countries {
        if !seen.insert(country.name.as_str()) {
            return Err(DataLoadError::Invalid {
                path: path.to_path_buf(),
                message: format!("duplicate country name: {}", country.name),
            });
        }
    }

    Ok(countries)
}

fn load_gdp_series(path: &Path) -> DataResult<Vec<GdpSeriesPoint>> {
    tracing::debug!(path = ?path, "Reading GDP series");

    let csv_err = |source: csv::Error| DataLoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = std::fs::File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut points = Vec::new();
    for record in reader.deserialize::<GdpSeriesPoint>() {
        points.push(record.map_err(csv_err)?);
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const COUNTRIES: &str = r#"[
        {"name": "Brazil", "capital": "Brasília", "population": 214300000,
         "gdp_usd": 1.92e12, "gdp_per_capita_usd": 8917, "iso2": "BR"},
        {"name": "Japan", "capital": "Tokyo", "population": 125700000,
         "gdp_usd": 4.2e12, "gdp_per_capita_usd": 33800, "iso2": "JP",
         "feasibility_score": 81}
    ]"#;

    const GDP: &str = "country,year,gdp_usd\n\
        Brazil,2016,1.80e12\n\
        Brazil,2014,2.46e12\n\
        Japan,2014,4.9e12\n\
        Brazil,2015.0,1.80e12\n";

    fn write_fixture(countries: &str, gdp: &str) -> (TempDir, DataStore) {
        let dir = tempfile::tempdir().unwrap();
        let countries_path = dir.path().join("countries.json");
        let gdp_path = dir.path().join("gdp.csv");
        std::fs::write(&countries_path, countries).unwrap();
        std::fs::write(&gdp_path, gdp).unwrap();
        let store = DataStore::new(countries_path, gdp_path);
        (dir, store)
    }

    #[test]
    fn test_load_countries_in_file_order() {
        let (_dir, store) = write_fixture(COUNTRIES, GDP);

        let names = store.country_names().unwrap();
        assert_eq!(names, vec!["Brazil", "Japan"]);

        let japan = store.country("Japan").unwrap().unwrap();
        assert_eq!(japan.feasibility_score, Some(81.0));
        assert!(store.country("Atlantis").unwrap().is_none());
    }

    #[test]
    fn test_series_filtered_and_sorted() {
        let (_dir, store) = write_fixture(COUNTRIES, GDP);

        let series = store.series_for("Brazil").unwrap();
        let years: Vec<i32> = series.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2014, 2015, 2016]);

        assert!(store.series_for("Atlantis").unwrap().is_empty());
    }

    #[test]
    fn test_tables_are_memoized() {
        let (dir, store) = write_fixture(COUNTRIES, GDP);

        let first = store.countries().unwrap();
        // Removing the files must not matter once loaded
        std::fs::remove_file(dir.path().join("countries.json")).unwrap();
        let second = store.countries().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_from_config_joins_data_dir() {
        let config = DataConfig {
            data_dir: "/srv/hostscope".to_string(),
            ..Default::default()
        };
        let store = DataStore::from_config(&config);

        assert_eq!(
            store.countries_path(),
            Path::new("/srv/hostscope/countries_mock.json")
        );
        assert_eq!(store.gdp_path(), Path::new("/srv/hostscope/gdp_10y_mock.csv"));
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_load_all_marks_loaded() {
        let (_dir, store) = write_fixture(COUNTRIES, GDP);
        assert!(!store.is_loaded());
        store.load_all().unwrap();
        assert!(store.is_loaded());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = DataStore::new(dir.path().join("nope.json"), dir.path().join("nope.csv"));

        assert!(matches!(store.countries(), Err(DataLoadError::Io { .. })));
        assert!(matches!(store.gdp_series(), Err(DataLoadError::Io { .. })));
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let (_dir, store) = write_fixture("{not json", GDP);
        assert!(matches!(store.countries(), Err(DataLoadError::Json { .. })));
    }

    #[test]
    fn test_malformed_year_is_csv_error() {
        let (_dir, store) = write_fixture(COUNTRIES, "country,year,gdp_usd\nBrazil,soon,1.0\n");
        assert!(matches!(store.gdp_series(), Err(DataLoadError::Csv { .. })));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let dup = r#"[
            {"name": "Chile", "capital": "Santiago", "population": 1, "gdp_usd": 1, "gdp_per_capita_usd": 1},
            {"name": "Chile", "capital": "Santiago", "population": 1, "gdp_usd": 1, "gdp_per_capita_usd": 1}
        ]"#;
        let (_dir, store) = write_fixture(dup, GDP);
        assert!(matches!(store.countries(), Err(DataLoadError::Invalid { .. })));
    }
}
