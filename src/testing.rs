//! Shared test fixture: a temp data dir, an assets dir and a fake flag CDN

use async_trait::async_trait;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

use crate::config::AssetsConfig;
use crate::data::DataStore;
use crate::flags::{flag_url, FlagFetchError, FlagResolver, FlagSource};
use crate::views::ViewContext;

pub const COUNTRIES_JSON: &str = r#"[
    {"name": "Brazil", "capital": "Brasília", "population": 214300000,
     "gdp_usd": 1.92e12, "gdp_per_capita_usd": 8917, "iso2": "BR",
     "wc_gdp_lift_pct": 0.4, "wc_host_cost_usd": 1.4e10,
     "wc_net_impact_usd": -3.2e9, "feasibility_score": 64},
    {"name": "Japan", "capital": "Tokyo", "population": 125700000,
     "gdp_usd": 4.2e12, "gdp_per_capita_usd": 33800, "flag_code": "JP"},
    {"name": "Zembla", "capital": "Onhava", "population": 1200000,
     "gdp_usd": 2.3e9, "gdp_per_capita_usd": 1916, "iso2": "ZZ"},
    {"name": "Atlantis", "capital": "Poseidonia", "population": 5000,
     "gdp_usd": 999, "gdp_per_capita_usd": 0.2}
]"#;

pub const GDP_CSV: &str = "country,year,gdp_usd
Brazil,2019,1.87e12
Brazil,2014,2.46e12
Brazil,2015,1.80e12
Brazil,2016,1.80e12
Brazil,2017,2.06e12
Brazil,2018,1.92e12
Brazil,2020,1.48e12
Brazil,2021,1.65e12
Brazil,2022,1.92e12
Brazil,2023,2.17e12
Japan,2022,4.26e12
Japan,2023,4.21e12
Zembla,2023,2.3e9
";

/// Serves a PNG for `br` and `jp`, fails everything else
pub struct FakeCdn {
    calls: AtomicUsize,
}

impl FakeCdn {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FlagSource for FakeCdn {
    async fn fetch(&self, code: &str) -> Result<Vec<u8>, FlagFetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match code {
            "br" | "jp" => Ok(format!("flag-{}", code).into_bytes()),
            _ => Err(FlagFetchError::Status {
                status: 404,
                url: self.url_for(code),
            }),
        }
    }

    fn url_for(&self, code: &str) -> String {
        flag_url("https://flagcdn.com/w640", code)
    }
}

pub struct Fixture {
    pub dir: TempDir,
    pub store: Arc<DataStore>,
    pub flags: Arc<FlagResolver>,
    pub cdn: Arc<FakeCdn>,
    pub assets: AssetsConfig,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_data(COUNTRIES_JSON, GDP_CSV)
    }

    pub fn with_data(countries: &str, gdp: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");
        let assets_dir = dir.path().join("assets");
        std::fs::create_dir_all(&data_dir).unwrap();
        std::fs::create_dir_all(assets_dir.join("flags")).unwrap();

        std::fs::write(data_dir.join("countries_mock.json"), countries).unwrap();
        std::fs::write(data_dir.join("gdp_10y_mock.csv"), gdp).unwrap();

        let store = Arc::new(DataStore::new(
            data_dir.join("countries_mock.json"),
            data_dir.join("gdp_10y_mock.csv"),
        ));
        let assets = AssetsConfig {
            assets_dir: assets_dir.to_string_lossy().to_string(),
            ..Default::default()
        };
        let cdn = Arc::new(FakeCdn {
            calls: AtomicUsize::new(0),
        });
        let flags = Arc::new(FlagResolver::new(
            Arc::clone(&cdn) as Arc<dyn FlagSource>,
            assets.flags_dir(),
        ));

        Self {
            dir,
            store,
            flags,
            cdn,
            assets,
        }
    }

    pub fn context(&self) -> ViewContext<'_> {
        ViewContext {
            store: &self.store,
            flags: &self.flags,
            assets: &self.assets,
        }
    }

    pub fn assets_dir(&self) -> &Path {
        Path::new(&self.assets.assets_dir)
    }

    pub fn write_asset(&self, name: &str, bytes: &[u8]) {
        std::fs::write(self.assets_dir().join(name), bytes).unwrap();
    }
}
