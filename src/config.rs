//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub flags: FlagConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Sessions kept in memory before the least recently used is dropped
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8501
}

fn default_max_sessions() -> usize {
    10_000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_sessions: default_max_sessions(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Location of the static data tables
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_countries_file")]
    pub countries_file: String,

    #[serde(default = "default_gdp_file")]
    pub gdp_file: String,
}

fn default_data_dir() -> String {
    "./data".to_string()
}

fn default_countries_file() -> String {
    "countries_mock.json".to_string()
}

fn default_gdp_file() -> String {
    "gdp_10y_mock.csv".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            countries_file: default_countries_file(),
            gdp_file: default_gdp_file(),
        }
    }
}

/// Optional image assets
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    /// Landing backgrounds, first existing file wins
    #[serde(default = "default_landing_backgrounds")]
    pub landing_backgrounds: Vec<String>,

    #[serde(default = "default_logo")]
    pub logo: String,
}

fn default_assets_dir() -> String {
    "./assets".to_string()
}

fn default_landing_backgrounds() -> Vec<String> {
    vec![
        "globe_background.jpg".to_string(),
        "globe_background.jpeg".to_string(),
        "globe_background.png".to_string(),
        "globe.png".to_string(),
    ]
}

fn default_logo() -> String {
    "fifa_logo.png".to_string()
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            assets_dir: default_assets_dir(),
            landing_backgrounds: default_landing_backgrounds(),
            logo: default_logo(),
        }
    }
}

impl AssetsConfig {
    /// Directory holding per-country flag images (`<CODE>.png`)
    pub fn flags_dir(&self) -> PathBuf {
        Path::new(&self.assets_dir).join("flags")
    }

    /// First landing background that exists on disk
    pub fn landing_background(&self) -> Option<PathBuf> {
        let dir = Path::new(&self.assets_dir);
        self.landing_backgrounds
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Corner logo, if present on disk
    pub fn logo_path(&self) -> Option<PathBuf> {
        let path = Path::new(&self.assets_dir).join(&self.logo);
        path.is_file().then_some(path)
    }
}

/// Flag CDN client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FlagConfig {
    #[serde(default = "default_cdn_base_url")]
    pub cdn_base_url: String,

    #[serde(default = "default_flag_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Keep failed lookups cached instead of retrying on the next render
    #[serde(default = "default_cache_failures")]
    pub cache_failures: bool,
}

fn default_cdn_base_url() -> String {
    "https://flagcdn.com/w640".to_string()
}

fn default_flag_timeout() -> u64 {
    12
}

fn default_user_agent() -> String {
    format!(
        "Mozilla/5.0 (compatible; hostscope/{}; +https://flagcdn.com)",
        env!("CARGO_PKG_VERSION")
    )
}

fn default_cache_failures() -> bool {
    true
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            cdn_base_url: default_cdn_base_url(),
            request_timeout_secs: default_flag_timeout(),
            user_agent: default_user_agent(),
            cache_failures: default_cache_failures(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// Logs which file was used or why one was skipped; install a subscriber
    /// first (see `logging::with_bootstrap_logging`).
    pub fn load_default() -> Self {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("hostscope").join("config.toml")),
            Some(PathBuf::from("/etc/hostscope/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// First of `paths` that exists and parses, else defaults plus env
    pub(crate) fn load_first(paths: &[PathBuf]) -> Self {
        for path in paths {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Server overrides
        if let Some(host) = lookup("HOSTSCOPE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("HOSTSCOPE_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Data and asset locations
        if let Some(data_dir) = lookup("HOSTSCOPE_DATA_DIR") {
            self.data.data_dir = data_dir;
        }
        if let Some(assets_dir) = lookup("HOSTSCOPE_ASSETS_DIR") {
            self.assets.assets_dir = assets_dir;
        }

        // Flag CDN
        if let Some(url) = lookup("HOSTSCOPE_FLAG_CDN_URL") {
            self.flags.cdn_base_url = url;
        }

        // Logging overrides
        if let Some(level) = lookup("HOSTSCOPE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("HOSTSCOPE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Hostscope Configuration
#
# Environment variables override these settings:
# - HOSTSCOPE_HOST
# - HOSTSCOPE_PORT
# - HOSTSCOPE_DATA_DIR
# - HOSTSCOPE_ASSETS_DIR
# - HOSTSCOPE_FLAG_CDN_URL
# - HOSTSCOPE_LOG_LEVEL
# - HOSTSCOPE_LOG_FORMAT

[server]
# Dashboard server host
host = "0.0.0.0"

# Dashboard server port
port = 8501

# Browser sessions kept in memory (least recently used is dropped first)
max_sessions = 10000

[data]
# Directory holding the country list and GDP series
data_dir = "./data"

# Country list (JSON array of country records)
countries_file = "countries_mock.json"

# GDP series (CSV with columns country,year,gdp_usd)
gdp_file = "gdp_10y_mock.csv"

[assets]
# Directory holding optional images; per-country flags go in <assets_dir>/flags/<CODE>.png
assets_dir = "./assets"

# Landing background candidates, first existing file wins
landing_backgrounds = [
    "globe_background.jpg",
    "globe_background.jpeg",
    "globe_background.png",
    "globe.png",
]

# Optional corner logo on the landing page
logo = "fifa_logo.png"

[flags]
# Flag image CDN; images are fetched from <cdn_base_url>/<code>.png
cdn_base_url = "https://flagcdn.com/w640"

# Request timeout in seconds
request_timeout_secs = 12

# Keep failed lookups cached for the life of the process
cache_failures = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
