/// Service configuration.
///
/// Settings load from a TOML file, then API keys may be overridden from
/// the environment (a `.env` file is honored via dotenv) so keys never
/// have to live in a committed config file.
///
/// ```toml
/// # floodrisk.toml
/// weatherapi_key = "..."
/// newsdata_key = "..."
/// nominatim_user_agent = "floodrisk-service"
/// request_timeout_secs = 10
/// # log_file = "/var/log/floodrisk.log"
/// ```

use serde::Deserialize;
use std::env;
use std::fs;

/// Environment variable overriding `weatherapi_key`.
pub const ENV_WEATHERAPI_KEY: &str = "WEATHERAPI_KEY";
/// Environment variable overriding `newsdata_key`.
pub const ENV_NEWSDATA_KEY: &str = "NEWSDATA_KEY";

fn default_user_agent() -> String {
    "floodrisk-service".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    /// WeatherAPI.com key. May be empty in the file and supplied via env.
    #[serde(default)]
    pub weatherapi_key: String,
    /// NewsData.io key. May be empty in the file and supplied via env.
    #[serde(default)]
    pub newsdata_key: String,
    /// User-Agent sent to Nominatim (its usage policy requires one).
    #[serde(default = "default_user_agent")]
    pub nominatim_user_agent: String,
    /// Per-request timeout for upstream calls.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Optional log file path; console-only logging when absent.
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            weatherapi_key: String::new(),
            newsdata_key: String::new(),
            nominatim_user_agent: default_user_agent(),
            request_timeout_secs: default_timeout_secs(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Parses a TOML config document.
    pub fn from_toml(document: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(document).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Loads configuration from a TOML file, then applies env overrides.
    pub fn load(path: &str) -> Result<AppConfig, ConfigError> {
        let document = fs::read_to_string(path)
            .map_err(|e| ConfigError::Unreadable(path.to_string(), e.to_string()))?;
        let mut config = Self::from_toml(&document)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Replaces API keys with environment values where set. Loads `.env`
    /// first so local development keys are picked up.
    pub fn apply_env_overrides(&mut self) {
        dotenv::dotenv().ok();
        if let Ok(key) = env::var(ENV_WEATHERAPI_KEY) {
            self.weatherapi_key = key;
        }
        if let Ok(key) = env::var(ENV_NEWSDATA_KEY) {
            self.newsdata_key = key;
        }
    }

    /// Builds the shared HTTP client with the configured timeout.
    pub fn http_client(&self) -> Result<reqwest::blocking::Client, ConfigError> {
        reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(self.request_timeout_secs))
            .build()
            .map_err(|e| ConfigError::Invalid(format!("HTTP client: {}", e)))
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Unreadable(String, String),
    /// The config document did not parse or a value was unusable.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Unreadable(path, err) => {
                write!(f, "cannot read config file {}: {}", path, err)
            }
            ConfigError::Invalid(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
