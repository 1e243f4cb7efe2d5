use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level config file structure matching `config.toml`.
///
/// Every section and field has a default so that a missing or partial
/// file still yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// University backend connection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds; `0` disables it.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Third-party forecast provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key: String::new(),
        }
    }
}

/// Where the signed-in user is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Directory of the file-backed store on desktop builds.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            storage_dir: default_storage_dir(),
        }
    }
}

/// Delays before the UI navigates on its own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    #[serde(default = "default_login_redirect_ms")]
    pub login_redirect_ms: u64,
    #[serde(default = "default_register_redirect_ms")]
    pub register_redirect_ms: u64,
    #[serde(default = "default_access_denied_redirect_ms")]
    pub access_denied_redirect_ms: u64,
}

impl UiConfig {
    pub fn login_redirect(&self) -> Duration {
        Duration::from_millis(self.login_redirect_ms)
    }

    pub fn register_redirect(&self) -> Duration {
        Duration::from_millis(self.register_redirect_ms)
    }

    pub fn access_denied_redirect(&self) -> Duration {
        Duration::from_millis(self.access_denied_redirect_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            login_redirect_ms: default_login_redirect_ms(),
            register_redirect_ms: default_register_redirect_ms(),
            access_denied_redirect_ms: default_access_denied_redirect_ms(),
        }
    }
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_weather_base_url() -> String {
    "https://api.weatherapi.com".to_string()
}

fn default_storage_key() -> String {
    "user".to_string()
}

fn default_storage_dir() -> String {
    ".portal".to_string()
}

fn default_login_redirect_ms() -> u64 {
    1000
}

fn default_register_redirect_ms() -> u64 {
    2000
}

fn default_access_denied_redirect_ms() -> u64 {
    2000
}
