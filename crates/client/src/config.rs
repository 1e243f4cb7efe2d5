use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// `config.toml` as it was when the crate was built. Browsers have no
/// working directory or process environment, so the web build reads this.
pub const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Load the configuration once and store it in the global `OnceLock`.
/// Safe to call multiple times; only the first call reads anything.
///
/// Native builds read `.env` and `config.toml` at start-up; the web build
/// uses [`embedded_config`]. A missing or unparseable file yields the
/// defaults.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        #[cfg(target_arch = "wasm32")]
        let config = embedded_config();
        #[cfg(not(target_arch = "wasm32"))]
        let config = runtime_config();

        tracing::info!(
            api = %config.api.base_url,
            timeout_secs = config.api.timeout_secs,
            "configuration loaded"
        );
        config
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> AppConfig {
    let _ = dotenvy::dotenv();

    let mut config = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::info!("{CONFIG_PATH} not found ({e}), using defaults");
            AppConfig::default()
        }
    };
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    config
}

/// The build-time `config.toml` with overrides taken from the environment
/// of the build.
pub fn embedded_config() -> AppConfig {
    let mut config = parse_config(EMBEDDED_CONFIG);
    apply_env_overrides(&mut config, build_env);
    config
}

/// Override variables as they were set when the crate was compiled.
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "PORTAL_API_BASE_URL" => option_env!("PORTAL_API_BASE_URL"),
        "PORTAL_API_TIMEOUT_SECS" => option_env!("PORTAL_API_TIMEOUT_SECS"),
        "WEATHER_API_KEY" => option_env!("WEATHER_API_KEY"),
        "PORTAL_STORAGE_DIR" => option_env!("PORTAL_STORAGE_DIR"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Parse `config.toml` contents, falling back to defaults on error.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("failed to parse {CONFIG_PATH}: {e}; using defaults");
        AppConfig::default()
    })
}

/// Apply `PORTAL_*` / `WEATHER_API_KEY` overrides read through `lookup`.
pub fn apply_env_overrides(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup("PORTAL_API_BASE_URL").filter(|v| !v.trim().is_empty()) {
        config.api.base_url = url.trim().to_string();
    }
    if let Some(raw) = lookup("PORTAL_API_TIMEOUT_SECS") {
        match raw.trim().to_lowercase().as_str() {
            "none" | "off" => config.api.timeout_secs = 0,
            value => match value.parse() {
                Ok(secs) => config.api.timeout_secs = secs,
                Err(_) => tracing::warn!(value = %raw, "ignoring invalid PORTAL_API_TIMEOUT_SECS"),
            },
        }
    }
    if let Some(key) = lookup("WEATHER_API_KEY") {
        config.weather.api_key = key.trim().to_string();
    }
    if let Some(dir) = lookup("PORTAL_STORAGE_DIR").filter(|v| !v.trim().is_empty()) {
        config.session.storage_dir = dir;
    }
}
