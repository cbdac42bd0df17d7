use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PAGE_TITLE: &str = "Log In - Login Page UI";
const DEFAULT_AUTH_DELAY_MS: u64 = 1500;
const GLOBAL_CONFIG_KEY: &str = "__LOGIN_PAGE_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub page_title: Option<String>,
    #[serde(default)]
    pub auth_delay_ms: Option<u64>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl RuntimeConfig {
    pub fn page_title(&self) -> String {
        self.page_title
            .as_deref()
            .map(str::trim)
            .filter(|title| !title.is_empty())
            .unwrap_or(DEFAULT_PAGE_TITLE)
            .to_string()
    }

    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms.unwrap_or(DEFAULT_AUTH_DELAY_MS))
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(log::Level::Info)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("config object could not be serialized")]
    Unserializable,
    #[error("invalid runtime config: {0}")]
    Invalid(#[from] serde_json::Error),
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

pub fn parse(raw: &str) -> Result<RuntimeConfig, ConfigError> {
    Ok(serde_json::from_str(raw)?)
}

// Expect optional global object: window.__LOGIN_PAGE_CONFIG = { page_title: "...", auth_delay_ms: 1500 }
#[cfg(target_arch = "wasm32")]
fn read_from_globals() -> Result<Option<RuntimeConfig>, ConfigError> {
    let w = web_sys::window().ok_or(ConfigError::NoWindow)?;
    let any = js_sys::Reflect::get(&w, &GLOBAL_CONFIG_KEY.into()).map_err(|_| ConfigError::NoWindow)?;
    if any.is_undefined() || any.is_null() {
        return Ok(None);
    }
    let raw = js_sys::JSON::stringify(&any)
        .ok()
        .and_then(|s| s.as_string())
        .ok_or(ConfigError::Unserializable)?;
    parse(&raw).map(Some)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_from_globals() -> Result<Option<RuntimeConfig>, ConfigError> {
    Err(ConfigError::NoWindow)
}

fn load() -> RuntimeConfig {
    match read_from_globals() {
        Ok(Some(cfg)) => cfg,
        Ok(None) => RuntimeConfig::default(),
        Err(ConfigError::NoWindow) => RuntimeConfig::default(),
        Err(err) => {
            log::warn!("{}: {}; using defaults", GLOBAL_CONFIG_KEY, err);
            RuntimeConfig::default()
        }
    }
}

pub fn runtime_config() -> &'static RuntimeConfig {
    RUNTIME_CONFIG.get_or_init(load)
}

pub fn init() -> &'static RuntimeConfig {
    runtime_config()
}
