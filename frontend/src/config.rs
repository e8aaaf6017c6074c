//! Runtime configuration.
//!
//! Sources, first match wins per field: `window.__DAYFLOW_ENV` (env.js),
//! `window.__DAYFLOW_CONFIG`, `./config.json`, built-in defaults.

use serde::{Deserialize, Serialize};
use std::{sync::OnceLock, time::Duration};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_NOTIFICATION_POLL_SECONDS: u32 = 30;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;

const ENV_GLOBAL: &str = "__DAYFLOW_ENV";
const CONFIG_GLOBAL: &str = "__DAYFLOW_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "NOTIFICATION_POLL_SECONDS")]
    pub notification_poll_seconds: Option<u32>,
    #[serde(default, alias = "SEARCH_DEBOUNCE_MS")]
    pub search_debounce_ms: Option<u32>,
}

impl RuntimeConfig {
    /// Fills fields missing from `self` with those of `lower`.
    pub fn or(self, lower: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self
                .api_base_url
                .filter(|url| !url.trim().is_empty())
                .or(lower.api_base_url),
            notification_poll_seconds: self
                .notification_poll_seconds
                .or(lower.notification_poll_seconds),
            search_debounce_ms: self.search_debounce_ms.or(lower.search_debounce_ms),
        }
    }

    fn is_complete(&self) -> bool {
        self.api_base_url.is_some()
            && self.notification_poll_seconds.is_some()
            && self.search_debounce_ms.is_some()
    }

    pub fn resolve(self) -> ResolvedConfig {
        ResolvedConfig {
            api_base_url: normalize_base_url(
                self.api_base_url
                    .as_deref()
                    .filter(|url| !url.trim().is_empty())
                    .unwrap_or(DEFAULT_API_BASE_URL),
            ),
            notification_poll_seconds: self
                .notification_poll_seconds
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_NOTIFICATION_POLL_SECONDS),
            search_debounce_ms: self
                .search_debounce_ms
                .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub notification_poll_seconds: u32,
    pub search_debounce_ms: u32,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        RuntimeConfig::default().resolve()
    }
}

impl ResolvedConfig {
    pub fn notification_poll_interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.notification_poll_seconds))
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(u64::from(self.search_debounce_ms))
    }
}

pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

static CONFIG: OnceLock<ResolvedConfig> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global(name: &str) -> Option<RuntimeConfig> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let json = js_sys::JSON::stringify(&value).ok()?.as_string()?;
    match serde_json::from_str(&json) {
        Ok(config) => Some(config),
        Err(err) => {
            log::warn!("ignoring malformed window.{}: {}", name, err);
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_global(_name: &str) -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_file() -> anyhow::Result<RuntimeConfig> {
    let location = web_sys::window()
        .ok_or_else(|| anyhow::anyhow!("no window"))?
        .location()
        .href()
        .map_err(|_| anyhow::anyhow!("no location"))?;
    let base = location.split('#').next().unwrap_or_default();
    let url = match base.rfind('/') {
        Some(idx) => format!("{}/config.json", &base[..idx]),
        None => "/config.json".to_string(),
    };
    let response = reqwest::get(&url).await?;
    if !response.status().is_success() {
        anyhow::bail!("config.json returned {}", response.status());
    }
    Ok(response.json::<RuntimeConfig>().await?)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_config_file() -> anyhow::Result<RuntimeConfig> {
    anyhow::bail!("config.json is only fetched in the browser")
}

fn globals_snapshot() -> RuntimeConfig {
    read_global(ENV_GLOBAL)
        .unwrap_or_default()
        .or(read_global(CONFIG_GLOBAL).unwrap_or_default())
}

async fn load() -> ResolvedConfig {
    let mut merged = globals_snapshot();
    if !merged.is_complete() {
        match fetch_config_file().await {
            Ok(file) => merged = merged.or(file),
            Err(err) => log::debug!("no runtime config file: {}", err),
        }
    }
    merged.resolve()
}

/// Resolved configuration, loading it on first use.
pub async fn await_config() -> ResolvedConfig {
    if let Some(cached) = CONFIG.get() {
        return cached.clone();
    }
    let loaded = load().await;
    CONFIG.get_or_init(|| loaded).clone()
}

pub async fn await_api_base_url() -> String {
    await_config().await.api_base_url
}

/// Resolved configuration if already loaded, otherwise whatever the page
/// globals provide on top of the defaults.
pub fn current() -> ResolvedConfig {
    CONFIG
        .get()
        .cloned()
        .unwrap_or_else(|| globals_snapshot().resolve())
}

pub async fn init() {
    let config = await_config().await;
    log::info!("runtime config ready, api base {}", config.api_base_url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let resolved = RuntimeConfig::default().resolve();
        assert_eq!(resolved.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(resolved.notification_poll_interval(), Duration::from_secs(30));
        assert_eq!(resolved.search_debounce(), Duration::from_millis(300));
    }

    #[test]
    fn higher_source_wins_per_field() {
        let env = RuntimeConfig {
            api_base_url: Some("https://hr.example.com/api/".into()),
            ..RuntimeConfig::default()
        };
        let file = RuntimeConfig {
            api_base_url: Some("http://ignored/api".into()),
            notification_poll_seconds: Some(10),
            search_debounce_ms: None,
        };
        let resolved = env.or(file).resolve();
        assert_eq!(resolved.api_base_url, "https://hr.example.com/api");
        assert_eq!(resolved.notification_poll_seconds, 10);
        assert_eq!(resolved.search_debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
    }

    #[test]
    fn blank_url_and_zero_interval_fall_back() {
        let resolved = RuntimeConfig {
            api_base_url: Some("   ".into()),
            notification_poll_seconds: Some(0),
            search_debounce_ms: Some(0),
        }
        .resolve();
        assert_eq!(resolved.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(resolved.notification_poll_seconds, 30);
        assert_eq!(resolved.search_debounce_ms, 0);
    }

    #[test]
    fn upper_case_env_keys_are_accepted() {
        let config: RuntimeConfig = serde_json::from_str(
            r#"{"API_BASE_URL":"https://api.test","NOTIFICATION_POLL_SECONDS":15}"#,
        )
        .unwrap();
        assert_eq!(config.api_base_url.as_deref(), Some("https://api.test"));
        assert_eq!(config.notification_poll_seconds, Some(15));
    }
}
