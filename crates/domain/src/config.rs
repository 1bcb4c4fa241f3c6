//! Client configuration structures
//!
//! Loaded by `uplokal-infra::config` from the environment or a JSON/TOML
//! file. Every section has defaults so a partial file is enough.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{
    DEFAULT_ORIGIN, DEFAULT_SLIDER_SPEED, LOCAL_API_BASE, LOCAL_HOSTNAMES,
    LOGIN_PATH, REDIRECT_AFTER_LOGIN_KEY, RELATIVE_API_PATH,
};
use crate::errors::{Result, UplokalError};

/// Root configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default = "default_sliders")]
    pub sliders: Vec<SliderConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            session: SessionConfig::default(),
            sliders: default_sliders(),
        }
    }
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin the dashboard is served from (e.g. `https://uplokal.id`)
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Explicit API base; bypasses origin-based resolution when set
    #[serde(default)]
    pub base_url: Option<String>,
    /// Per-request timeout; unset means requests wait for the backend
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Total attempts per request (1 = no retry)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            base_url: None,
            timeout_secs: None,
            max_attempts: default_max_attempts(),
            user_agent: None,
        }
    }
}

impl ApiConfig {
    /// Config pointing at an explicit base URL (used by tests and tooling).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: Some(base_url.into()), ..Self::default() }
    }

    /// Resolve the API base URL, without a trailing slash.
    ///
    /// Loopback origins talk to the local backend port directly; every other
    /// origin uses the relative `/api` path on the same host.
    ///
    /// # Errors
    /// Returns `UplokalError::Config` if the origin is not a valid URL.
    pub fn resolve_base_url(&self) -> Result<String> {
        if let Some(base) = &self.base_url {
            return Ok(base.trim_end_matches('/').to_string());
        }

        let origin = Url::parse(&self.origin)
            .map_err(|e| UplokalError::Config(format!("Invalid origin '{}': {}", self.origin, e)))?;
        let host = origin.host_str().unwrap_or_default();

        if LOCAL_HOSTNAMES.contains(&host) {
            return Ok(LOCAL_API_BASE.to_string());
        }

        let base = origin
            .join(RELATIVE_API_PATH)
            .map_err(|e| UplokalError::Config(format!("Invalid API path: {}", e)))?;
        Ok(base.as_str().trim_end_matches('/').to_string())
    }
}

/// Session expiry behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_login_path")]
    pub login_path: String,
    #[serde(default = "default_redirect_key")]
    pub redirect_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { login_path: default_login_path(), redirect_key: default_redirect_key() }
    }
}

/// Per-slider tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub name: String,
    #[serde(default = "default_slider_speed")]
    pub speed: f64,
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

const fn default_max_attempts() -> usize {
    1
}

fn default_login_path() -> String {
    LOGIN_PATH.to_string()
}

fn default_redirect_key() -> String {
    REDIRECT_AFTER_LOGIN_KEY.to_string()
}

const fn default_slider_speed() -> f64 {
    DEFAULT_SLIDER_SPEED
}

fn default_sliders() -> Vec<SliderConfig> {
    vec![
        SliderConfig { name: "categories".to_string(), speed: 0.8 },
        SliderConfig { name: "suppliers".to_string(), speed: 0.5 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(origin: &str) -> ApiConfig {
        ApiConfig { origin: origin.to_string(), ..ApiConfig::default() }
    }

    #[test]
    fn loopback_origins_use_local_backend_port() {
        assert_eq!(api("http://localhost:5500").resolve_base_url().unwrap(), LOCAL_API_BASE);
        assert_eq!(api("http://127.0.0.1").resolve_base_url().unwrap(), LOCAL_API_BASE);
    }

    #[test]
    fn public_origin_uses_relative_api_path() {
        assert_eq!(
            api("https://uplokal.id/dashboard/index.html").resolve_base_url().unwrap(),
            "https://uplokal.id/api"
        );
    }

    #[test]
    fn explicit_base_url_wins() {
        let config = ApiConfig::with_base_url("http://10.0.0.5:9000/api/");
        assert_eq!(config.resolve_base_url().unwrap(), "http://10.0.0.5:9000/api");
    }

    #[test]
    fn invalid_origin_is_config_error() {
        assert!(matches!(api("not a url").resolve_base_url(), Err(UplokalError::Config(_))));
    }

    #[test]
    fn partial_document_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"api": {"origin": "https://uplokal.id"}}"#)
            .unwrap();
        assert_eq!(config.api.timeout_secs, None);
        assert_eq!(config.api.max_attempts, 1);
        assert_eq!(config.session.login_path, "/login.html");
        assert_eq!(config.sliders.len(), 2);
    }
}
