//! Configuration loader
//!
//! Loads client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If the origin is not set, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `UPLOKAL_API_ORIGIN` (required): origin the dashboard is served from
//! - `UPLOKAL_API_BASE_URL`: explicit API base, overrides origin resolution
//! - `UPLOKAL_API_TIMEOUT_SECS`: per-request timeout in seconds (none when unset)
//! - `UPLOKAL_API_MAX_ATTEMPTS`: total attempts per request
//! - `UPLOKAL_API_USER_AGENT`: user agent sent with every request
//! - `UPLOKAL_LOGIN_PATH`: page to send the user to when the session expires
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./uplokal.{json,toml}` then `./config.{json,toml}` (working directory)
//! 2. The same names in the parent and grandparent directories
//! 3. The same names beside the executable

use std::path::{Path, PathBuf};

use uplokal_domain::{ApiConfig, Config, Result, SessionConfig, UplokalError};

use crate::errors::InfraError;

const FILE_NAMES: [&str; 4] = ["uplokal.json", "uplokal.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `UplokalError::Config` if configuration cannot be loaded from
/// either source or the file is invalid.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Only the origin is required; every other setting keeps its default when
/// its variable is unset.
///
/// # Errors
/// Returns `UplokalError::Config` if the origin is missing or a numeric
/// variable does not parse.
pub fn load_from_env() -> Result<Config> {
    let origin = env_var("UPLOKAL_API_ORIGIN")?;
    let defaults = ApiConfig::default();

    let timeout_secs = env_parse("UPLOKAL_API_TIMEOUT_SECS", "timeout")?.or(defaults.timeout_secs);
    let max_attempts =
        env_parse("UPLOKAL_API_MAX_ATTEMPTS", "attempt count")?.unwrap_or(defaults.max_attempts);

    let mut session = SessionConfig::default();
    if let Some(login_path) = env_opt("UPLOKAL_LOGIN_PATH") {
        session.login_path = login_path;
    }

    Ok(Config {
        api: ApiConfig {
            origin,
            base_url: env_opt("UPLOKAL_API_BASE_URL"),
            timeout_secs,
            max_attempts,
            user_agent: env_opt("UPLOKAL_API_USER_AGENT"),
        },
        session,
        ..Config::default()
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Format is chosen by
/// file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `UplokalError::Config` if no file is found, it cannot be read,
/// or its contents are invalid.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(UplokalError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            UplokalError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| UplokalError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents).map_err(|e| InfraError::from(e).into()),
        _ => Err(UplokalError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend(cwd.ancestors().take(3).map(Path::to_path_buf));
    }

    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf)) {
        roots.push(exe_dir);
    }

    candidates_in(&roots).into_iter().find(|path| path.exists())
}

fn candidates_in(roots: &[PathBuf]) -> Vec<PathBuf> {
    roots.iter().flat_map(|root| FILE_NAMES.iter().map(move |name| root.join(name))).collect()
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| UplokalError::Config(format!("Missing required environment variable: {key}")))
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn env_parse<T>(key: &str, what: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_opt(key)
        .map(|raw| {
            raw.trim().parse::<T>().map_err(|e| UplokalError::Config(format!("Invalid {what}: {e}")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use parking_lot::{const_mutex, Mutex};
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Mutex<()> = const_mutex(());

    const VARS: [&str; 6] = [
        "UPLOKAL_API_ORIGIN",
        "UPLOKAL_API_BASE_URL",
        "UPLOKAL_API_TIMEOUT_SECS",
        "UPLOKAL_API_MAX_ATTEMPTS",
        "UPLOKAL_API_USER_AGENT",
        "UPLOKAL_LOGIN_PATH",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    fn temp_config(contents: &str, extension: &str) -> (NamedTempFile, PathBuf) {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        let path = temp_file.path().with_extension(extension);
        std::fs::copy(temp_file.path(), &path).unwrap();
        (temp_file, path)
    }

    #[test]
    fn test_load_from_env_all_vars_set() {
        let _guard = ENV_LOCK.lock();
        clear_env();

        std::env::set_var("UPLOKAL_API_ORIGIN", "https://uplokal.id");
        std::env::set_var("UPLOKAL_API_TIMEOUT_SECS", "10");
        std::env::set_var("UPLOKAL_API_MAX_ATTEMPTS", "3");
        std::env::set_var("UPLOKAL_API_USER_AGENT", "uplokal-cli/0.1");
        std::env::set_var("UPLOKAL_LOGIN_PATH", "/masuk.html");

        let config = load_from_env().unwrap();
        assert_eq!(config.api.origin, "https://uplokal.id");
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.api.timeout_secs, Some(10));
        assert_eq!(config.api.max_attempts, 3);
        assert_eq!(config.api.user_agent.as_deref(), Some("uplokal-cli/0.1"));
        assert_eq!(config.session.login_path, "/masuk.html");
        assert_eq!(config.session.redirect_key, "redirectAfterLogin");
        assert_eq!(config.api.resolve_base_url().unwrap(), "https://uplokal.id/api");

        clear_env();
    }

    #[test]
    fn test_load_from_env_defaults() {
        let _guard = ENV_LOCK.lock();
        clear_env();

        std::env::set_var("UPLOKAL_API_ORIGIN", "http://localhost:5500");
        let config = load_from_env().unwrap();

        assert_eq!(config.api.timeout_secs, None);
        assert_eq!(config.api.max_attempts, 1);
        assert_eq!(config.sliders.len(), 2);
        assert_eq!(config.api.resolve_base_url().unwrap(), "http://127.0.0.1:8000/api");

        clear_env();
    }

    #[test]
    fn test_load_from_env_missing_origin() {
        let _guard = ENV_LOCK.lock();
        clear_env();

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, UplokalError::Config(msg) if msg.contains("UPLOKAL_API_ORIGIN")));
    }

    #[test]
    fn test_load_from_env_invalid_number() {
        let _guard = ENV_LOCK.lock();
        clear_env();

        std::env::set_var("UPLOKAL_API_ORIGIN", "https://uplokal.id");
        std::env::set_var("UPLOKAL_API_TIMEOUT_SECS", "soon");

        let err = load_from_env().unwrap_err();
        assert!(matches!(err, UplokalError::Config(msg) if msg.contains("timeout")));

        clear_env();
    }

    #[test]
    fn test_load_from_file_json() {
        let (_file, path) = temp_config(
            r#"{
                "api": { "origin": "https://uplokal.id", "timeout_secs": 5 },
                "sliders": [{ "name": "partners", "speed": 1.2 }]
            }"#,
            "json",
        );

        let config = load_from_file(Some(path.clone())).unwrap();
        assert_eq!(config.api.timeout_secs, Some(5));
        assert_eq!(config.sliders.len(), 1);
        assert_eq!(config.sliders[0].name, "partners");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_toml() {
        let (_file, path) = temp_config(
            r#"
[api]
origin = "https://uplokal.id"
base_url = "https://api.uplokal.id/api/"
max_attempts = 2

[session]
login_path = "/login.html"
"#,
            "toml",
        );

        let config = load_from_file(Some(path.clone())).unwrap();
        assert_eq!(config.api.max_attempts, 2);
        assert_eq!(config.api.resolve_base_url().unwrap(), "https://api.uplokal.id/api");
        assert_eq!(config.sliders.len(), 2);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_file_not_found() {
        let result = load_from_file(Some(PathBuf::from("/nonexistent/uplokal.json")));
        assert!(matches!(result, Err(UplokalError::Config(_))));
    }

    #[test]
    fn test_load_from_file_invalid_json() {
        let (_file, path) = temp_config(r#"{ "api": "#, "json");

        let result = load_from_file(Some(path.clone()));
        assert!(matches!(result, Err(UplokalError::Config(msg)) if msg.contains("JSON")));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_parse_config_unsupported_format() {
        let result = parse_config("api: {}", &PathBuf::from("uplokal.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_candidates_prefer_uplokal_names() {
        let roots = vec![PathBuf::from("/srv/app"), PathBuf::from("/srv")];
        let candidates = candidates_in(&roots);

        assert_eq!(candidates.len(), 8);
        assert_eq!(candidates[0], PathBuf::from("/srv/app/uplokal.json"));
        assert_eq!(candidates[3], PathBuf::from("/srv/app/config.toml"));
        assert_eq!(candidates[4], PathBuf::from("/srv/uplokal.json"));
    }
}
