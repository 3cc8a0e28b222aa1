//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `BRICK_API_BASE_URL`: Backend base URL, without the `/api` prefix
//! - `BRICK_TOKEN_PATH`: Path of the persisted bearer-token file
//! - `BRICK_REQUEST_TIMEOUT`: Per-request timeout in seconds (optional)
//! - `BRICK_POLL_INTERVAL`: Notification poll interval in seconds (optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./brick.toml` or `./brick.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names in the parent directory

use std::path::{Path, PathBuf};

use brick_domain::config::{ApiConfig, PollConfig, SessionConfig};
use brick_domain::constants::{DEFAULT_POLL_INTERVAL_SECS, DEFAULT_REQUEST_TIMEOUT_SECS};
use brick_domain::{BrickError, Config, Result};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `BrickError::Config` if configuration cannot be loaded from
/// either source.
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
/// `BRICK_API_BASE_URL` and `BRICK_TOKEN_PATH` are required; the timeout
/// and poll interval fall back to their defaults.
///
/// # Errors
/// Returns `BrickError::Config` if required variables are missing or have
/// invalid values.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("BRICK_API_BASE_URL")?;
    let token_path = env_var("BRICK_TOKEN_PATH")?;

    let timeout_seconds =
        env_seconds("BRICK_REQUEST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT_SECS)?;
    let interval_seconds = env_seconds("BRICK_POLL_INTERVAL", DEFAULT_POLL_INTERVAL_SECS)?;

    Ok(Config {
        api: ApiConfig { base_url, timeout_seconds },
        session: SessionConfig { token_path },
        notifications: PollConfig { interval_seconds },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `BrickError::Config` if no file is found or the contents do not
/// parse.
pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => probe_config_paths().ok_or_else(|| {
            BrickError::Config(
                "No configuration found: set BRICK_API_BASE_URL and BRICK_TOKEN_PATH \
                 or provide a brick.toml"
                    .to_string(),
            )
        })?,
    };

    let contents = std::fs::read_to_string(&path).map_err(|e| {
        BrickError::Config(format!("Failed to read config file {}: {e}", path.display()))
    })?;

    let config = parse_config(&path, &contents)?;
    tracing::info!(path = %path.display(), "Configuration loaded from file");
    Ok(config)
}

fn parse_config(path: &Path, contents: &str) -> Result<Config> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(contents)
            .map_err(|e| BrickError::Config(format!("Invalid TOML config: {e}"))),
        Some("json") => serde_json::from_str(contents)
            .map_err(|e| BrickError::Config(format!("Invalid JSON config: {e}"))),
        other => Err(BrickError::Config(format!(
            "Unsupported config format {:?} for {}",
            other,
            path.display()
        ))),
    }
}

fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 4] = ["brick.toml", "brick.json", "config.toml", "config.json"];

    for dir in [".", ".."] {
        for name in NAMES {
            let candidate = Path::new(dir).join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| BrickError::Config(format!("Missing environment variable {name}")))
}

fn env_seconds(name: &str, default: u64) -> Result<u64> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| BrickError::Config(format!("Invalid value for {name}: {e}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_config_parses_with_defaults_applied() {
        let raw = r#"
            [api]
            base_url = "http://localhost:8000"

            [session]
            token_path = "/tmp/brick/token.json"

            [notifications]
        "#;
        let config = parse_config(Path::new("brick.toml"), raw).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_seconds, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(config.notifications.interval_seconds, DEFAULT_POLL_INTERVAL_SECS);
    }

    #[test]
    fn json_config_parses_explicit_values() {
        let raw = r#"{
            "api": {"base_url": "https://brick.example.org", "timeout_seconds": 10},
            "session": {"token_path": "/var/lib/brick/token.json"},
            "notifications": {"interval_seconds": 60}
        }"#;
        let config = parse_config(Path::new("brick.json"), raw).unwrap();
        assert_eq!(config.api.timeout_seconds, 10);
        assert_eq!(config.notifications.interval_seconds, 60);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = parse_config(Path::new("brick.yaml"), "").unwrap_err();
        assert!(matches!(err, BrickError::Config(_)));
    }

    #[test]
    fn malformed_toml_reports_config_error() {
        let err = parse_config(Path::new("brick.toml"), "api = ").unwrap_err();
        assert!(matches!(err, BrickError::Config(_)));
    }
}
