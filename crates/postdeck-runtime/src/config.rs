use crate::{Error, Result};
use postdeck_providers::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Log filter used when neither the CLI nor the config file sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment override for the feed endpoint
const ENDPOINT_ENV: &str = "POSTDECK_ENDPOINT";

/// Optional settings read from `config.toml`.
///
/// Every key may be omitted; a missing file is the same as an empty one.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Resolve the config file path:
/// 1. Explicit path (with tilde expansion)
/// 2. `<config dir>/postdeck/config.toml`
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    dirs::config_dir()
        .map(|dir| dir.join("postdeck").join("config.toml"))
        .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
}

/// Resolve the feed endpoint: CLI flag > `POSTDECK_ENDPOINT` > config > default
pub fn resolve_endpoint(explicit: Option<&str>, config: &Config) -> String {
    resolve_endpoint_with_env(explicit, std::env::var(ENDPOINT_ENV).ok(), config)
}

fn resolve_endpoint_with_env(
    explicit: Option<&str>,
    env_value: Option<String>,
    config: &Config,
) -> String {
    if let Some(endpoint) = explicit {
        return endpoint.to_string();
    }

    if let Some(endpoint) = env_value.filter(|v| !v.trim().is_empty()) {
        return endpoint;
    }

    config
        .endpoint
        .clone()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

/// Resolve the log file path:
/// 1. Explicit path
/// 2. `log_file` from config
/// 3. `<state dir>/postdeck/postdeck.log` (falls back to the local data dir)
pub fn resolve_log_path(explicit_path: Option<&str>, config: &Config) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Some(path) = &config.log_file {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }

    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|dir| dir.join("postdeck").join("postdeck.log"))
        .ok_or_else(|| Error::Config("Could not determine log directory".to_string()))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.endpoint.is_none());
        assert!(config.log_file.is_none());
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "endpoint = \"http://localhost:9000/posts\"\nlog_level = \"debug\"\n",
        )?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(
            config.endpoint.as_deref(),
            Some("http://localhost:9000/posts")
        );
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(config.log_file.is_none());

        Ok(())
    }

    #[test]
    fn test_load_rejects_unknown_keys() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "endpont = \"typo\"\n")?;

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_endpoint_precedence() {
        let config = Config {
            endpoint: Some("http://from-config/posts".to_string()),
            ..Config::default()
        };

        assert_eq!(
            resolve_endpoint_with_env(
                Some("http://from-cli/posts"),
                Some("http://from-env/posts".to_string()),
                &config
            ),
            "http://from-cli/posts"
        );
        assert_eq!(
            resolve_endpoint_with_env(None, Some("http://from-env/posts".to_string()), &config),
            "http://from-env/posts"
        );
        assert_eq!(
            resolve_endpoint_with_env(None, Some("  ".to_string()), &config),
            "http://from-config/posts"
        );
        assert_eq!(
            resolve_endpoint_with_env(None, None, &Config::default()),
            DEFAULT_ENDPOINT
        );
    }

    #[test]
    fn test_log_path_prefers_explicit_then_config() -> Result<()> {
        let config = Config {
            log_file: Some(PathBuf::from("/tmp/from-config.log")),
            ..Config::default()
        };

        assert_eq!(
            resolve_log_path(Some("/tmp/explicit.log"), &config)?,
            PathBuf::from("/tmp/explicit.log")
        );
        assert_eq!(
            resolve_log_path(None, &config)?,
            PathBuf::from("/tmp/from-config.log")
        );

        Ok(())
    }

    #[test]
    fn test_explicit_config_path() -> Result<()> {
        assert_eq!(
            resolve_config_path(Some("/etc/postdeck.toml"))?,
            PathBuf::from("/etc/postdeck.toml")
        );
        Ok(())
    }
}
