use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Backend the client talks to when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8888/api";

pub const CONFIG_ENV: &str = "BLOGDECK_CONFIG";
pub const BASE_URL_ENV: &str = "BLOGDECK_API_URL";
pub const DATA_DIR_ENV: &str = "BLOGDECK_DATA_DIR";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. BLOGDECK_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.blogdeck/config.toml
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("blogdeck").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".blogdeck").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Directory for the TUI log file.
pub fn resolve_data_dir() -> Result<PathBuf> {
    if let Ok(env_path) = std::env::var(DATA_DIR_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("blogdeck"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".blogdeck"));
    }

    Err(Error::Config(
        "Could not determine data directory: no HOME directory or XDG data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
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

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Where the effective base URL came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseUrlSource {
    Flag,
    Env,
    ConfigFile,
    Default,
}

/// Pick the base URL: flag, then environment, then config file, then default.
pub fn resolve_base_url(
    flag: Option<&str>,
    env: Option<&str>,
    config: &Config,
) -> (String, BaseUrlSource) {
    let non_blank = |s: &&str| !s.trim().is_empty();

    if let Some(url) = flag.filter(non_blank) {
        return (url.to_string(), BaseUrlSource::Flag);
    }
    if let Some(url) = env.filter(non_blank) {
        return (url.to_string(), BaseUrlSource::Env);
    }
    if let Some(url) = config.api.base_url.as_deref().filter(non_blank) {
        return (url.to_string(), BaseUrlSource::ConfigFile);
    }
    (DEFAULT_BASE_URL.to_string(), BaseUrlSource::Default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, None);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            api: ApiConfig {
                base_url: Some("http://blog.internal:9000/api".to_string()),
                timeout_secs: Some(15),
            },
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("missing.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_load_rejects_malformed_toml() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[api\nbase_url = ")?;
        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
        Ok(())
    }

    #[test]
    fn test_base_url_priority() {
        let config = Config {
            api: ApiConfig {
                base_url: Some("http://file".to_string()),
                timeout_secs: None,
            },
        };

        assert_eq!(
            resolve_base_url(Some("http://flag"), Some("http://env"), &config),
            ("http://flag".to_string(), BaseUrlSource::Flag)
        );
        assert_eq!(
            resolve_base_url(None, Some("http://env"), &config),
            ("http://env".to_string(), BaseUrlSource::Env)
        );
        assert_eq!(
            resolve_base_url(None, Some("  "), &config),
            ("http://file".to_string(), BaseUrlSource::ConfigFile)
        );
        assert_eq!(
            resolve_base_url(None, None, &Config::default()),
            (DEFAULT_BASE_URL.to_string(), BaseUrlSource::Default)
        );
    }

    #[test]
    fn test_explicit_config_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/blogdeck-test/config.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/blogdeck-test/config.toml"));
        Ok(())
    }
}
