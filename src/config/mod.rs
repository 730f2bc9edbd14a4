//! Configuration management for storeops

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Environment variable overriding the configured API origin
pub const API_URL_ENV: &str = "STOREOPS_API_URL";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// API origin, e.g. `https://api.shop.example.com/api/v1`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Default page size for list requests
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    50
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".storeops").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// A missing file is not an error; the API origin can come entirely
    /// from the environment.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_path()?,
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an explicit path, or the default location.
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        let path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_path()?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(&path, contents)?;

        Ok(())
    }

    /// Resolve the API origin: environment override first, then the config
    /// field.
    pub fn api_url(&self) -> Result<String> {
        self.resolve_api_url(std::env::var(API_URL_ENV).ok())
    }

    fn resolve_api_url(&self, env_override: Option<String>) -> Result<String> {
        env_override
            .filter(|v| !v.is_empty())
            .or_else(|| self.api_url.clone())
            .ok_or_else(|| ConfigError::MissingApiUrl.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_yields_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        let config = Config::load_at(path.to_str()).unwrap();
        assert!(config.api_url.is_none());
        assert_eq!(config.preferences.page_size, 50);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        let config = Config {
            api_url: Some("https://api.shop.example.com".to_string()),
            preferences: Preferences {
                format: Some("json".to_string()),
                page_size: 25,
            },
        };
        config.save_at(path.to_str()).unwrap();

        let loaded = Config::load_at(path.to_str()).unwrap();
        assert_eq!(loaded.api_url.as_deref(), Some("https://api.shop.example.com"));
        assert_eq!(loaded.preferences.format.as_deref(), Some("json"));
        assert_eq!(loaded.preferences.page_size, 25);
    }

    #[test]
    fn test_malformed_config_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api_url: [not: a string").unwrap();

        assert!(Config::load_at(path.to_str()).is_err());
    }

    #[test]
    fn test_api_url_env_override_wins() {
        let config = Config {
            api_url: Some("https://from-config".to_string()),
            ..Default::default()
        };

        let resolved = config
            .resolve_api_url(Some("https://from-env".to_string()))
            .unwrap();
        assert_eq!(resolved, "https://from-env");
    }

    #[test]
    fn test_api_url_falls_back_to_config() {
        let config = Config {
            api_url: Some("https://from-config".to_string()),
            ..Default::default()
        };

        assert_eq!(config.resolve_api_url(None).unwrap(), "https://from-config");
        // An empty override is treated as unset
        assert_eq!(
            config.resolve_api_url(Some(String::new())).unwrap(),
            "https://from-config"
        );
    }

    #[test]
    fn test_api_url_missing_everywhere() {
        let config = Config::default();
        assert!(config.resolve_api_url(None).is_err());
    }
}
