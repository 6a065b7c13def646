use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::{debug, warn};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "config.json";

/// Rates endpoint used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://open.er-api.com/v6/latest/";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub base_url: Option<String>,
}

impl AppConfig {
    /// Resolves the configuration for this process.
    ///
    /// A missing, unreadable or malformed file never fails: the error is
    /// logged and the built-in defaults are used instead.
    pub fn resolve<P: AsRef<Path>>(path: Option<P>) -> Self {
        let path = path
            .as_ref()
            .map_or(Path::new(CONFIG_FILE), |p| p.as_ref());

        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from_path(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config file ({e:#}), using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_json::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

/// Base URL for the rates endpoint, honouring `config.json` in the working
/// directory when present.
pub fn resolve_base_url() -> String {
    AppConfig::resolve(None::<&Path>).base_url().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_with_base_url() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, r#"{ "base_url": "https://example.test/" }"#)?;

        let config = AppConfig::resolve(Some(&config_path));
        assert_eq!(config.base_url(), "https://example.test/");
        Ok(())
    }

    #[test]
    fn test_missing_config_uses_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);

        let config = AppConfig::resolve(Some(&config_path));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        Ok(())
    }

    #[test]
    fn test_malformed_config_uses_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "{ base_url: not json")?;

        assert!(AppConfig::load_from_path(&config_path).is_err());
        let config = AppConfig::resolve(Some(&config_path));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        Ok(())
    }

    #[test]
    fn test_config_without_base_url_ignores_other_fields() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, r#"{ "api_key": "secret", "currency": "EUR" }"#)?;

        let config = AppConfig::resolve(Some(&config_path));
        assert!(config.base_url.is_none());
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        Ok(())
    }

    #[test]
    fn test_resolve_base_url_without_working_directory_config() {
        // Tests run from the package root, which carries no config.json
        assert!(!Path::new(CONFIG_FILE).exists());
        assert_eq!(resolve_base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_wrong_base_url_type_uses_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, r#"{ "base_url": 42 }"#)?;

        let config = AppConfig::resolve(Some(&config_path));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        Ok(())
    }
}
