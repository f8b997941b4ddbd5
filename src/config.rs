use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Gemini API key. The `GEMINI_API_KEY` environment variable takes
    /// precedence over this value at startup.
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    /// "light", "dark" or "system".
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_theme() -> String {
    "system".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            theme: default_theme(),
        }
    }
}

impl AppConfig {
    /// Get the path to the config file in app data dir
    pub fn config_path() -> Result<PathBuf, AppError> {
        let data_dir = dirs::config_dir()
            .ok_or_else(|| AppError::ConfigError("Cannot find config directory".into()))?;
        Ok(data_dir.join("playbook-studio").join("config.json"))
    }

    /// Load config from disk, or return default if not found
    pub fn load() -> Result<Self, AppError> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            let config: AppConfig = serde_json::from_str(&contents)
                .map_err(|e| AppError::ConfigError(e.to_string()))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), AppError> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)?;
        Ok(())
    }

    /// Resolve the Gemini credential: environment first, then the persisted
    /// config. Read once at startup; there is no per-call lookup.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|k| !k.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "gemini-3-flash-preview");
        assert_eq!(config.theme, "system");
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"api_key": null}"#).unwrap();
        assert_eq!(config.model, "gemini-3-flash-preview");
        assert_eq!(config.theme, "system");
    }

    #[test]
    fn test_roundtrip() {
        let mut config = AppConfig::default();
        config.theme = "dark".to_string();
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.theme, "dark");
        assert_eq!(back.model, config.model);
    }
}
