use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{NutrilogError, Result};

/// Top-level configuration for the nutrilog service.
///
/// Loaded from `~/.nutrilog/config.toml` by default. Every section is
/// optional and falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutrilogConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub clock: ClockConfig,
}

impl NutrilogConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: NutrilogConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| NutrilogError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Path of the chat-platform webhook.
    pub webhook_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            webhook_path: "/nutrition".to_string(),
        }
    }
}

/// Nutrition dataset settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON data file. When unset the embedded dataset is used.
    pub data_file: Option<PathBuf>,
    /// The single calendar month the dataset covers. Explicit dates in
    /// utterances are only recognised for this month.
    pub month: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            month: 6,
        }
    }
}

/// Time source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Fixed UTC offset in minutes used to resolve "today" (540 for KST).
    /// Unset means the host's local timezone.
    pub utc_offset_minutes: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = NutrilogConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.webhook_path, "/nutrition");
        assert!(config.store.data_file.is_none());
        assert_eq!(config.store.month, 6);
        assert!(config.clock.utc_offset_minutes.is_none());
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"

[server]
host = "127.0.0.1"
port = 9090
webhook_path = "/skill/nutrition"

[store]
data_file = "/srv/nutrilog/nutrition_data.json"
month = 7

[clock]
utc_offset_minutes = 540
"#;
        let file = create_temp_config(content);
        let config = NutrilogConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.webhook_path, "/skill/nutrition");
        assert_eq!(
            config.store.data_file.as_deref(),
            Some(Path::new("/srv/nutrilog/nutrition_data.json"))
        );
        assert_eq!(config.store.month, 7);
        assert_eq!(config.clock.utc_offset_minutes, Some(540));
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[server]
port = 3000
"#;
        let file = create_temp_config(content);
        let config = NutrilogConfig::load(file.path()).unwrap();
        assert_eq!(config.server.port, 3000);
        // Remaining fields use defaults
        assert_eq!(config.server.webhook_path, "/nutrition");
        assert_eq!(config.store.month, 6);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_config_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = NutrilogConfig::load(file.path()).unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.store.month, 6);
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let file = create_temp_config("this is {{ not valid TOML");
        let result = NutrilogConfig::load(file.path());
        assert!(matches!(result, Err(NutrilogError::Config(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = NutrilogConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_save_creates_parent_dirs_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let mut config = NutrilogConfig::default();
        config.server.port = 8123;
        config.clock.utc_offset_minutes = Some(-300);
        config.save(&path).unwrap();

        assert!(path.exists());
        let reloaded = NutrilogConfig::load(&path).unwrap();
        assert_eq!(reloaded.server.port, 8123);
        assert_eq!(reloaded.clock.utc_offset_minutes, Some(-300));
        assert!(reloaded.store.data_file.is_none());
    }
}
