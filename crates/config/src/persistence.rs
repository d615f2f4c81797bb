//! File system persistence for configuration
//!
//! Reads and writes the config file with atomic writes so a crash never
//! leaves a half-written file behind.

use crate::{Config, ConfigError, ConfigResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Returns the platform config file path
/// (e.g. `~/.config/podstream/config.toml`)
pub fn default_config_path() -> ConfigResult<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "podstream").ok_or_else(|| {
        ConfigError::PathResolutionError {
            reason: "No home directory available".to_string(),
        }
    })?;

    Ok(dirs.config_dir().join("config.toml"))
}

/// Handles configuration file persistence
pub struct ConfigPersistence {
    config_path: PathBuf,
}

impl ConfigPersistence {
    /// Creates a new persistence handler for the given config file path
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Creates a handler for the platform default path
    pub fn at_default_path() -> ConfigResult<Self> {
        Ok(Self::new(default_config_path()?))
    }

    /// Loads configuration from file
    ///
    /// A missing file yields the default config. An empty file is
    /// treated as corrupted, not as defaults.
    pub fn load(&self) -> ConfigResult<Config> {
        if !self.config_path.exists() {
            log::info!(
                "Config file not found at {}, using defaults",
                self.config_path.display()
            );
            return Ok(Config::default());
        }

        let contents =
            fs::read_to_string(&self.config_path).map_err(|e| ConfigError::ReadError {
                path: self.config_path.clone(),
                source: e,
            })?;

        if contents.trim().is_empty() {
            return Err(ConfigError::ReadError {
                path: self.config_path.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "Config file is empty or contains only whitespace",
                ),
            });
        }

        let config: Config = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: self.config_path.clone(),
            source: e,
        })?;

        // Warn but don't fail, so users can fix invalid values in place
        if let Err(errors) = config.validate() {
            let error_msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            log::warn!("Config validation warnings: {}", error_msg);
        }

        Ok(config)
    }

    /// Saves configuration to file atomically
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        if let Err(errors) = config.validate() {
            let error_msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ConfigError::ValidationError(error_msg));
        }

        if let Some(parent) = self.config_path.parent() {
            self.ensure_directory_exists(parent)?;
        }

        let toml_string = toml::to_string_pretty(config).map_err(ConfigError::SerializeError)?;

        let parent = self
            .config_path
            .parent()
            .unwrap_or_else(|| Path::new("."));
        let mut temp_file = NamedTempFile::new_in(parent)?;
        temp_file.write_all(toml_string.as_bytes())?;
        temp_file
            .persist(&self.config_path)
            .map_err(|e| ConfigError::WriteError {
                path: self.config_path.clone(),
                source: e.error,
            })?;

        log::debug!("Saved config to {}", self.config_path.display());
        Ok(())
    }

    fn ensure_directory_exists(&self, path: &Path) -> ConfigResult<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(|e| ConfigError::DirectoryCreationError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn persistence_in(dir: &TempDir) -> ConfigPersistence {
        ConfigPersistence::new(dir.path().join("config.toml"))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let persistence = persistence_in(&dir);

        let config = persistence.load().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let persistence = persistence_in(&dir);

        let mut config = Config::default();
        config.server.base_url = "https://feed.example.com".to_string();
        config.ui.theme = "light".to_string();

        persistence.save(&config).unwrap();
        let loaded = persistence.load().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "   \n").unwrap();

        let persistence = ConfigPersistence::new(path);
        assert!(matches!(
            persistence.load(),
            Err(ConfigError::ReadError { .. })
        ));
    }

    #[test]
    fn test_garbage_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not { toml").unwrap();

        let persistence = ConfigPersistence::new(path);
        assert!(matches!(
            persistence.load(),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let dir = TempDir::new().unwrap();
        let persistence = persistence_in(&dir);

        let mut config = Config::default();
        config.server.base_url = String::new();

        assert!(matches!(
            persistence.save(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let persistence = ConfigPersistence::new(dir.path().join("nested/dir/config.toml"));

        persistence.save(&Config::default()).unwrap();
        assert!(dir.path().join("nested/dir/config.toml").exists());
    }

    #[test]
    fn test_partial_file_fills_remaining_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[server]\nbase_url = \"https://feed.example.com\"\n").unwrap();

        let persistence = ConfigPersistence::new(path);
        let config = persistence.load().unwrap();

        assert_eq!(config.server.base_url, "https://feed.example.com");
        assert_eq!(config.server.page_limit, 12);
        assert_eq!(config.ui, crate::UiConfig::default());
    }
}
