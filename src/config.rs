//! Application configuration.
//!
//! Dashboard defaults persisted between runs. Consent records themselves are
//! never written here.

use crate::consts::cli_consts::{CONFIG_DIR, CONFIG_FILE};
use crate::error::DashboardError;
use crate::i18n::Language;
use crate::ui::dashboard::ViewMode;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Language the dashboard opens in.
    pub language: Language,
    /// View selected when the dashboard opens.
    pub view_mode: ViewMode,
    /// Paint a dark background behind the dashboard.
    pub with_background_color: bool,
    /// Dataset to load instead of the built-in sample data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the config if the file exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, std::io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the config file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// `$HOME/.consent-dashboard/config.json`
pub fn get_config_path() -> Result<PathBuf, DashboardError> {
    let home = home::home_dir().ok_or(DashboardError::HomeDirNotFound)?;
    Ok(home.join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn sample() -> Config {
        Config {
            language: Language::Hi,
            view_mode: ViewMode::Table,
            with_background_color: true,
            data_file: Some(PathBuf::from("/tmp/consents.json")),
        }
    }

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = sample();
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let result = Config::default().save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Saving a configuration should overwrite an existing file.
    fn test_save_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        Config::default().save(&path).unwrap();
        let config2 = sample();
        config2.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config2, loaded_config);
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // Fields missing from the file fall back to their defaults.
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "language": "hi" }"#).unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.language, Language::Hi);
        assert_eq!(config.view_mode, ViewMode::Cards);
        assert!(!config.with_background_color);
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("missing.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_clear_removes_file_and_tolerates_absence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        Config::default().save(&path).unwrap();

        Config::clear(&path).unwrap();
        assert!(!path.exists());
        Config::clear(&path).unwrap();
    }
}
