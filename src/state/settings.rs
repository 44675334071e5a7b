use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

fn default_categories() -> Vec<String> {
    ["cat", "dog", "car", "person", "other"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_csv_file() -> String {
    "image_labels.csv".to_string()
}

/// Persistent session configuration, rewritten wholesale on any change.
///
/// Only three fields are durable: the category list (ordered, extendable from
/// the UI), the last opened folder and the label-file path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionConfig {
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    #[serde(default)]
    pub last_folder: String,

    #[serde(default = "default_csv_file")]
    pub csv_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            last_folder: String::new(),
            csv_file: default_csv_file(),
        }
    }
}

impl SessionConfig {
    /// Per-user config file location.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "image-labeler")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load from the default location, falling back to defaults when the file
    /// is missing or unreadable. Never fatal.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("Could not determine config directory, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<SessionConfig>(&contents) {
                Ok(config) => {
                    info!("Loaded configuration from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse config file: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    warn!("Failed to read config file: {}. Using defaults.", e);
                } else {
                    info!("No config file found, using defaults");
                }
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(
            config.categories,
            vec!["cat", "dog", "car", "person", "other"]
        );
        assert_eq!(config.last_folder, "");
        assert_eq!(config.csv_file, "image_labels.csv");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = SessionConfig::default();
        config.categories.push("bicycle".to_string());
        config.last_folder = "/pics".to_string();
        config.save_to(&path).unwrap();

        let loaded = SessionConfig::load_from(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let loaded = SessionConfig::load_from(&dir.path().join("nope.json"));
        assert_eq!(loaded, SessionConfig::default());
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        let loaded = SessionConfig::load_from(&path);
        assert_eq!(loaded, SessionConfig::default());
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"last_folder": "/pics"}"#).unwrap();
        let loaded = SessionConfig::load_from(&path);
        assert_eq!(loaded.last_folder, "/pics");
        assert_eq!(loaded.csv_file, "image_labels.csv");
        assert_eq!(loaded.categories.len(), 5);
    }
}
