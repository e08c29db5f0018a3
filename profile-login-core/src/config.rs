//! Configuration management
//!
//! Optional, read-only settings.json in the config directory:
//! ```json
//! {
//!   "picture": "pictures/Kim.png",
//!   "color": true
//! }
//! ```
//! Nothing is ever written back; the app keeps no state on disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};
use crate::services::demo::DEMO_PICTURE;

pub const SETTINGS_FILE: &str = "settings.json";

/// Environment variable overriding the picture path from settings.json
pub const PICTURE_ENV: &str = "PROFILE_LOGIN_PICTURE";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    picture: Option<PathBuf>,
    #[serde(default)]
    color: Option<bool>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Picture path from the environment or settings file, if any
    pub picture: Option<PathBuf>,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            picture: None,
            color: true,
        }
    }
}

impl Config {
    /// Load config from the config directory
    ///
    /// The picture can be set via:
    /// 1. Environment variable PROFILE_LOGIN_PICTURE
    /// 2. Settings file (relative paths resolve against the config directory)
    pub fn load(config_dir: &Path) -> Result<Self> {
        Self::load_with_env(config_dir, std::env::var(PICTURE_ENV).ok())
    }

    fn load_with_env(config_dir: &Path, env_picture: Option<String>) -> Result<Self> {
        let settings_path = config_dir.join(SETTINGS_FILE);

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).map_err(|e| {
                Error::config(format!("{}: {}", settings_path.display(), e))
            })?
        } else {
            SettingsFile::default()
        };

        let picture = match env_picture.filter(|p| !p.trim().is_empty()) {
            Some(p) => Some(PathBuf::from(p)),
            None => raw.picture.map(|p| {
                if p.is_relative() {
                    config_dir.join(p)
                } else {
                    p
                }
            }),
        };

        Ok(Self {
            picture,
            color: raw.color.unwrap_or(true),
        })
    }

    /// Final picture path: `flag` > config > `Kim.png` next to the executable
    pub fn picture_path(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(p) = flag {
            return p.to_path_buf();
        }
        if let Some(p) = &self.picture {
            return p.clone();
        }
        default_picture_path()
    }
}

fn default_picture_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEMO_PICTURE)))
        .unwrap_or_else(|| PathBuf::from(DEMO_PICTURE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_settings_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_with_env(temp_dir.path(), None).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.picture_path(None).ends_with(DEMO_PICTURE));
    }

    #[test]
    fn test_settings_file_values() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(SETTINGS_FILE),
            r#"{ "picture": "pics/me.png", "color": false }"#,
        )
        .unwrap();

        let config = Config::load_with_env(temp_dir.path(), None).unwrap();
        assert_eq!(config.picture, Some(temp_dir.path().join("pics/me.png")));
        assert!(!config.color);
    }

    #[test]
    fn test_env_overrides_settings() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(SETTINGS_FILE),
            r#"{ "picture": "/from/settings.png" }"#,
        )
        .unwrap();

        let config =
            Config::load_with_env(temp_dir.path(), Some("/from/env.png".to_string())).unwrap();
        assert_eq!(config.picture, Some(PathBuf::from("/from/env.png")));

        // Blank env value is ignored
        let config = Config::load_with_env(temp_dir.path(), Some("  ".to_string())).unwrap();
        assert_eq!(config.picture, Some(PathBuf::from("/from/settings.png")));
    }

    #[test]
    fn test_flag_overrides_config() {
        let config = Config {
            picture: Some(PathBuf::from("/from/config.png")),
            color: true,
        };
        assert_eq!(
            config.picture_path(Some(Path::new("flag.png"))),
            PathBuf::from("flag.png")
        );
        assert_eq!(config.picture_path(None), PathBuf::from("/from/config.png"));
    }

    #[test]
    fn test_malformed_settings_is_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(SETTINGS_FILE), "{ not json").unwrap();

        let err = Config::load_with_env(temp_dir.path(), None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(SETTINGS_FILE),
            r#"{ "theme": "dark" }"#,
        )
        .unwrap();

        let config = Config::load_with_env(temp_dir.path(), None).unwrap();
        assert_eq!(config, Config::default());
    }
}
