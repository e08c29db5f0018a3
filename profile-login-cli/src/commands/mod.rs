//! CLI command implementations

pub mod config;
pub mod run;

use std::path::PathBuf;

pub const CONFIG_DIR_ENV: &str = "PROFILE_LOGIN_DIR";

/// Get the config directory from environment or default
pub fn get_config_dir() -> PathBuf {
    config_dir_from(std::env::var(CONFIG_DIR_ENV).ok(), dirs::config_dir())
}

/// `PROFILE_LOGIN_DIR` wins, then `<platform config dir>/profile-login`
fn config_dir_from(env_dir: Option<String>, platform_dir: Option<PathBuf>) -> PathBuf {
    match env_dir.filter(|d| !d.trim().is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => platform_dir
            .map(|dir| dir.join("profile-login"))
            .unwrap_or_else(|| PathBuf::from(".")),
    }
}
