//! Config command - show the resolved configuration

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use profile_login_core::config::{Config, SETTINGS_FILE};
use profile_login_core::services::ProfilePictureService;
use profile_login_core::Picture;

use crate::output;

pub fn run(config_dir: &Path, config: &Config, picture: Option<&Path>, json: bool) -> Result<()> {
    let settings_path = config_dir.join(SETTINGS_FILE);
    let picture_path = config.picture_path(picture);
    let loaded = ProfilePictureService::new(&picture_path).load();

    let picture_status = match &loaded {
        Picture::Image { width, height, .. } => format!("image {}x{}", width, height),
        Picture::Placeholder { reason } => format!("placeholder ({})", reason),
    };

    if json {
        let value = serde_json::json!({
            "settingsFile": settings_path.display().to_string(),
            "settingsFound": settings_path.exists(),
            "picture": picture_path.display().to_string(),
            "pictureStatus": picture_status,
            "color": config.color,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", "Configuration".bold());
    println!();

    let mut table = output::create_table();
    let found = if settings_path.exists() { "" } else { " (not found)" };
    table.add_row(vec![
        "Settings file".to_string(),
        format!("{}{}", settings_path.display(), found),
    ]);
    table.add_row(vec!["Picture".to_string(), picture_path.display().to_string()]);
    table.add_row(vec!["Picture status".to_string(), picture_status]);
    table.add_row(vec!["Color".to_string(), config.color.to_string()]);
    println!("{}", table);

    if loaded.is_placeholder() {
        output::warning("The profile screen will show a placeholder picture.");
    }

    Ok(())
}
