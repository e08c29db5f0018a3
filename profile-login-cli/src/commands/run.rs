//! Run command - the interactive login form and profile screen

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use profile_login_core::config::Config;
use profile_login_core::demo_app;

use crate::terminal::TerminalFrontend;

pub fn run(config: &Config, picture: Option<&Path>) -> Result<()> {
    if atty::isnt(atty::Stream::Stdin) || atty::isnt(atty::Stream::Stdout) {
        anyhow::bail!("profile-login needs an interactive terminal");
    }

    let mut app = demo_app(config, picture);
    info!(picture = %config.picture_path(picture).display(), "starting login screen");

    let mut frontend = TerminalFrontend::new();
    app.run(&mut frontend).context("Login screen failed")?;

    info!("window closed");
    Ok(())
}
