//! Profile Login Core - login flow for the profile demo
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Account, profile fields, login form, session, picture
//! - **ports**: The `Frontend` trait a presentation layer implements
//! - **services**: The login state machine, picture loading and the run loop
//!
//! The single account is plaintext and in-memory. This is a teaching demo,
//! not an authentication system.

pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use config::Config;
use services::demo::demo_account;
use services::{LoginApp, ProfilePictureService};

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{Account, LoginForm, Picture, ProfileField, Session};
pub use ports::{Frontend, ProfileAction, ProfileView};

/// Build the demo app from configuration
///
/// `picture_flag` is the command-line override for the picture path.
pub fn demo_app(config: &Config, picture_flag: Option<&Path>) -> LoginApp {
    let picture_service = ProfilePictureService::new(config.picture_path(picture_flag));
    LoginApp::new(demo_account(), picture_service)
}
