//! Frontend port
//!
//! Defines the screens the login flow needs from a presentation layer.
//! The terminal UI implements this in the CLI crate; tests implement it with
//! scripted input.

use crate::domain::result::Result;
use crate::domain::{LoginForm, Picture, ProfileField};

pub const LOGIN_TITLE: &str = "Login System";
pub const PROFILE_TITLE: &str = "Profile Details";
pub const LOGIN_FAILED_TITLE: &str = "Login Failed";
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid username or password!";
pub const CONFIRM_LOGOUT_TITLE: &str = "Confirm Logout";
pub const CONFIRM_LOGOUT_MESSAGE: &str = "Are you sure you want to log out?";

/// Everything the profile screen displays, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub picture: Picture,
    pub fields: Vec<ProfileField>,
}

/// What the user did on the profile screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    /// Logout control activated; a confirmation is still pending
    Logout,
    /// Window closed
    Close,
}

/// Presentation layer driven by [`crate::services::LoginApp`]
///
/// All calls happen on the caller's thread, one user action at a time.
pub trait Frontend {
    /// Show the login form prefilled from `form` and wait for a submit
    ///
    /// Returns `None` when the window is closed instead.
    fn login_screen(&mut self, form: &LoginForm) -> Result<Option<LoginForm>>;

    /// Notify the user that the submitted credentials were rejected
    fn login_failed(&mut self) -> Result<()>;

    /// Show the profile screen and wait for the next action
    fn profile_screen(&mut self, view: &ProfileView) -> Result<ProfileAction>;

    /// Ask "are you sure" before logging out
    fn confirm_logout(&mut self) -> Result<bool>;
}
