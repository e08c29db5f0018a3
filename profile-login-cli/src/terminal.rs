//! Terminal frontend - the login form and profile screen as prompts
//!
//! Ctrl-C or end of input at a prompt counts as closing the window.

use std::io;

use colored::Colorize;
use dialoguer::{Confirm, Input, Password, Select};

use profile_login_core::domain::picture::PLACEHOLDER_TEXT;
use profile_login_core::ports::{
    CONFIRM_LOGOUT_MESSAGE, CONFIRM_LOGOUT_TITLE, LOGIN_FAILED_MESSAGE, LOGIN_FAILED_TITLE,
    LOGIN_TITLE, PROFILE_TITLE,
};
use profile_login_core::{Error, Frontend, LoginForm, Picture, ProfileAction, ProfileView, Result};

use crate::output;

const PROFILE_ACTIONS: &[&str] = &["Logout", "Quit"];

/// Frontend backed by dialoguer prompts
#[derive(Default)]
pub struct TerminalFrontend {
    /// Set while the profile is on screen, so a declined logout does not
    /// print it a second time
    profile_shown: bool,
}

impl TerminalFrontend {
    pub fn new() -> Self {
        Self::default()
    }
}

/// True when the prompt ended because the user closed it
fn is_closed(err: &dialoguer::Error) -> bool {
    matches!(
        err,
        dialoguer::Error::IO(e)
            if matches!(e.kind(), io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof)
    )
}

fn frontend_error(err: dialoguer::Error) -> Error {
    Error::frontend(err.to_string())
}

/// Map the profile menu selection to an action
///
/// `None` (Esc) stays on the profile screen, like declining the logout
/// confirmation does.
fn profile_action(choice: Option<usize>) -> Option<ProfileAction> {
    match choice {
        Some(0) => Some(ProfileAction::Logout),
        Some(_) => Some(ProfileAction::Close),
        None => None,
    }
}

/// One line describing the picture slot
fn render_picture(picture: &Picture) -> String {
    match picture {
        Picture::Image {
            path,
            width,
            height,
            display_width,
            display_height,
        } => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            format!(
                "[{} {}x{}, shown at {}x{}]",
                name, width, height, display_width, display_height
            )
        }
        Picture::Placeholder { .. } => PLACEHOLDER_TEXT.dimmed().to_string(),
    }
}

impl Frontend for TerminalFrontend {
    fn login_screen(&mut self, form: &LoginForm) -> Result<Option<LoginForm>> {
        self.profile_shown = false;
        println!("\n{}\n", LOGIN_TITLE.bold());

        let username = match Input::<String>::new()
            .with_prompt("Username")
            .with_initial_text(form.username.clone())
            .allow_empty(true)
            .interact_text()
        {
            Ok(u) => u,
            Err(e) if is_closed(&e) => return Ok(None),
            Err(e) => return Err(frontend_error(e)),
        };

        let password = match Password::new()
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()
        {
            Ok(p) => p,
            Err(e) if is_closed(&e) => return Ok(None),
            Err(e) => return Err(frontend_error(e)),
        };

        Ok(Some(LoginForm::new(username, password)))
    }

    fn login_failed(&mut self) -> Result<()> {
        output::error(&format!("{}: {}", LOGIN_FAILED_TITLE, LOGIN_FAILED_MESSAGE));
        Ok(())
    }

    fn profile_screen(&mut self, view: &ProfileView) -> Result<ProfileAction> {
        if !self.profile_shown {
            println!("\n{}\n", PROFILE_TITLE.bold());
            println!("{}\n", render_picture(&view.picture));

            let mut table = output::create_table();
            for field in &view.fields {
                table.add_row(vec![field.label.bold().to_string(), field.value.clone()]);
            }
            println!("{}\n", table);
            self.profile_shown = true;
        }

        loop {
            let choice = match Select::new().items(PROFILE_ACTIONS).default(0).interact_opt() {
                Ok(choice) => choice,
                Err(e) if is_closed(&e) => return Ok(ProfileAction::Close),
                Err(e) => return Err(frontend_error(e)),
            };
            if let Some(action) = profile_action(choice) {
                return Ok(action);
            }
        }
    }

    fn confirm_logout(&mut self) -> Result<bool> {
        println!("{}", CONFIRM_LOGOUT_TITLE.yellow());
        let confirmed = match Confirm::new()
            .with_prompt(CONFIRM_LOGOUT_MESSAGE)
            .default(false)
            .interact_opt()
        {
            Ok(answer) => answer.unwrap_or(false),
            Err(e) if is_closed(&e) => false,
            Err(e) => return Err(frontend_error(e)),
        };

        if confirmed {
            output::success("Logged out");
        }
        Ok(confirmed)
    }
}
