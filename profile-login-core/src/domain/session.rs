//! Login form and session domain models

use std::fmt;

use chrono::{DateTime, Utc};

/// Input state of the login screen
///
/// After a rejected submit only the password is cleared, so the username
/// the user typed is offered again.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn clear_password(&mut self) {
        self.password.clear();
    }

    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &if self.password.is_empty() { "" } else { "<redacted>" })
            .finish()
    }
}

/// An authenticated session, alive from a successful login until logout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn start(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            started_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_password_keeps_username() {
        let mut form = LoginForm::new("eugene", "wrong");
        form.clear_password();
        assert_eq!(form.username, "eugene");
        assert!(form.password.is_empty());

        form.clear();
        assert_eq!(form, LoginForm::default());
    }

    #[test]
    fn test_form_debug_redacts_password() {
        let rendered = format!("{:?}", LoginForm::new("eugene", "123456"));
        assert!(!rendered.contains("123456"));
    }
}
