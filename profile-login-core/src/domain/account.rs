//! Account domain model

use std::fmt;

use super::profile::ProfileField;

/// The single credential + profile record used for the demo login
///
/// Username, password and profile fields are fixed at construction. The
/// only mutable state is the authenticated flag, toggled by
/// [`Account::check_credentials`] and [`Account::logout`].
#[derive(Clone)]
pub struct Account {
    username: String,
    password: String,
    profile_fields: Vec<ProfileField>,
    authenticated: bool,
}

impl Account {
    /// Create a new, unauthenticated account
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        profile_fields: Vec<ProfileField>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            profile_fields,
            authenticated: false,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Check a username/password pair against the stored credentials
    ///
    /// Comparison is exact: case-sensitive, no trimming. On a match the
    /// account becomes authenticated. A mismatch leaves the flag as it was.
    pub fn check_credentials(&mut self, username: &str, password: &str) -> bool {
        if username == self.username && password == self.password {
            self.authenticated = true;
            return true;
        }
        false
    }

    /// Profile fields in stored order, or `None` unless authenticated
    pub fn profile(&self) -> Option<&[ProfileField]> {
        if self.authenticated {
            Some(&self.profile_fields)
        } else {
            None
        }
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
    }
}

// Password stays out of Debug output so it never reaches logs.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("profile_fields", &self.profile_fields.len())
            .field("authenticated", &self.authenticated)
            .finish()
    }
}
