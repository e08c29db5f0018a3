//! Session service - the login/logout state machine
//!
//! Owns the single account and tracks whether the user is on the login form
//! or the profile screen.

use tracing::{debug, info};

use crate::domain::{Account, LoginForm, ProfileField, Session};

/// Which screen the user is on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    LoggedOut,
    LoggedIn(Session),
}

/// Result of submitting the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    LoggedIn,
    /// Credentials did not match; the password input has been cleared
    Rejected,
    /// Submit while the profile screen is showing; nothing changed
    AlreadyLoggedIn,
}

/// Result of a logout request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    LoggedOut,
    /// The user declined the confirmation; still logged in
    Cancelled,
    NotLoggedIn,
}

/// Login state machine
///
/// `LoggedOut --submit(ok)--> LoggedIn --logout(confirmed)--> LoggedOut`.
/// Rejected submits and declined logouts leave the state untouched.
#[derive(Debug)]
pub struct SessionService {
    account: Account,
    state: LoginState,
    form: LoginForm,
}

impl SessionService {
    pub fn new(account: Account) -> Self {
        Self {
            account,
            state: LoginState::LoggedOut,
            form: LoginForm::default(),
        }
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, LoginState::LoggedIn(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            LoginState::LoggedIn(session) => Some(session),
            LoginState::LoggedOut => None,
        }
    }

    /// Current contents of the login form
    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Handle a login form submit
    pub fn submit(&mut self, form: LoginForm) -> SubmitOutcome {
        if self.is_logged_in() {
            debug!("submit ignored, already logged in");
            return SubmitOutcome::AlreadyLoggedIn;
        }

        self.form = form;
        if self.account.check_credentials(&self.form.username, &self.form.password) {
            info!(username = %self.form.username, "login succeeded");
            self.state = LoginState::LoggedIn(Session::start(self.account.username()));
            self.form.clear();
            SubmitOutcome::LoggedIn
        } else {
            info!(username = %self.form.username, "login rejected");
            self.form.clear_password();
            SubmitOutcome::Rejected
        }
    }

    /// Handle the logout control once the user has answered the confirmation
    pub fn logout(&mut self, confirmed: bool) -> LogoutOutcome {
        if !self.is_logged_in() {
            debug!("logout ignored, not logged in");
            return LogoutOutcome::NotLoggedIn;
        }
        if !confirmed {
            debug!("logout cancelled");
            return LogoutOutcome::Cancelled;
        }

        self.account.logout();
        let previous = std::mem::replace(&mut self.state, LoginState::LoggedOut);
        if let LoginState::LoggedIn(session) = previous {
            info!(
                username = %session.username,
                started_at = %session.started_at,
                "logged out"
            );
        }
        self.form.clear();
        LogoutOutcome::LoggedOut
    }

    /// Profile fields for the profile screen, `None` while logged out
    pub fn profile(&self) -> Option<&[ProfileField]> {
        if !self.is_logged_in() {
            return None;
        }
        self.account.profile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::demo::demo_account;

    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing::Level;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    /// Run `f` with logs at `level` and above captured
    fn capture_logs(level: Level, f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs.text()
    }

    fn service() -> SessionService {
        SessionService::new(demo_account())
    }

    #[test]
    fn test_starts_logged_out() {
        let service = service();
        assert_eq!(service.state(), &LoginState::LoggedOut);
        assert!(service.profile().is_none());
        assert!(service.session().is_none());
        assert_eq!(service.form(), &LoginForm::default());
    }

    #[test]
    fn test_good_submit_logs_in() {
        let mut service = service();
        let outcome = service.submit(LoginForm::new("eugene", "123456"));

        assert_eq!(outcome, SubmitOutcome::LoggedIn);
        assert!(service.is_logged_in());
        assert_eq!(service.session().unwrap().username, "eugene");
        assert!(service.account().is_authenticated());

        let fields = service.profile().unwrap();
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[0].label, "Name:");
        assert_eq!(fields[0].value, "Dela Cruz Eugene Kim A.");
    }

    #[test]
    fn test_bad_submit_clears_password_only() {
        let mut service = service();
        let outcome = service.submit(LoginForm::new("eugene", "wrong"));

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert_eq!(service.state(), &LoginState::LoggedOut);
        assert_eq!(service.form().username, "eugene");
        assert!(service.form().password.is_empty());
        assert!(!service.account().is_authenticated());
    }

    #[test]
    fn test_rejected_login_is_quiet_at_default_level() {
        let logs = capture_logs(Level::WARN, || {
            service().submit(LoginForm::new("eugene", "wrong"));
        });
        assert!(logs.is_empty(), "unexpected output: {}", logs);
    }

    #[test]
    fn test_rejected_login_logs_username_not_password() {
        let logs = capture_logs(Level::INFO, || {
            service().submit(LoginForm::new("eugene", "wrong-password"));
        });
        assert!(logs.contains("login rejected"));
        assert!(logs.contains("eugene"));
        assert!(!logs.contains("wrong-password"));
    }

    #[test]
    fn test_repeated_failures_are_idempotent() {
        let mut service = service();
        for _ in 0..3 {
            let outcome = service.submit(LoginForm::new("EUGENE", "123456"));
            assert_eq!(outcome, SubmitOutcome::Rejected);
            assert_eq!(service.state(), &LoginState::LoggedOut);
            assert!(service.profile().is_none());
        }
    }

    #[test]
    fn test_submit_while_logged_in_is_ignored() {
        let mut service = service();
        service.submit(LoginForm::new("eugene", "123456"));
        let session = service.session().cloned();

        assert_eq!(
            service.submit(LoginForm::new("someone", "else")),
            SubmitOutcome::AlreadyLoggedIn
        );
        assert_eq!(service.session().cloned(), session);
    }

    #[test]
    fn test_confirmed_logout() {
        let mut service = service();
        service.submit(LoginForm::new("eugene", "123456"));

        assert_eq!(service.logout(true), LogoutOutcome::LoggedOut);
        assert_eq!(service.state(), &LoginState::LoggedOut);
        assert!(!service.account().is_authenticated());
        assert!(service.profile().is_none());
        assert_eq!(service.form(), &LoginForm::default());
    }

    #[test]
    fn test_declined_logout_keeps_session() {
        let mut service = service();
        service.submit(LoginForm::new("eugene", "123456"));
        let before = service.state().clone();

        assert_eq!(service.logout(false), LogoutOutcome::Cancelled);
        assert_eq!(service.state(), &before);
        assert_eq!(service.profile().unwrap().len(), 6);
    }

    #[test]
    fn test_logout_while_logged_out() {
        let mut service = service();
        assert_eq!(service.logout(true), LogoutOutcome::NotLoggedIn);
        assert_eq!(service.state(), &LoginState::LoggedOut);
    }

    #[test]
    fn test_login_again_after_logout() {
        let mut service = service();
        service.submit(LoginForm::new("eugene", "123456"));
        service.logout(true);

        let outcome = service.submit(LoginForm::new("eugene", "nope"));
        assert_eq!(outcome, SubmitOutcome::Rejected);
        let outcome = service.submit(LoginForm::new("eugene", "123456"));
        assert_eq!(outcome, SubmitOutcome::LoggedIn);
        assert_eq!(service.profile().unwrap().len(), 6);
    }
}
