//! Login app - drives a frontend through the login/profile cycle

use tracing::debug;

use super::{LogoutOutcome, ProfilePictureService, SessionService, SubmitOutcome};
use crate::domain::result::{Error, Result};
use crate::domain::Account;
use crate::ports::{Frontend, ProfileAction, ProfileView};

/// The view controller: one account, one picture, any frontend
pub struct LoginApp {
    session_service: SessionService,
    picture_service: ProfilePictureService,
}

impl LoginApp {
    pub fn new(account: Account, picture_service: ProfilePictureService) -> Self {
        Self {
            session_service: SessionService::new(account),
            picture_service,
        }
    }

    pub fn session_service(&self) -> &SessionService {
        &self.session_service
    }

    /// Build what the profile screen shows, `None` while logged out
    ///
    /// The picture is loaded here, at render time.
    pub fn profile_view(&self) -> Option<ProfileView> {
        let fields = self.session_service.profile()?.to_vec();
        Some(ProfileView {
            picture: self.picture_service.load(),
            fields,
        })
    }

    /// Run until the frontend reports the window closed
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<()> {
        loop {
            if !self.session_service.is_logged_in() {
                let Some(form) = frontend.login_screen(self.session_service.form())? else {
                    debug!("login screen closed");
                    return Ok(());
                };
                if self.session_service.submit(form) == SubmitOutcome::Rejected {
                    frontend.login_failed()?;
                }
                continue;
            }

            let view = self.profile_view().ok_or_else(|| {
                Error::InvalidState("logged in without profile data".to_string())
            })?;
            match frontend.profile_screen(&view)? {
                ProfileAction::Close => {
                    debug!("profile screen closed");
                    return Ok(());
                }
                ProfileAction::Logout => {
                    let confirmed = frontend.confirm_logout()?;
                    if self.session_service.logout(confirmed) == LogoutOutcome::Cancelled {
                        debug!("staying on profile screen");
                    }
                }
            }
        }
    }
}
