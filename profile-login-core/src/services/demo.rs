//! Demo account data
//!
//! The one account the login form accepts. Credentials are plaintext on
//! purpose: this is a classroom demo, not an authentication system.

use crate::domain::{Account, ProfileField};

pub const DEMO_USERNAME: &str = "eugene";
pub const DEMO_PASSWORD: &str = "123456";

/// File name of the demo profile picture, looked up next to the executable
pub const DEMO_PICTURE: &str = "Kim.png";

/// Profile fields of the demo account, in display order
pub fn demo_profile_fields() -> Vec<ProfileField> {
    [
        ("Name:", "Dela Cruz Eugene Kim A."),
        ("Age:", "19"),
        ("Where do I live:", "Manghinao Proper Bauan Batangas"),
        ("High school graduated:", "Bauan Technical Integrated High School"),
        ("Current School:", "BSU Mabini Campus"),
        ("Hobby:", "Gaming, Workout, Game Programming"),
    ]
    .into_iter()
    .map(ProfileField::from)
    .collect()
}

/// Build the demo account, unauthenticated
pub fn demo_account() -> Account {
    Account::new(DEMO_USERNAME, DEMO_PASSWORD, demo_profile_fields())
}
