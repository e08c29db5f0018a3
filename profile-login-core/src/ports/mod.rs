//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core depends
//! only on these traits, not on concrete implementations.

mod frontend;

pub use frontend::{
    Frontend, ProfileAction, ProfileView, CONFIRM_LOGOUT_MESSAGE, CONFIRM_LOGOUT_TITLE,
    LOGIN_FAILED_MESSAGE, LOGIN_FAILED_TITLE, LOGIN_TITLE, PROFILE_TITLE,
};
