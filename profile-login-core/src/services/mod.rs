//! Service layer - login flow orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case.

mod app;
pub mod demo;
pub mod picture;
mod session;

pub use app::LoginApp;
pub use picture::{PictureError, ProfilePictureService};
pub use session::{LoginState, LogoutOutcome, SessionService, SubmitOutcome};
