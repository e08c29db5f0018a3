//! Core domain entities
//!
//! Pure data structures with their invariants - no I/O.

mod account;
pub mod picture;
mod profile;
pub mod result;
mod session;

pub use account::Account;
pub use picture::Picture;
pub use profile::ProfileField;
pub use session::{LoginForm, Session};
