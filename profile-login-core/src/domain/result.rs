//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Credential mismatches and missing pictures are not errors; they are
/// ordinary outcomes of the login flow.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Frontend error: {0}")]
    Frontend(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a frontend error
    pub fn frontend(msg: impl Into<String>) -> Self {
        Self::Frontend(msg.into())
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;
