//! Custom error types for Snapcap
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Main error type for Snapcap operations
#[derive(Error, Debug)]
pub enum SnapcapError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Server process errors (failed to spawn the web app)
    #[error("Server error: {0}")]
    Server(String),

    /// Capture tool errors (failed to run the screenshot script)
    #[error("Capture error: {0}")]
    Capture(String),

    /// HTTP request errors from the liveness probe
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),
}

/// Convenience Result type for Snapcap operations
pub type Result<T> = std::result::Result<T, SnapcapError>;

impl SnapcapError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a server error
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// Create a capture error
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture(msg.into())
    }
}
