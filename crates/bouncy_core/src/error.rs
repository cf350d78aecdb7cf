//! Error types
//!
//! The scroll state machine itself never fails; errors only come from loading
//! configuration files.

use thiserror::Error;

/// Bouncy scroll errors
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Failed to read a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fallible bouncy operations
pub type Result<T> = std::result::Result<T, Error>;
