//! Error types for file-based logging

use std::io;
use std::path::PathBuf;

/// Result type for file logger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during file logging
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The log file exists but the current user cannot write to it
    #[error("could not write to log file: {}", path.display())]
    Permission {
        /// The log file that is not writable
        path: PathBuf,
    },

    /// The log file did not exist and could not be created
    #[error(
        "could not create log file: {}. The logging directory is not writable for the current user: {source}",
        path.display()
    )]
    Creation {
        /// The log file that failed to be created
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// Appending a line to the log file failed
    #[error("failed to append to log file {}: {source}", path.display())]
    Write {
        /// The log file being appended to
        path: PathBuf,
        /// The underlying error
        source: io::Error,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Malformed configuration document
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
