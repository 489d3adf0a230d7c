//! Templated append-only file logger
//!
//! This crate writes discrete (severity, message) events to a single log
//! file, one line per event:
//! - `%process`, `%level` and `%date{...}` placeholders resolved per call
//! - Syslog-style severity names, with `UNKNOWN<n>` for unmapped codes
//! - Write access validated up front, the file created if missing
//! - Each line appended with its own open/append/close, serialized per logger
//! - Optional bridges from `tracing` and `log`

#![warn(missing_docs, unreachable_pub)]
#![forbid(unsafe_code)]

pub mod compat;
mod config;
mod error;
mod severity;
mod template;
pub mod timezone;
mod writer;

pub use config::{
    DEFAULT_LOG_FILE, DEFAULT_LOGGING_DIR, DEFAULT_PROCESS_NAME, FileLoggerConfig,
    FileLoggerConfigBuilder,
};
pub use error::{Error, Result};
pub use severity::{Severity, severity_name};
pub use template::{
    DEFAULT_DATE_FORMAT, DEFAULT_LOG_FORMAT, DatePlaceholder, FormatTemplate, LEVEL_PLACEHOLDER,
    MESSAGE_PLACEHOLDER, PROCESS_PLACEHOLDER,
};
pub use timezone::TimeZone;
pub use writer::{FileLogger, LoggingHandler};
