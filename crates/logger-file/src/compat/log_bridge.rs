//! Bridge from the `log` crate

use crate::{FileLogger, Severity};
use log::{Log, Metadata, Record};
use std::sync::Arc;

/// Implements the log crate's `Log` trait on top of a [`FileLogger`]
pub struct LogBridge {
    logger: Arc<FileLogger>,
}

impl LogBridge {
    /// Create a new log bridge
    pub const fn new(logger: Arc<FileLogger>) -> Self {
        Self { logger }
    }
}

impl Log for LogBridge {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let severity = map_level(record.level());
        let message = format!("{}", record.args());

        // Nowhere to report a failed append from inside the log facade
        let _ = self.logger.log_event(severity, &message);
    }

    fn flush(&self) {}
}

/// Map log levels to severities
pub const fn map_level(level: log::Level) -> Severity {
    match level {
        log::Level::Error => Severity::Error,
        log::Level::Warn => Severity::Warning,
        log::Level::Info => Severity::Info,
        log::Level::Debug | log::Level::Trace => Severity::Debug,
    }
}

/// Route the `log` crate's macros into `logger`
///
/// # Errors
///
/// Returns an error if a global logger has already been installed.
///
/// # Example
/// ```no_run
/// use proven_logger_file::{FileLogger, compat::init_log_bridge};
/// use std::sync::Arc;
///
/// let logger = Arc::new(FileLogger::new("/var/log", "app.log", "app", None).unwrap());
/// init_log_bridge(logger).expect("Failed to set log bridge");
/// ```
pub fn init_log_bridge(logger: Arc<FileLogger>) -> Result<(), log::SetLoggerError> {
    // log::set_logger requires a 'static logger
    let bridge = Box::leak(Box::new(LogBridge::new(logger)));
    log::set_logger(bridge)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
