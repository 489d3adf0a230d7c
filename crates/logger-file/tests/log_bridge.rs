//! Tests for the log crate bridge

#![cfg(feature = "log-compat")]

use proven_logger_file::*;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_log_bridge() {
    let dir = TempDir::new().unwrap();
    let logger = Arc::new(FileLogger::new(dir.path(), "app.log", "svc", None).unwrap());
    logger.set_log_format("%level: %msg");

    compat::init_log_bridge(logger.clone()).unwrap();

    log::error!("Error from log crate");
    log::warn!("Warning from log crate");
    log::info!("Info from log crate");
    log::debug!("Debug from log crate");
    log::trace!("Trace from log crate");

    let contents = fs::read_to_string(logger.path()).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(
        lines,
        [
            "ERROR: Error from log crate",
            "WARNING: Warning from log crate",
            "INFO: Info from log crate",
            "DEBUG: Debug from log crate",
            "DEBUG: Trace from log crate",
        ]
    );
}
