//! Tests for the tracing bridge

#![cfg(feature = "tracing-compat")]

use proven_logger_file::*;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_tracing_bridge() {
    let dir = TempDir::new().unwrap();
    let logger = Arc::new(FileLogger::new(dir.path(), "app.log", "svc", None).unwrap());
    logger.set_log_format("%process %level %msg");

    compat::init_tracing_bridge(logger.clone()).unwrap();

    tracing::warn!("disk almost full");
    tracing::info!(count = 42, "message with field");
    tracing::trace!("very chatty");
    {
        let span = tracing::info_span!("request");
        let _enter = span.enter();
        tracing::error!("handler failed");
    }

    let contents = fs::read_to_string(logger.path()).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(
        lines,
        [
            "svc WARNING disk almost full",
            "svc INFO message with field count=42",
            "svc DEBUG very chatty",
            "svc ERROR request: handler failed",
        ]
    );

    // A second global subscriber is refused
    assert!(compat::init_tracing_bridge(logger).is_err());
}
