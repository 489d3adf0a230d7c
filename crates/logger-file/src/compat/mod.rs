//! Bridges that forward events from other logging crates into a [`FileLogger`](crate::FileLogger)

#[cfg(feature = "log-compat")]
pub mod log_bridge;

#[cfg(feature = "tracing-compat")]
pub mod tracing_bridge;

#[cfg(feature = "log-compat")]
pub use log_bridge::{LogBridge, init_log_bridge};

#[cfg(feature = "tracing-compat")]
pub use tracing_bridge::{FileLoggerLayer, init_tracing_bridge};
