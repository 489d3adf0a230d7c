//! Bridge from tracing

use crate::{FileLogger, Severity};
use std::fmt::Write;
use std::sync::Arc;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::{Layer, layer::Context, registry::LookupSpan};

/// A tracing layer that appends every event to a [`FileLogger`]
pub struct FileLoggerLayer {
    logger: Arc<FileLogger>,
}

impl FileLoggerLayer {
    /// Create a new layer
    pub const fn new(logger: Arc<FileLogger>) -> Self {
        Self { logger }
    }
}

impl<S> Layer<S> for FileLoggerLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let severity = map_level(*event.metadata().level());

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let spans: Vec<&str> = ctx
            .event_scope(event)
            .map(|scope| scope.from_root().map(|span| span.name()).collect())
            .unwrap_or_default();

        let text = visitor.finish();
        let message = if spans.is_empty() {
            text
        } else {
            format!("{}: {text}", spans.join("::"))
        };

        // Nowhere to report a failed append from inside a subscriber
        let _ = self.logger.log_event(severity, &message);
    }
}

/// Map tracing levels to severities
pub fn map_level(level: tracing::Level) -> Severity {
    match level {
        tracing::Level::ERROR => Severity::Error,
        tracing::Level::WARN => Severity::Warning,
        tracing::Level::INFO => Severity::Info,
        _ => Severity::Debug,
    }
}

/// Collects the message and flattens other fields into `key=value`
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn push_field(&mut self, field: &Field, value: &dyn std::fmt::Display) {
        let _ = write!(self.fields, " {}={}", field.name(), value);
    }

    fn finish(self) -> String {
        let mut out = self.message;
        out.push_str(&self.fields);
        out
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_field(field, &value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push_field(field, &value);
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push_field(field, &value);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push_field(field, &value);
    }
}

/// Install a global subscriber that appends all tracing events to `logger`
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
///
/// # Example
/// ```no_run
/// use proven_logger_file::{FileLogger, compat::init_tracing_bridge};
/// use std::sync::Arc;
///
/// let logger = Arc::new(FileLogger::new("/var/log", "app.log", "app", None).unwrap());
/// init_tracing_bridge(logger).expect("Failed to set tracing bridge");
/// ```
pub fn init_tracing_bridge(logger: Arc<FileLogger>) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::prelude::*;

    // set_global_default leaves the `log` facade free for init_log_bridge
    let subscriber = tracing_subscriber::registry().with(FileLoggerLayer::new(logger));
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
