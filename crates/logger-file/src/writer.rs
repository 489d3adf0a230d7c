//! The append-only file logger

use crate::config::FileLoggerConfig;
use crate::severity::{Severity, severity_name};
use crate::template::{
    DEFAULT_DATE_FORMAT, FormatTemplate, LEVEL_PLACEHOLDER, PROCESS_PLACEHOLDER, substitute,
};
use crate::timezone::{self, TimeZone};
use crate::{Error, Result};
use parking_lot::{Mutex, RwLock};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Something that accepts (severity, message) events
pub trait LoggingHandler: Send + Sync {
    /// Render and write one message at the given raw severity code
    ///
    /// # Errors
    ///
    /// Returns an error if the message could not be written.
    fn log(&self, level: i32, message: &str) -> Result<()>;

    /// Replace the active format template
    fn set_log_format(&self, format: &str);
}

/// Logger that appends one templated line per event to a single file.
///
/// The file is opened, appended to and closed on every call, so external
/// rotation or truncation is picked up without any coordination.
#[derive(Debug)]
pub struct FileLogger {
    path: PathBuf,
    process_name: String,
    date_format: String,
    timezone: TimeZone,
    format: RwLock<Arc<FormatTemplate>>,
    /// Serializes appends so lines never interleave
    append_lock: Mutex<()>,
}

impl FileLogger {
    /// Open a logger writing to `dir/file_name`.
    ///
    /// An existing file must be writable; a missing one is created empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Permission`] if the file exists but is not writable,
    /// or [`Error::Creation`] if it does not exist and cannot be created.
    pub fn new(
        dir: impl AsRef<Path>,
        file_name: impl AsRef<Path>,
        process_name: &str,
        date_format: Option<&str>,
    ) -> Result<Self> {
        let path = dir.as_ref().join(file_name);
        ensure_writable(&path)?;

        let zone = timezone::init_timezone(None);
        let date_format = date_format.unwrap_or(DEFAULT_DATE_FORMAT).to_string();
        if !timezone::is_valid_format(&date_format) {
            warn!("invalid default date format {date_format:?}; bare %date will not be replaced");
        }

        debug!(path = %path.display(), "opened log file");

        Ok(Self {
            path,
            process_name: sanitize_process_name(process_name),
            date_format,
            timezone: zone,
            format: RwLock::new(Arc::new(FormatTemplate::default())),
            append_lock: Mutex::new(()),
        })
    }

    /// Build a logger from a configuration snapshot.
    ///
    /// The configured time zone only takes effect if the process-wide zone
    /// has not been initialized yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or the log file cannot be
    /// opened for writing.
    pub fn from_config(config: &FileLoggerConfig) -> Result<Self> {
        config.validate()?;
        timezone::init_timezone(config.parsed_timezone()?);

        let logger = Self::new(
            config.resolved_logging_dir(),
            &config.log_file,
            &config.process_name,
            config.date_format.as_deref(),
        )?;

        if let Some(format) = &config.format {
            logger.set_log_format(format);
        }

        Ok(logger)
    }

    /// Path of the log file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sanitized process name substituted for `%process`
    #[must_use]
    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    /// Date sub-format used for a bare `%date`
    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Snapshot of the active format template
    #[must_use]
    pub fn format(&self) -> Arc<FormatTemplate> {
        self.format.read().clone()
    }

    /// Replace the active format template.
    ///
    /// No validation failure is possible; placeholders that cannot be
    /// resolved are written literally.
    pub fn set_log_format(&self, format: &str) {
        let template = FormatTemplate::new(format);
        if let Some(sub) = template.date().and_then(|date| date.format()) {
            if !timezone::is_valid_format(sub) {
                warn!("invalid date format {sub:?} in log template; it will be written literally");
            }
        }

        *self.format.write() = Arc::new(template);
    }

    /// Render `message` and append it to the log file.
    ///
    /// `%process`, `%level` and the template's `%date` placeholder are
    /// replaced wherever they appear in `message`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the line could not be appended.
    pub fn log(&self, level: i32, message: &str) -> Result<()> {
        let line = self.render(level, message);
        self.append(&line)
    }

    /// Compose a line from the active template with `%msg` set to `message`,
    /// then log it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Write`] if the line could not be appended.
    pub fn log_event(&self, severity: Severity, message: &str) -> Result<()> {
        let composed = self.format().compose(message);
        self.log(severity.code(), &composed)
    }

    /// Render `message` into the line `log` would write, without the line
    /// terminator.
    #[must_use]
    pub fn render(&self, level: i32, message: &str) -> String {
        let template = self.format();
        let level_name = severity_name(level);
        let timestamp = template.date().and_then(|date| {
            let format = date.format().unwrap_or(self.date_format.as_str());
            timezone::format_timestamp(&self.timezone.now(), format)
                .map(|stamp| (date.token(), stamp))
        });

        let mut substitutions = vec![
            (PROCESS_PLACEHOLDER, self.process_name.as_str()),
            (LEVEL_PLACEHOLDER, level_name.as_ref()),
        ];
        if let Some((token, stamp)) = &timestamp {
            substitutions.push((*token, stamp.as_str()));
        }

        substitute(message, &substitutions)
    }

    fn append(&self, line: &str) -> Result<()> {
        let mut buf = String::with_capacity(line.len() + LINE_ENDING.len());
        buf.push_str(line);
        buf.push_str(LINE_ENDING);

        let _guard = self.append_lock.lock();
        let write = || -> io::Result<()> {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            file.write_all(buf.as_bytes())?;
            file.flush()
        };

        write().map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl LoggingHandler for FileLogger {
    fn log(&self, level: i32, message: &str) -> Result<()> {
        Self::log(self, level, message)
    }

    fn set_log_format(&self, format: &str) {
        Self::set_log_format(self, format);
    }
}

/// Strip ASCII control characters and the no-break space
fn sanitize_process_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_ascii_control() && *c != '\u{a0}')
        .collect()
}

/// Check an existing file can be written, or create it empty
fn ensure_writable(path: &Path) -> Result<()> {
    match path.metadata() {
        Ok(metadata) => {
            if metadata.permissions().readonly() || !metadata.is_file() {
                return Err(Error::Permission {
                    path: path.to_path_buf(),
                });
            }
            OpenOptions::new()
                .append(true)
                .open(path)
                .map(drop)
                .map_err(|_| Error::Permission {
                    path: path.to_path_buf(),
                })
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(drop)
            .map_err(|source| Error::Creation {
                path: path.to_path_buf(),
                source,
            }),
        Err(_) => Err(Error::Permission {
            path: path.to_path_buf(),
        }),
    }
}
