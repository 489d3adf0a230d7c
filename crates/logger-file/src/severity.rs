//! Syslog-style severities and their fixed names

use std::borrow::Cow;
use std::fmt;

/// Severity of a log event, numbered like syslog priorities
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum Severity {
    /// System is unusable
    Emergency = 0,
    /// Action must be taken immediately
    Alert = 1,
    /// Critical conditions
    Critical = 2,
    /// Error conditions
    Error = 3,
    /// Warning conditions
    Warning = 4,
    /// Normal but significant condition
    Notice = 5,
    /// Informational messages
    Info = 6,
    /// Debug-level messages
    Debug = 7,
}

const SEVERITY_NAMES: [(Severity, &str); 8] = [
    (Severity::Emergency, "EMERGENCY"),
    (Severity::Alert, "ALERT"),
    (Severity::Critical, "CRITICAL"),
    (Severity::Error, "ERROR"),
    (Severity::Warning, "WARNING"),
    (Severity::Notice, "NOTICE"),
    (Severity::Info, "INFO"),
    (Severity::Debug, "DEBUG"),
];

impl Severity {
    /// All severities, most severe first
    pub const ALL: [Self; 8] = [
        Self::Emergency,
        Self::Alert,
        Self::Critical,
        Self::Error,
        Self::Warning,
        Self::Notice,
        Self::Info,
        Self::Debug,
    ];

    /// Numeric code of this severity
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Look up a severity by numeric code
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|severity| severity.code() == code)
    }

    /// Fixed human-readable name
    #[must_use]
    pub fn name(self) -> &'static str {
        SEVERITY_NAMES[self as usize].1
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Severity> for i32 {
    fn from(severity: Severity) -> Self {
        severity.code()
    }
}

/// Resolve the name for a raw severity code.
///
/// Codes outside the table are never rejected; they render as `UNKNOWN<code>`.
#[must_use]
pub fn severity_name(code: i32) -> Cow<'static, str> {
    match Severity::from_code(code) {
        Some(severity) => Cow::Borrowed(severity.name()),
        None => Cow::Owned(format!("UNKNOWN{code}")),
    }
}
