//! Process-wide time zone context and timestamp rendering

use crate::{Error, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, Utc};
use std::fmt::Write as FmtWrite;
use std::str::FromStr;
use std::sync::OnceLock;

static TIMEZONE: OnceLock<TimeZone> = OnceLock::new();

/// Time zone used when rendering `%date` placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZone {
    /// The operating system's local time zone
    #[default]
    Local,
    /// Coordinated Universal Time
    Utc,
    /// A fixed offset from UTC
    Fixed(FixedOffset),
}

impl TimeZone {
    /// Current time in this zone
    #[must_use]
    pub fn now(self) -> DateTime<FixedOffset> {
        match self {
            Self::Local => Local::now().fixed_offset(),
            Self::Utc => Utc::now().fixed_offset(),
            Self::Fixed(offset) => Utc::now().with_timezone(&offset),
        }
    }
}

impl FromStr for TimeZone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("local") {
            return Ok(Self::Local);
        }
        if s.eq_ignore_ascii_case("utc") || s.eq_ignore_ascii_case("z") {
            return Ok(Self::Utc);
        }

        s.parse::<FixedOffset>()
            .map(Self::Fixed)
            .map_err(|_| Error::Configuration(format!("invalid time zone: {s}")))
    }
}

/// Initialize the process-wide time zone.
///
/// Only the first call has an effect; later calls return the zone that is
/// already in place.
pub fn init_timezone(zone: Option<TimeZone>) -> TimeZone {
    *TIMEZONE.get_or_init(|| zone.unwrap_or_default())
}

/// The process-wide time zone, initializing it to local time if needed
#[must_use]
pub fn current_timezone() -> TimeZone {
    init_timezone(None)
}

/// Check that `format` only contains valid strftime specifiers
#[must_use]
pub fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Render `time` with a strftime-style `format`.
///
/// Returns `None` when the format contains an invalid specifier.
#[must_use]
pub fn format_timestamp(time: &DateTime<FixedOffset>, format: &str) -> Option<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return None;
    }

    let mut out = String::new();
    write!(out, "{}", time.format_with_items(items.iter())).ok()?;
    Some(out)
}
