//! Format templates and placeholder substitution
//!
//! A template may carry `%process`, `%level` and `%date` placeholders, with
//! `%date` optionally followed by a strftime sub-format in braces
//! (`%date{%Y-%m-%d}`). Only the first `%date` in a template is honored.

use regex::Regex;
use std::sync::LazyLock;

/// Placeholder replaced with the sanitized process name
pub const PROCESS_PLACEHOLDER: &str = "%process";

/// Placeholder replaced with the severity name
pub const LEVEL_PLACEHOLDER: &str = "%level";

/// Placeholder replaced with the event text when composing a line
pub const MESSAGE_PLACEHOLDER: &str = "%msg";

/// Default date sub-format: month, day and 24-hour time
pub const DEFAULT_DATE_FORMAT: &str = "%b %-d %H:%M:%S";

/// Template installed when none is configured
pub const DEFAULT_LOG_FORMAT: &str = "%date{%b %-d %H:%M:%S} %process %level %msg";

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%date(?:\{([^}]*)\})?").unwrap());

/// The `%date` placeholder found in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePlaceholder {
    token: String,
    format: Option<String>,
}

impl DatePlaceholder {
    /// The literal placeholder text, braces included
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The embedded sub-format, if one was given.
    ///
    /// Empty braces count as no sub-format.
    #[must_use]
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }
}

/// A parsed format template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    raw: String,
    date: Option<DatePlaceholder>,
}

impl FormatTemplate {
    /// Parse a template, locating its first `%date` placeholder
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let date = DATE_REGEX.captures(&raw).and_then(|caps| {
            let token = caps.get(0)?.as_str().to_string();
            let format = caps
                .get(1)
                .map(|m| m.as_str())
                .filter(|f| !f.is_empty())
                .map(str::to_string);
            Some(DatePlaceholder { token, format })
        });

        Self { raw, date }
    }

    /// The template text as given
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The honored `%date` placeholder, if any
    #[must_use]
    pub const fn date(&self) -> Option<&DatePlaceholder> {
        self.date.as_ref()
    }

    /// Build a line from this template by substituting `%msg` with `message`.
    ///
    /// Other placeholders are left in place for the writer to resolve.
    #[must_use]
    pub fn compose(&self, message: &str) -> String {
        substitute(&self.raw, &[(MESSAGE_PLACEHOLDER, message)])
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FORMAT)
    }
}

impl From<&str> for FormatTemplate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Replace every occurrence of each token in `text` in a single pass.
///
/// Tokens must start with `%`. They are tried in order at each position and
/// replacement text is never scanned again.
pub(crate) fn substitute(text: &str, substitutions: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    'scan: while !rest.is_empty() {
        for (token, replacement) in substitutions {
            if rest.starts_with(token) {
                out.push_str(replacement);
                rest = &rest[token.len()..];
                continue 'scan;
            }
        }

        // Tokens start with '%', so copy up to the next one
        let start = usize::from(rest.starts_with('%'));
        let skip = rest[start..].find('%').map_or(rest.len(), |i| i + start);
        out.push_str(&rest[..skip]);
        rest = &rest[skip..];
    }

    out
}
