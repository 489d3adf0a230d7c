//! Configuration for the file logger

use crate::timezone::TimeZone;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default logging directory
pub const DEFAULT_LOGGING_DIR: &str = "log/";

/// Default log file name
pub const DEFAULT_LOG_FILE: &str = "simplesamlphp.log";

/// Default process name
pub const DEFAULT_PROCESS_NAME: &str = "SimpleSAMLphp";

/// Configuration snapshot used to build a [`FileLogger`](crate::FileLogger)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FileLoggerConfig {
    /// Directory holding the log file
    #[serde(alias = "loggingdir")]
    pub logging_dir: PathBuf,

    /// Log file name inside `logging_dir`
    #[serde(alias = "logging.logfile")]
    pub log_file: String,

    /// Label substituted for `%process`
    #[serde(alias = "logging.processname")]
    pub process_name: String,

    /// Line template; the built-in default is used when unset
    #[serde(alias = "logging.format")]
    pub format: Option<String>,

    /// Date sub-format for a bare `%date`
    pub date_format: Option<String>,

    /// Time zone for `%date` (`local`, `UTC` or an offset such as `+02:00`)
    pub timezone: Option<String>,

    /// Base directory a relative `logging_dir` is resolved against
    pub base_dir: Option<PathBuf>,
}

impl Default for FileLoggerConfig {
    fn default() -> Self {
        Self {
            logging_dir: PathBuf::from(DEFAULT_LOGGING_DIR),
            log_file: DEFAULT_LOG_FILE.to_string(),
            process_name: DEFAULT_PROCESS_NAME.to_string(),
            format: None,
            date_format: None,
            timezone: None,
            base_dir: None,
        }
    }
}

impl FileLoggerConfig {
    /// Create a new config builder
    #[must_use]
    pub fn builder() -> FileLoggerConfigBuilder {
        FileLoggerConfigBuilder::default()
    }

    /// Parse a TOML document
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or has fields of the
    /// wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Directory the log file lives in, with `base_dir` applied
    #[must_use]
    pub fn resolved_logging_dir(&self) -> PathBuf {
        match &self.base_dir {
            Some(base) if self.logging_dir.is_relative() => base.join(&self.logging_dir),
            _ => self.logging_dir.clone(),
        }
    }

    /// Full path of the log file
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.resolved_logging_dir().join(&self.log_file)
    }

    /// Parsed time zone, if one is configured
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the zone cannot be parsed.
    pub fn parsed_timezone(&self) -> Result<Option<TimeZone>> {
        self.timezone.as_deref().map(str::parse::<TimeZone>).transpose()
    }

    /// Check the snapshot for values that can never work
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.log_file.trim().is_empty() {
            return Err(Error::Configuration("log file name is empty".to_string()));
        }
        if Path::new(&self.log_file).file_name().is_none() {
            return Err(Error::Configuration(format!(
                "log file name is not a file: {}",
                self.log_file
            )));
        }
        self.parsed_timezone()?;
        Ok(())
    }
}

/// Builder for [`FileLoggerConfig`]
#[derive(Debug, Default)]
pub struct FileLoggerConfigBuilder {
    config: FileLoggerConfig,
}

impl FileLoggerConfigBuilder {
    /// Set the logging directory
    #[must_use]
    pub fn logging_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.logging_dir = dir.into();
        self
    }

    /// Set the log file name
    #[must_use]
    pub fn log_file(mut self, name: impl Into<String>) -> Self {
        self.config.log_file = name.into();
        self
    }

    /// Set the process name
    #[must_use]
    pub fn process_name(mut self, name: impl Into<String>) -> Self {
        self.config.process_name = name.into();
        self
    }

    /// Set the line template
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.config.format = Some(format.into());
        self
    }

    /// Set the default date sub-format
    #[must_use]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.config.date_format = Some(format.into());
        self
    }

    /// Set the time zone
    #[must_use]
    pub fn timezone(mut self, zone: impl Into<String>) -> Self {
        self.config.timezone = Some(zone.into());
        self
    }

    /// Set the base directory for a relative logging directory
    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.base_dir = Some(dir.into());
        self
    }

    /// Build the config
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting config fails [`FileLoggerConfig::validate`].
    pub fn build(self) -> Result<FileLoggerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileLoggerConfig::default();
        assert_eq!(config.log_path(), PathBuf::from("log/simplesamlphp.log"));
        assert_eq!(config.process_name, "SimpleSAMLphp");
        assert!(config.format.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml() {
        let config = FileLoggerConfig::from_toml_str(
            r#"
            logging_dir = "/var/log/idp"
            log_file = "idp.log"
            process_name = "idp"
            format = "%date{%Y} %process %level %msg"
            timezone = "UTC"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_path(), PathBuf::from("/var/log/idp/idp.log"));
        assert_eq!(config.process_name, "idp");
        assert_eq!(config.parsed_timezone().unwrap(), Some(TimeZone::Utc));
        assert!(config.date_format.is_none());
    }

    #[test]
    fn test_legacy_keys() {
        let config = FileLoggerConfig::from_toml_str(
            r#"
            loggingdir = "logs"
            "logging.logfile" = "app.log"
            "logging.processname" = "app"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_path(), PathBuf::from("logs/app.log"));
        assert_eq!(config.process_name, "app");
    }

    #[test]
    fn test_malformed_toml() {
        let err = FileLoggerConfig::from_toml_str("log_file = 12").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_base_dir() {
        let config = FileLoggerConfig::builder()
            .base_dir("/srv/app")
            .logging_dir("log")
            .build()
            .unwrap();
        assert_eq!(
            config.log_path(),
            PathBuf::from("/srv/app/log/simplesamlphp.log")
        );

        let absolute = FileLoggerConfig::builder()
            .base_dir("/srv/app")
            .logging_dir("/var/log")
            .build()
            .unwrap();
        assert_eq!(absolute.resolved_logging_dir(), PathBuf::from("/var/log"));
    }

    #[test]
    fn test_validation() {
        assert!(matches!(
            FileLoggerConfig::builder().log_file("  ").build(),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            FileLoggerConfig::builder().log_file("..").build(),
            Err(Error::Configuration(_))
        ));
        assert!(matches!(
            FileLoggerConfig::builder().timezone("nowhere").build(),
            Err(Error::Configuration(_))
        ));
    }
}
