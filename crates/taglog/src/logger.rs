//! crates/taglog/src/logger.rs
//! Tagged logger instances with their own level switches.

use std::fmt::Display;

use taglog_sink::Severity;

use crate::error::ConfigError;
use crate::facility::Facility;
use crate::levels::Levels;
use crate::recover::Abort;
use crate::timestamp::TimeFormat;

/// A tagged logger with its own level switches.
///
/// Every line a logger prints starts with the level label followed by the
/// logger's prefix: `[tag]`, or `[timestamp][tag]` when a time format is
/// configured. A line is printed only when both the logger's switch and the
/// facility's switch for its level are on.
///
/// A logger without an attached facility reads the global one (see
/// [`crate::facility()`]) on every call.
///
/// # Examples
///
/// ```
/// use taglog::{Facility, Levels, Logger, MemoryLog};
///
/// let log = MemoryLog::new();
/// let facility = Facility::with_output(Levels::new(true, true, false), log.clone());
/// let net = Logger::builder("net")
///     .warn(false)
///     .facility(facility)
///     .build();
///
/// net.debug(&[&"dial", &"10.0.0.1"]);
/// net.warn(&[&"dropped by the logger"]);
/// net.error(&[&"dropped by the facility"]);
///
/// assert_eq!(log.lines(), vec!["[DBG] [net] dial 10.0.0.1".to_string()]);
/// ```
#[derive(Clone, Debug)]
pub struct Logger {
    tag: String,
    levels: Levels,
    time_format: Option<TimeFormat>,
    facility: Option<Facility>,
}

impl Logger {
    /// Creates a logger without a timestamp.
    ///
    /// The tag is used as given; an empty tag prints as `[]`.
    #[must_use]
    pub fn new(tag: impl Into<String>, debug: bool, warn: bool, error: bool) -> Self {
        Self {
            tag: tag.into(),
            levels: Levels::new(debug, warn, error),
            time_format: None,
            facility: None,
        }
    }

    /// Creates a logger whose prefix carries a timestamp rendered with
    /// `format`.
    pub fn with_time_format(
        tag: impl Into<String>,
        debug: bool,
        warn: bool,
        error: bool,
        format: &str,
    ) -> Result<Self, ConfigError> {
        Self::builder(tag)
            .levels(Levels::new(debug, warn, error))
            .time_format(format)
            .map(LoggerBuilder::build)
    }

    /// Starts a builder with every level enabled.
    #[must_use]
    pub fn builder(tag: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(tag)
    }

    /// Returns the tag.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns this logger's own level switches.
    #[must_use]
    pub const fn levels(&self) -> Levels {
        self.levels
    }

    /// Returns the timestamp format, if any.
    #[must_use]
    pub const fn time_format(&self) -> Option<&TimeFormat> {
        self.time_format.as_ref()
    }

    /// Returns the facility this logger writes through.
    #[must_use]
    pub fn facility(&self) -> &Facility {
        match &self.facility {
            Some(facility) => facility,
            None => crate::facility(),
        }
    }

    /// Renders the prefix placed after the level label.
    #[must_use]
    pub fn prefix(&self) -> String {
        match &self.time_format {
            Some(format) => format!("[{}][{}]", format.now(), self.tag),
            None => format!("[{}]", self.tag),
        }
    }

    /// Reports whether a line at `severity` passes both gates.
    #[must_use]
    pub fn should_print(&self, severity: Severity) -> bool {
        self.levels.enabled(severity) && self.facility().enabled(severity)
    }

    /// Logs `args` at debug level.
    pub fn debug(&self, args: &[&dyn Display]) {
        self.log(Severity::Debug, args);
    }

    /// Logs `args` at warn level.
    pub fn warn(&self, args: &[&dyn Display]) {
        self.log(Severity::Warn, args);
    }

    /// Logs `args` at error level.
    pub fn error(&self, args: &[&dyn Display]) {
        self.log(Severity::Error, args);
    }

    /// Logs `args` at `severity`, prefixed with the tag.
    pub fn log(&self, severity: Severity, args: &[&dyn Display]) {
        if let Some(prefix) = self.gated_prefix(severity) {
            self.facility().log_parts(severity, Some(&prefix), args, None);
        }
    }

    /// Renders the prefix only when a line at `severity` passes both gates,
    /// so a suppressed line never reads the clock.
    pub(crate) fn gated_prefix(&self, severity: Severity) -> Option<String> {
        self.should_print(severity).then(|| self.prefix())
    }

    /// Runs `f` as a recovery scope through this logger's facility.
    ///
    /// The recovery line does not carry the tag. See
    /// [`Facility::break_on_error`].
    pub fn break_on_error<F, R>(&self, f: F) -> Result<R, Abort>
    where
        F: FnOnce() -> R,
    {
        self.facility().break_on_error(f)
    }
}

/// Builds a [`Logger`].
#[derive(Clone, Debug)]
pub struct LoggerBuilder {
    tag: String,
    levels: Levels,
    time_format: Option<TimeFormat>,
    facility: Option<Facility>,
}

impl LoggerBuilder {
    fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            levels: Levels::ALL,
            time_format: None,
            facility: None,
        }
    }

    /// Replaces all three level switches.
    #[must_use]
    pub const fn levels(mut self, levels: Levels) -> Self {
        self.levels = levels;
        self
    }

    /// Sets the debug switch.
    #[must_use]
    pub const fn debug(mut self, enabled: bool) -> Self {
        self.levels.debug = enabled;
        self
    }

    /// Sets the warn switch.
    #[must_use]
    pub const fn warn(mut self, enabled: bool) -> Self {
        self.levels.warn = enabled;
        self
    }

    /// Sets the error switch.
    #[must_use]
    pub const fn error(mut self, enabled: bool) -> Self {
        self.levels.error = enabled;
        self
    }

    /// Sets the timestamp format. An empty string clears it.
    pub fn time_format(mut self, format: &str) -> Result<Self, ConfigError> {
        self.time_format = if format.is_empty() {
            None
        } else {
            Some(TimeFormat::parse(format)?)
        };
        Ok(self)
    }

    /// Attaches a facility in place of the global one.
    #[must_use]
    pub fn facility(mut self, facility: Facility) -> Self {
        self.facility = Some(facility);
        self
    }

    /// Builds the logger.
    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            tag: self.tag,
            levels: self.levels,
            time_format: self.time_format,
            facility: self.facility,
        }
    }
}
