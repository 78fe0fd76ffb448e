//! crates/taglog/src/levels.rs
//! The three level switches shared by facilities and loggers.

use std::fmt;

use taglog_sink::Severity;

/// Enable switches for the debug, warn, and error levels.
///
/// A [`Facility`](crate::Facility) holds one set as its global gate and every
/// [`Logger`](crate::Logger) holds another. The switches only decide whether a
/// line is printed; they never affect whether a check helper aborts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Levels {
    /// Debug level enabled.
    pub debug: bool,
    /// Warn level enabled.
    pub warn: bool,
    /// Error level enabled.
    pub error: bool,
}

impl Levels {
    /// Every level enabled.
    pub const ALL: Self = Self::new(true, true, true);
    /// Every level disabled.
    pub const NONE: Self = Self::new(false, false, false);

    /// Creates a set of switches.
    #[must_use]
    pub const fn new(debug: bool, warn: bool, error: bool) -> Self {
        Self { debug, warn, error }
    }

    /// Reports whether `severity` is enabled.
    #[must_use]
    pub const fn enabled(&self, severity: Severity) -> bool {
        match severity {
            Severity::Debug => self.debug,
            Severity::Warn => self.warn,
            Severity::Error => self.error,
        }
    }

    /// Sets the switch for `severity`.
    pub fn set(&mut self, severity: Severity, enabled: bool) {
        match severity {
            Severity::Debug => self.debug = enabled,
            Severity::Warn => self.warn = enabled,
            Severity::Error => self.error = enabled,
        }
    }

    /// Returns a copy with the switch for `severity` replaced.
    #[must_use]
    pub fn with(mut self, severity: Severity, enabled: bool) -> Self {
        self.set(severity, enabled);
        self
    }

    /// Returns the switches enabled in both `self` and `other`.
    #[must_use]
    pub const fn intersect(self, other: Self) -> Self {
        Self::new(
            self.debug && other.debug,
            self.warn && other.warn,
            self.error && other.error,
        )
    }
}

impl Default for Levels {
    fn default() -> Self {
        Self::ALL
    }
}

impl fmt::Display for Levels {
    /// Renders the enabled levels as a comma-separated list accepted by
    /// [`Levels::parse`], or `none`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = [
            (self.debug, "debug"),
            (self.warn, "warn"),
            (self.error, "error"),
        ]
        .into_iter()
        .filter_map(|(enabled, name)| enabled.then_some(name))
        .collect();

        if names.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&names.join(","))
        }
    }
}
