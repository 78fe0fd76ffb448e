//! crates/taglog-sink/src/severity.rs
//! Severity labels that lead every rendered line.

use std::fmt;

/// Severity of a log line.
///
/// The variants are ordered from least to most severe. Each renders as a
/// three-letter bracketed label (`[DBG]`, `[WRN]`, `[ERR]`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Diagnostic output for developers.
    Debug,
    /// Something unexpected that the caller chose to continue past.
    Warn,
    /// A failure; the check helpers abort after logging at this level.
    Error,
}

impl Severity {
    /// Every severity in ascending order.
    pub const ALL: [Self; 3] = [Self::Debug, Self::Warn, Self::Error];

    /// Returns the three-letter label without brackets.
    ///
    /// ```
    /// use taglog_sink::Severity;
    ///
    /// assert_eq!(Severity::Debug.label(), "DBG");
    /// assert_eq!(Severity::Warn.label(), "WRN");
    /// assert_eq!(Severity::Error.label(), "ERR");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DBG",
            Self::Warn => "WRN",
            Self::Error => "ERR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.label())
    }
}
