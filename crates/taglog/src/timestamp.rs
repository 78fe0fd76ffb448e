//! crates/taglog/src/timestamp.rs
//! Timestamp formats for logger prefixes.

use std::fmt;

use time::OffsetDateTime;
use time::format_description::{self, OwnedFormatItem};

use crate::error::ConfigError;

/// A parsed timestamp format.
///
/// Formats use the `time` crate's description language, for example
/// `[year]-[month]-[day] [hour]:[minute]:[second]`. The description is
/// validated once, when the format is built, so rendering a prefix never
/// fails on a bad pattern.
///
/// ```
/// use taglog::TimeFormat;
/// use time::macros::datetime;
///
/// let format = TimeFormat::parse("[year]-[month]-[day] [hour]:[minute]:[second]")?;
/// assert_eq!(format.format(datetime!(2024-03-09 07:05:01 UTC)), "2024-03-09 07:05:01");
/// # Ok::<(), taglog::ConfigError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TimeFormat {
    source: String,
    items: OwnedFormatItem,
}

impl TimeFormat {
    /// Parses a format description.
    pub fn parse(format: &str) -> Result<Self, ConfigError> {
        let items = format_description::parse_owned::<1>(format).map_err(|error| {
            ConfigError::InvalidTimeFormat {
                format: format.to_string(),
                reason: error.to_string(),
            }
        })?;
        Ok(Self {
            source: format.to_string(),
            items,
        })
    }

    /// Returns the description this format was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Renders `moment`. Falls back to the raw description if the moment
    /// lacks a component the description asks for.
    #[must_use]
    pub fn format(&self, moment: OffsetDateTime) -> String {
        moment
            .format(&self.items)
            .unwrap_or_else(|_| self.source.clone())
    }

    /// Renders the current time in the local offset, or UTC when the local
    /// offset cannot be determined.
    #[must_use]
    pub fn now(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        self.format(now)
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
