//! crates/taglog/src/error.rs
//! Configuration errors.

use thiserror::Error;

/// Errors raised while configuring levels, loggers, or the global facility.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// A level list contained an empty token where one was required.
    #[error("empty level token")]
    EmptyToken,
    /// A token named no known level.
    #[error("unknown level: {0}")]
    UnknownLevel(String),
    /// A token carried a value other than `0` or `1`.
    #[error("invalid level value in token: {0}")]
    InvalidFlagValue(String),
    /// A timestamp format description could not be parsed.
    #[error("invalid time format {format:?}: {reason}")]
    InvalidTimeFormat {
        /// The rejected format description.
        format: String,
        /// Parser diagnostic.
        reason: String,
    },
    /// [`init`](crate::init) was called after the global facility was set.
    #[error("global facility already initialized")]
    AlreadyInitialized,
    /// An environment variable held something other than valid unicode.
    #[error("{var} is not valid unicode")]
    EnvNotUnicode {
        /// Variable name.
        var: String,
    },
    /// An environment variable held an unparsable level list.
    #[error("invalid {var}: {source}")]
    Env {
        /// Variable name.
        var: String,
        /// Underlying parse failure.
        #[source]
        source: Box<ConfigError>,
    },
}
