//! crates/taglog/src/config.rs
//! Parsing level lists from strings and the environment.

use std::env::{self, VarError};
use std::str::FromStr;

use taglog_sink::Severity;

use crate::error::ConfigError;
use crate::levels::Levels;

/// Environment variable consulted when the global facility is first used.
pub const LEVELS_ENV: &str = "TAGLOG_LEVELS";

impl Levels {
    /// Parses a level list such as `"debug,warn0 error"`.
    ///
    /// Tokens are separated by commas or whitespace and applied left to
    /// right, starting from [`Levels::NONE`]. Each token names a level
    /// (`debug`/`dbg`, `warn`/`wrn`/`warning`, `error`/`err`, or `all`) with
    /// an optional `0` or `1` suffix; a bare name enables the level. `none`
    /// disables everything. An empty list yields [`Levels::NONE`].
    ///
    /// ```
    /// use taglog::Levels;
    ///
    /// assert_eq!(Levels::parse("warn,error")?, Levels::new(false, true, true));
    /// assert_eq!(Levels::parse("all debug0")?, Levels::new(false, true, true));
    /// assert!(Levels::parse("verbose").is_err());
    /// # Ok::<(), taglog::ConfigError>(())
    /// ```
    pub fn parse(list: &str) -> Result<Self, ConfigError> {
        let mut levels = Self::NONE;
        for token in list
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
        {
            levels.apply_token(token)?;
        }
        Ok(levels)
    }

    /// Applies a single token (e.g., `"warn"`, `"debug0"`, `"all"`).
    pub fn apply_token(&mut self, token: &str) -> Result<(), ConfigError> {
        let (name, enabled) = parse_flag_token(token)?;

        match name.to_ascii_lowercase().as_str() {
            "debug" | "dbg" => self.set(Severity::Debug, enabled),
            "warn" | "wrn" | "warning" => self.set(Severity::Warn, enabled),
            "error" | "err" => self.set(Severity::Error, enabled),
            "all" => *self = if enabled { Self::ALL } else { Self::NONE },
            "none" if enabled && token.eq_ignore_ascii_case("none") => *self = Self::NONE,
            "none" => return Err(ConfigError::InvalidFlagValue(token.to_string())),
            _ => return Err(ConfigError::UnknownLevel(name.to_string())),
        }
        Ok(())
    }

    /// Reads [`LEVELS_ENV`]. An unset variable yields [`Levels::ALL`].
    pub fn from_env() -> Result<Self, ConfigError> {
        levels_from_var(LEVELS_ENV, env::var(LEVELS_ENV))
    }
}

impl FromStr for Levels {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn levels_from_var(var: &str, value: Result<String, VarError>) -> Result<Levels, ConfigError> {
    match value {
        Ok(value) => Levels::parse(&value).map_err(|source| ConfigError::Env {
            var: var.to_string(),
            source: Box::new(source),
        }),
        Err(VarError::NotPresent) => Ok(Levels::ALL),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::EnvNotUnicode {
            var: var.to_string(),
        }),
    }
}

/// Parse a flag token like "warn0" into ("warn", false) or "debug" into ("debug", true).
fn parse_flag_token(token: &str) -> Result<(&str, bool), ConfigError> {
    if token.is_empty() {
        return Err(ConfigError::EmptyToken);
    }

    match token.find(|c: char| c.is_ascii_digit()) {
        Some(0) => Err(ConfigError::UnknownLevel(token.to_string())),
        Some(pos) => {
            let enabled = match &token[pos..] {
                "0" => false,
                "1" => true,
                _ => return Err(ConfigError::InvalidFlagValue(token.to_string())),
            };
            Ok((&token[..pos], enabled))
        }
        None => Ok((token, true)),
    }
}
