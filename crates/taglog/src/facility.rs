//! crates/taglog/src/facility.rs
//! Global level state and the free logging functions.

use std::fmt::Display;
use std::sync::OnceLock;

use taglog_sink::{Line, Output, Severity};

use crate::error::ConfigError;
use crate::levels::Levels;

static GLOBAL: OnceLock<Facility> = OnceLock::new();

/// Global level switches paired with the output lines are written to.
///
/// A facility is immutable once built and cheap to clone. Every print
/// decision reads its [`Levels`]; nothing in this crate mutates them.
/// Most programs use the process-wide default returned by [`facility()`];
/// hosts that want isolated configuration (or tests that capture output)
/// build their own and hand it to their loggers.
///
/// # Examples
///
/// ```
/// use taglog::{Facility, Levels, MemoryLog};
///
/// let log = MemoryLog::new();
/// let facility = Facility::with_output(Levels::new(false, true, true), log.clone());
///
/// facility.debug(&[&"dropped"]);
/// facility.warn(&[&"low disk:", &"93%"]);
///
/// assert_eq!(log.lines(), vec!["[WRN] low disk: 93%".to_string()]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Facility {
    levels: Levels,
    output: Output,
}

impl Facility {
    /// Creates a facility that writes to standard output.
    #[must_use]
    pub fn new(levels: Levels) -> Self {
        Self::with_output(levels, Output::Stdout)
    }

    /// Creates a facility with an explicit output target.
    #[must_use]
    pub fn with_output(levels: Levels, output: impl Into<Output>) -> Self {
        Self {
            levels,
            output: output.into(),
        }
    }

    /// Builds the default facility from [`LEVELS_ENV`](crate::LEVELS_ENV).
    ///
    /// An unparsable value falls back to [`Levels::ALL`] and the problem is
    /// reported once at warn level.
    #[must_use]
    pub fn from_env() -> Self {
        match Levels::from_env() {
            Ok(levels) => Self::new(levels),
            Err(error) => {
                let facility = Self::new(Levels::ALL);
                facility.warn(&[&"ignoring", &error]);
                facility
            }
        }
    }

    /// Returns the level switches.
    #[must_use]
    pub const fn levels(&self) -> Levels {
        self.levels
    }

    /// Returns the output target.
    #[must_use]
    pub const fn output(&self) -> &Output {
        &self.output
    }

    /// Reports whether lines at `severity` are printed.
    #[must_use]
    pub const fn enabled(&self, severity: Severity) -> bool {
        self.levels.enabled(severity)
    }

    /// Logs `args` at `severity` when that level is enabled.
    pub fn log(&self, severity: Severity, args: &[&dyn Display]) {
        self.log_parts(severity, None, args, None);
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

    /// Gated emission shared by every logging path: an optional prefix
    /// segment, the caller's arguments, then an optional trailing value
    /// (the error, for the check helpers).
    pub(crate) fn log_parts(
        &self,
        severity: Severity,
        prefix: Option<&str>,
        args: &[&dyn Display],
        trailing: Option<&dyn Display>,
    ) {
        if !self.enabled(severity) {
            return;
        }

        let mut line = Line::new(severity);
        if let Some(prefix) = prefix {
            line.push(&prefix);
        }
        line.extend(args);
        if let Some(trailing) = trailing {
            line.push(trailing);
        }
        self.output.emit(&line);
    }
}

/// Sets the process-wide facility.
///
/// Succeeds once, before or instead of the lazy default. Later calls, and
/// calls made after [`facility()`] already initialised the default, return
/// [`ConfigError::AlreadyInitialized`].
pub fn init(facility: Facility) -> Result<(), ConfigError> {
    GLOBAL
        .set(facility)
        .map_err(|_| ConfigError::AlreadyInitialized)
}

/// Returns the process-wide facility, initialising it from the environment
/// on first use.
pub fn facility() -> &'static Facility {
    GLOBAL.get_or_init(Facility::from_env)
}

/// Logs `args` at debug level through the global facility.
pub fn log_debug(args: &[&dyn Display]) {
    facility().debug(args);
}

/// Logs `args` at warn level through the global facility.
pub fn log_warn(args: &[&dyn Display]) {
    facility().warn(args);
}

/// Logs `args` at error level through the global facility.
pub fn log_error(args: &[&dyn Display]) {
    facility().error(args);
}

#[cfg(test)]
mod tests {
    use super::*;
    use taglog_sink::MemoryLog;

    fn capture(levels: Levels) -> (Facility, MemoryLog) {
        let log = MemoryLog::new();
        (Facility::with_output(levels, log.clone()), log)
    }

    #[test]
    fn each_level_uses_its_label() {
        let (facility, log) = capture(Levels::ALL);
        facility.debug(&[&"d"]);
        facility.warn(&[&"w"]);
        facility.error(&[&"e"]);
        assert_eq!(
            log.lines(),
            vec!["[DBG] d".to_string(), "[WRN] w".to_string(), "[ERR] e".to_string()]
        );
    }

    #[test]
    fn disabled_levels_print_nothing() {
        let (facility, log) = capture(Levels::NONE);
        facility.debug(&[&"d"]);
        facility.warn(&[&"w"]);
        facility.error(&[&"e"]);
        assert!(log.is_empty());
    }

    #[test]
    fn heterogeneous_arguments_are_space_joined() {
        let (facility, log) = capture(Levels::ALL);
        facility.debug(&[&"count", &3, &2.5, &true]);
        assert_eq!(log.lines(), vec!["[DBG] count 3 2.5 true".to_string()]);
    }

    #[test]
    fn no_arguments_prints_bare_label() {
        let (facility, log) = capture(Levels::ALL);
        facility.warn(&[]);
        assert_eq!(log.lines(), vec!["[WRN]".to_string()]);
    }

    #[test]
    fn log_parts_orders_prefix_args_trailing() {
        let (facility, log) = capture(Levels::ALL);
        facility.log_parts(Severity::Error, Some("[t]"), &[&"a", &"b"], Some(&"tail"));
        assert_eq!(log.lines(), vec!["[ERR] [t] a b tail".to_string()]);
    }

    #[test]
    fn default_facility_is_stdout_with_all_levels() {
        let facility = Facility::default();
        assert_eq!(facility.levels(), Levels::ALL);
        assert!(facility.output().as_memory().is_none());
    }
}
