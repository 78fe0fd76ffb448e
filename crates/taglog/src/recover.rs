//! crates/taglog/src/recover.rs
//! Abort payloads, recovery scopes, and the panic hook that keeps recovered
//! aborts quiet.

use std::any::Any;
use std::cell::Cell;
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use taglog_sink::Severity;

use crate::facility::{Facility, facility};

/// Boxed error carried by an [`Abort`].
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

thread_local! {
    static RECOVERY_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// The payload a check helper unwinds with.
///
/// An abort wraps the error that triggered it. Recovery scopes hand it back
/// to the caller, who can inspect or downcast the original error.
#[derive(Debug)]
pub struct Abort {
    error: BoxError,
}

impl Abort {
    /// Wraps `error`.
    pub fn new(error: impl Into<BoxError>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Borrows the carried error.
    #[must_use]
    pub fn error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.error.as_ref()
    }

    /// Returns the carried error.
    #[must_use]
    pub fn into_inner(self) -> BoxError {
        self.error
    }

    /// Attempts to view the carried error as `E`.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.error.downcast_ref::<E>()
    }

    /// Reports whether the carried error is an `E`.
    #[must_use]
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.error.is::<E>()
    }
}

impl fmt::Display for Abort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl Error for Abort {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.error.as_ref())
    }
}

/// Unwinds the current call stack with an [`Abort`] carrying `error`.
///
/// The abort propagates until a [`break_on_error`] scope intercepts it. With
/// no scope on the stack the thread terminates. The quiet panic hook is
/// installed first, so a recovered abort never reaches standard error.
#[track_caller]
pub fn raise(error: impl Into<BoxError>) -> ! {
    install_panic_hook();
    panic::panic_any(Abort::new(error))
}

/// Reports whether a [`break_on_error`] scope is active on this thread.
#[must_use]
pub fn in_recovery_scope() -> bool {
    RECOVERY_DEPTH.with(Cell::get) > 0
}

struct RecoveryScope;

impl RecoveryScope {
    fn enter() -> Self {
        RECOVERY_DEPTH.with(|depth| depth.set(depth.get() + 1));
        Self
    }
}

impl Drop for RecoveryScope {
    fn drop(&mut self) {
        RECOVERY_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

impl Facility {
    /// Runs `f` as a recovery scope.
    ///
    /// If `f` returns, its value is passed through and nothing is logged. If
    /// `f` unwinds with an [`Abort`], the abort stops here: it is logged once
    /// as `[ERR] recovered from abort: <error>` (subject only to this
    /// facility's error switch) and returned as `Err`. Code after the
    /// aborting call inside `f` never runs. Panics with any other payload
    /// continue unwinding.
    ///
    /// `f` is treated as unwind safe; state it shares with the caller may be
    /// left part-way through an update when an abort interrupts it.
    pub fn break_on_error<F, R>(&self, f: F) -> Result<R, Abort>
    where
        F: FnOnce() -> R,
    {
        install_panic_hook();
        let outcome = {
            let _scope = RecoveryScope::enter();
            panic::catch_unwind(AssertUnwindSafe(f))
        };

        match outcome {
            Ok(value) => Ok(value),
            Err(payload) => match payload.downcast::<Abort>() {
                Ok(abort) => {
                    self.log_parts(
                        Severity::Error,
                        None,
                        &[&"recovered from abort:"],
                        Some(&abort),
                    );
                    Err(*abort)
                }
                Err(other) => panic::resume_unwind(other),
            },
        }
    }
}

/// Runs `f` as a recovery scope logging through the global facility.
///
/// See [`Facility::break_on_error`].
///
/// ```
/// use std::io;
///
/// fn load() -> u32 {
///     let value: u32 = taglog::check_error(Err(io::Error::other("missing")), &[&"load:"]);
///     value + 1
/// }
///
/// let outcome = taglog::break_on_error(load);
/// let abort = outcome.expect_err("load aborts");
/// assert_eq!(abort.to_string(), "missing");
/// assert!(abort.is::<io::Error>());
/// ```
pub fn break_on_error<F, R>(f: F) -> Result<R, Abort>
where
    F: FnOnce() -> R,
{
    facility().break_on_error(f)
}

/// Installs a panic hook that keeps recovered aborts quiet.
///
/// Aborts raised inside a [`break_on_error`] scope skip the panic banner,
/// since the scope logs them. Aborts with no scope print a one-line report
/// naming the error and location to standard error. Every other panic goes
/// to the previously installed hook. Installing more than once has no
/// further effect.
///
/// [`raise`] and [`break_on_error`] install the hook on first use. Hosts
/// that replace the panic hook themselves call this afterwards, or earlier
/// if their own hook should wrap this one.
pub fn install_panic_hook() {
    static INSTALLED: Once = Once::new();

    INSTALLED.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let Some(abort) = abort_payload(info.payload()) else {
                previous(info);
                return;
            };
            if in_recovery_scope() {
                return;
            }

            let thread = std::thread::current();
            let name = thread.name().unwrap_or("<unnamed>");
            let location = info
                .location()
                .map_or_else(String::new, |location| format!(" at {location}"));
            eprintln!("thread '{name}' aborted{location}: {abort}");
        }));
    });
}

fn abort_payload(payload: &(dyn Any + Send)) -> Option<&Abort> {
    payload.downcast_ref::<Abort>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::Levels;
    use std::io;
    use taglog_sink::MemoryLog;

    fn capture(levels: Levels) -> (Facility, MemoryLog) {
        let log = MemoryLog::new();
        (Facility::with_output(levels, log.clone()), log)
    }

    #[test]
    fn abort_displays_carried_error() {
        let abort = Abort::new(io::Error::other("disk full"));
        assert_eq!(abort.to_string(), "disk full");
        assert!(abort.is::<io::Error>());
        assert_eq!(
            abort.downcast_ref::<io::Error>().map(io::Error::kind),
            Some(io::ErrorKind::Other)
        );
        assert!(abort.source().is_some());
    }

    #[test]
    fn abort_accepts_plain_strings() {
        let abort = Abort::new("plain");
        assert_eq!(abort.to_string(), "plain");
        assert_eq!(abort.into_inner().to_string(), "plain");
    }

    #[test]
    fn normal_return_is_passed_through_silently() {
        let (facility, log) = capture(Levels::ALL);
        let outcome = facility.break_on_error(|| 42);
        assert_eq!(outcome.ok(), Some(42));
        assert!(log.is_empty());
    }

    #[test]
    fn abort_is_recovered_and_logged_once() {
        let (facility, log) = capture(Levels::ALL);
        let outcome: Result<(), Abort> = facility.break_on_error(|| raise("boom"));
        assert_eq!(outcome.expect_err("aborted").to_string(), "boom");
        assert_eq!(
            log.lines(),
            vec!["[ERR] recovered from abort: boom".to_string()]
        );
    }

    #[test]
    fn recovery_log_honours_error_switch() {
        let (facility, log) = capture(Levels::new(true, true, false));
        let outcome: Result<(), Abort> = facility.break_on_error(|| raise("quiet"));
        assert!(outcome.is_err());
        assert!(log.is_empty());
    }

    #[test]
    fn foreign_panics_pass_through() {
        let (facility, log) = capture(Levels::ALL);
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _: Result<(), Abort> = facility.break_on_error(|| panic!("not an abort"));
        }));
        let payload = result.expect_err("panic propagates");
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"not an abort"));
        assert!(log.is_empty());
    }

    #[test]
    fn depth_tracks_active_scopes() {
        let (facility, _log) = capture(Levels::NONE);
        assert!(!in_recovery_scope());
        let inside = facility.break_on_error(in_recovery_scope);
        assert_eq!(inside.ok(), Some(true));
        assert!(!in_recovery_scope());

        let _: Result<(), Abort> = facility.break_on_error(|| raise("unwound"));
        assert!(!in_recovery_scope());
    }
}
