//! crates/taglog/src/check.rs
//! Error checks that log, and optionally abort, in one call.
//!
//! Every helper comes in three forms: a method on [`Facility`], a method on
//! [`Logger`], and a free function using the global facility. The log line is
//! gated by the usual switches. Whether a raising helper aborts depends on
//! nothing but the presence of an error.

use std::fmt::Display;

use taglog_sink::Severity;

use crate::facility::{Facility, facility};
use crate::logger::Logger;
use crate::recover::{BoxError, raise};

impl Facility {
    /// Logs the error in `result` at warn level and reports whether there
    /// was one.
    ///
    /// The return value is `result.is_err()` whether or not the line was
    /// printed.
    pub fn check_warn<T, E>(&self, result: &Result<T, E>, args: &[&dyn Display]) -> bool
    where
        E: Display,
    {
        warn_on_error(self, None, result, args)
    }

    /// Returns the value in `result`, or logs its error at error level and
    /// aborts with it.
    ///
    /// The abort fires even when the error level is disabled.
    #[track_caller]
    pub fn check_error<T, E>(&self, result: Result<T, E>, args: &[&dyn Display]) -> T
    where
        E: Into<BoxError>,
    {
        match result {
            Ok(value) => value,
            Err(error) => {
                let error = error.into();
                self.log_parts(Severity::Error, None, args, Some(&error));
                raise(error)
            }
        }
    }

    /// Collects the values of `results`, or aborts with the first error.
    ///
    /// When any entry is an error, every error is logged in sequence order,
    /// one line each, and the abort carries the first of them.
    #[track_caller]
    pub fn check_multi_error<I, T, E>(&self, results: I, args: &[&dyn Display]) -> Vec<T>
    where
        I: IntoIterator<Item = Result<T, E>>,
        E: Into<BoxError>,
    {
        let (values, errors) = split_results(results);
        if errors.is_empty() {
            return values;
        }
        log_each(self, None, &errors, args);
        raise_first(errors)
    }
}

impl Logger {
    /// Logs the error in `result` at warn level, prefixed with this logger's
    /// tag, and reports whether there was one.
    ///
    /// When this logger's warn switch is off nothing is attempted; the
    /// return value is still `result.is_err()`.
    pub fn check_warn<T, E>(&self, result: &Result<T, E>, args: &[&dyn Display]) -> bool
    where
        E: Display,
    {
        if !self.levels().warn || result.is_ok() {
            return result.is_err();
        }
        match self.gated_prefix(Severity::Warn) {
            Some(prefix) => warn_on_error(self.facility(), Some(&prefix), result, args),
            None => true,
        }
    }

    /// Returns the value in `result`, or logs its error and aborts with it.
    ///
    /// The line is printed only when both this logger's and the facility's
    /// error switches are on. The abort fires regardless.
    #[track_caller]
    pub fn check_error<T, E>(&self, result: Result<T, E>, args: &[&dyn Display]) -> T
    where
        E: Into<BoxError>,
    {
        match result {
            Ok(value) => value,
            Err(error) => {
                let error = error.into();
                if let Some(prefix) = self.gated_prefix(Severity::Error) {
                    self.facility().log_parts(
                        Severity::Error,
                        Some(&prefix),
                        args,
                        Some(&error),
                    );
                }
                raise(error)
            }
        }
    }

    /// Collects the values of `results`, or aborts with the first error.
    ///
    /// When logging is enabled for this logger and its facility, every error
    /// is logged in sequence order; the abort carries the first of them.
    #[track_caller]
    pub fn check_multi_error<I, T, E>(&self, results: I, args: &[&dyn Display]) -> Vec<T>
    where
        I: IntoIterator<Item = Result<T, E>>,
        E: Into<BoxError>,
    {
        let (values, errors) = split_results(results);
        if errors.is_empty() {
            return values;
        }
        if let Some(prefix) = self.gated_prefix(Severity::Error) {
            log_each(self.facility(), Some(&prefix), &errors, args);
        }
        raise_first(errors)
    }
}

/// Logs the error in `result` through the global facility and reports
/// whether there was one. See [`Facility::check_warn`].
pub fn check_warn<T, E>(result: &Result<T, E>, args: &[&dyn Display]) -> bool
where
    E: Display,
{
    facility().check_warn(result, args)
}

/// Returns the value in `result` or aborts with its error, logging through
/// the global facility. See [`Facility::check_error`].
#[track_caller]
pub fn check_error<T, E>(result: Result<T, E>, args: &[&dyn Display]) -> T
where
    E: Into<BoxError>,
{
    facility().check_error(result, args)
}

/// Collects the values of `results` or aborts with the first error, logging
/// through the global facility. See [`Facility::check_multi_error`].
#[track_caller]
pub fn check_multi_error<I, T, E>(results: I, args: &[&dyn Display]) -> Vec<T>
where
    I: IntoIterator<Item = Result<T, E>>,
    E: Into<BoxError>,
{
    facility().check_multi_error(results, args)
}

fn warn_on_error<T, E>(
    facility: &Facility,
    prefix: Option<&str>,
    result: &Result<T, E>,
    args: &[&dyn Display],
) -> bool
where
    E: Display,
{
    match result {
        Ok(_) => false,
        Err(error) => {
            facility.log_parts(Severity::Warn, prefix, args, Some(error));
            true
        }
    }
}

fn split_results<I, T, E>(results: I) -> (Vec<T>, Vec<BoxError>)
where
    I: IntoIterator<Item = Result<T, E>>,
    E: Into<BoxError>,
{
    let mut values = Vec::new();
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(value) => values.push(value),
            Err(error) => errors.push(error.into()),
        }
    }
    (values, errors)
}

fn log_each(facility: &Facility, prefix: Option<&str>, errors: &[BoxError], args: &[&dyn Display]) {
    for error in errors {
        facility.log_parts(Severity::Error, prefix, args, Some(error));
    }
}

#[track_caller]
fn raise_first(mut errors: Vec<BoxError>) -> ! {
    // Callers only get here with at least one error.
    raise(errors.swap_remove(0))
}
