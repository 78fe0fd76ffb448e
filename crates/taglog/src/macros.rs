//! crates/taglog/src/macros.rs
//! Variadic front ends for the global logging functions.
//!
//! Each macro takes a comma-separated list of values of any `Display` type
//! and forwards them, in order, to the matching free function.

/// Builds the `&[&dyn Display]` argument slice the logging functions take.
///
/// # Example
/// ```
/// let facility = taglog::Facility::with_output(taglog::Levels::ALL, taglog::MemoryLog::new());
/// facility.debug(taglog::args!["retry", 3, 'x']);
/// assert_eq!(facility.output().as_memory().map(taglog::MemoryLog::lines),
///     Some(vec!["[DBG] retry 3 x".to_string()]));
/// ```
#[macro_export]
macro_rules! args {
    ($($arg:expr),* $(,)?) => {
        &[$(&$arg as &dyn ::std::fmt::Display),*]
    };
}

/// Logs at debug level through the global facility.
///
/// # Example
/// ```
/// taglog::log_debug!("cache size", 42, "entries");
/// ```
#[macro_export]
macro_rules! log_debug {
    ($($arg:expr),* $(,)?) => {
        $crate::log_debug($crate::args![$($arg),*])
    };
}

/// Logs at warn level through the global facility.
///
/// # Example
/// ```
/// taglog::log_warn!("retrying in", 5, "s");
/// ```
#[macro_export]
macro_rules! log_warn {
    ($($arg:expr),* $(,)?) => {
        $crate::log_warn($crate::args![$($arg),*])
    };
}

/// Logs at error level through the global facility.
///
/// # Example
/// ```
/// taglog::log_error!("giving up after", 3, "attempts");
/// ```
#[macro_export]
macro_rules! log_error {
    ($($arg:expr),* $(,)?) => {
        $crate::log_error($crate::args![$($arg),*])
    };
}
