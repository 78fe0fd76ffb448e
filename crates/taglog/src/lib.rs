#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `taglog` is a small leveled logging facility. Lines are gated by two sets
//! of switches: the [`Levels`] of a [`Facility`] (the process-wide default is
//! reached through [`facility()`]) and the per-instance levels of a tagged
//! [`Logger`]. A line is printed only when both agree.
//!
//! On top of plain logging the crate offers fail-fast error checks. The
//! [`check_warn`] family logs an error and reports whether one was present.
//! The [`check_error`] and [`check_multi_error`] families log and then
//! *abort*: they unwind the current call stack with an [`Abort`] payload,
//! whether or not the log line was printed. [`break_on_error`] marks the
//! scope that intercepts an abort, logs it once, and hands it back as an
//! ordinary `Err`.
//!
//! # Design
//!
//! - [`Levels`] holds three independent switches (debug, warn, error).
//! - [`Facility`] pairs levels with an [`Output`]. It is immutable once
//!   built; the global default is set at most once through [`init`].
//! - [`Logger`] adds a tag, its own [`Levels`], and an optional timestamp
//!   format. Its output goes through a facility, so both gates apply.
//! - Aborts are Rust panics whose payload is an [`Abort`]. Recovery uses
//!   [`std::panic::catch_unwind`]; any other panic payload passes through
//!   [`break_on_error`] untouched.
//!
//! # Invariants
//!
//! - The level label always leads a line: `[WRN] [tag] args...`.
//! - Log gating never changes control flow. A disabled error level silences
//!   the line but the abort still fires.
//! - An abort is intercepted by exactly one [`break_on_error`] scope, the
//!   innermost one on the aborting thread.
//! - An abort with no recovery scope unwinds out of its thread.
//!
//! # Examples
//!
//! ```
//! use std::io;
//! use taglog::{Facility, Levels, Logger, MemoryLog};
//!
//! let log = MemoryLog::new();
//! let facility = Facility::with_output(Levels::ALL, log.clone());
//! let db = Logger::builder("db").facility(facility.clone()).build();
//!
//! let outcome = facility.break_on_error(|| {
//!     db.debug(&[&"connecting"]);
//!     let rows: u32 = db.check_error(Err(io::Error::other("refused")), &[&"connect failed:"]);
//!     rows
//! });
//!
//! assert!(outcome.is_err());
//! assert_eq!(
//!     log.lines(),
//!     vec![
//!         "[DBG] [db] connecting".to_string(),
//!         "[ERR] [db] connect failed: refused".to_string(),
//!         "[ERR] recovered from abort: refused".to_string(),
//!     ]
//! );
//! ```
//!
//! # See also
//!
//! - `taglog-sink` for line rendering and the output targets.

mod check;
mod config;
mod error;
mod facility;
mod levels;
mod logger;
mod macros;
mod recover;
mod timestamp;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use check::{check_error, check_multi_error, check_warn};
pub use config::LEVELS_ENV;
pub use error::ConfigError;
pub use facility::{Facility, facility, init, log_debug, log_error, log_warn};
pub use levels::Levels;
pub use logger::{Logger, LoggerBuilder};
pub use recover::{Abort, BoxError, break_on_error, in_recovery_scope, install_panic_hook, raise};
pub use timestamp::TimeFormat;

pub use taglog_sink::{Line, MemoryLog, Output, Severity};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{TagLayer, init_tracing, init_tracing_with_filter};
