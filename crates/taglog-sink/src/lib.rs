#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/taglog-sink/src/lib.rs
//!
//! # Overview
//!
//! `taglog-sink` provides the output half of the taglog facility: the
//! [`Severity`] labels that lead every line, the [`Line`] type that collects
//! stringified arguments, and the targets lines are written to. The `taglog`
//! crate decides *whether* a line is emitted; this crate decides *how* it is
//! rendered and where the bytes go.
//!
//! # Design
//!
//! - [`Line`] stores the severity and each argument rendered through its
//!   [`Display`](std::fmt::Display) implementation. Rendering joins the
//!   bracketed label and every segment with single spaces.
//! - [`Line::write_to`] streams a line into any [`std::io::Write`]
//!   implementor without building an intermediate string.
//! - [`Output`] is the shareable target the facility holds: standard output,
//!   one newline-terminated line per emit, or a [`MemoryLog`] that keeps
//!   lines in memory for embedding and tests.
//!
//! # Invariants
//!
//! - The severity label always leads the rendered line.
//! - Segments are separated by exactly one space; no trailing space is
//!   written.
//! - Writing to standard output never surfaces an error to the caller.
//!
//! # Examples
//!
//! ```
//! use taglog_sink::{Line, MemoryLog, Severity};
//!
//! let mut line = Line::new(Severity::Warn);
//! line.push(&"disk almost full:");
//! line.push(&93);
//!
//! let log = MemoryLog::new();
//! log.output().emit(&line);
//! assert_eq!(log.lines(), vec!["[WRN] disk almost full: 93".to_string()]);
//! ```
//!
//! # See also
//!
//! - `taglog` for level gating, tagged loggers, and the check helpers.

mod line;
mod output;
mod severity;

pub use line::Line;
pub use output::{MemoryLog, Output};
pub use severity::Severity;
