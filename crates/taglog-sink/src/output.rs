//! crates/taglog-sink/src/output.rs
//! Shareable output targets for emitted lines.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::line::Line;

/// Where the logging facility sends emitted lines.
///
/// `Output` is cheap to clone and can be shared across threads. Standard
/// output is the default target. [`Output::Memory`] keeps rendered lines in a
/// [`MemoryLog`] instead, for hosts that want to inspect or forward them and
/// for tests.
#[derive(Clone, Debug, Default)]
pub enum Output {
    /// Write each line, newline-terminated, to the process's standard output.
    #[default]
    Stdout,
    /// Append each rendered line to a shared in-memory log.
    Memory(MemoryLog),
}

impl Output {
    /// Emits `line` to this target.
    ///
    /// Failures writing to standard output are swallowed: a log call has no
    /// failure mode.
    pub fn emit(&self, line: &Line) {
        match self {
            Self::Stdout => {
                let mut lock = io::stdout().lock();
                let _ = write_terminated(&mut lock, line);
            }
            Self::Memory(log) => log.push(line.render()),
        }
    }

    /// Returns the memory log when this output captures lines in memory.
    #[must_use]
    pub const fn as_memory(&self) -> Option<&MemoryLog> {
        match self {
            Self::Memory(log) => Some(log),
            Self::Stdout => None,
        }
    }
}

impl From<MemoryLog> for Output {
    fn from(log: MemoryLog) -> Self {
        Self::Memory(log)
    }
}

/// Writes `line` and its newline, then flushes, all under one borrow of
/// `writer` so concurrent emitters cannot split a line.
fn write_terminated<W>(writer: &mut W, line: &Line) -> io::Result<()>
where
    W: Write + ?Sized,
{
    line.write_to(writer)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Shared, append-only buffer of rendered lines.
///
/// Clones share the same storage. Lines are stored without their trailing
/// newline. A panic while another thread held the lock does not poison the
/// log; the stored lines stay readable.
///
/// # Examples
///
/// ```
/// use taglog_sink::{Line, MemoryLog, Output, Severity};
///
/// let log = MemoryLog::new();
/// let output = Output::from(log.clone());
/// output.emit(&Line::with_args(Severity::Debug, &[&"captured"]));
///
/// assert_eq!(log.drain(), vec!["[DBG] captured".to_string()]);
/// assert!(log.is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an [`Output`] that appends to this log.
    #[must_use]
    pub fn output(&self) -> Output {
        Output::Memory(self.clone())
    }

    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends an already rendered line.
    pub fn push(&self, line: String) {
        self.guard().push(line);
    }

    /// Returns a copy of every stored line in emission order.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    /// Removes and returns every stored line in emission order.
    pub fn drain(&self) -> Vec<String> {
        self.guard().drain(..).collect()
    }

    /// Number of stored lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// Reports whether no lines are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    /// Discards every stored line.
    pub fn clear(&self) {
        self.guard().clear();
    }
}
