//! crates/taglog-sink/src/line.rs
//! A single log line: severity label plus stringified arguments.

use std::fmt::{self, Display};
use std::io::{self, Write};

use crate::severity::Severity;

/// A log line assembled from heterogeneous arguments.
///
/// Arguments are rendered through [`Display`] when they are pushed, so a
/// [`Line`] owns its text and can outlive the values it was built from.
/// Rendering places the bracketed severity label first and separates every
/// segment with a single space.
///
/// # Examples
///
/// ```
/// use taglog_sink::{Line, Severity};
///
/// let line = Line::with_args(Severity::Error, &[&"[db]", &"connect failed:", &"timeout"]);
/// assert_eq!(line.render(), "[ERR] [db] connect failed: timeout");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Line {
    severity: Severity,
    segments: Vec<String>,
}

impl Line {
    /// Creates an empty line at `severity`.
    #[must_use]
    pub const fn new(severity: Severity) -> Self {
        Self {
            severity,
            segments: Vec::new(),
        }
    }

    /// Creates a line at `severity` populated from `args`.
    #[must_use]
    pub fn with_args(severity: Severity, args: &[&dyn Display]) -> Self {
        let mut line = Self::new(severity);
        line.extend(args);
        line
    }

    /// Returns the line's severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the rendered argument segments in insertion order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Appends one argument.
    pub fn push(&mut self, arg: &dyn Display) -> &mut Self {
        self.segments.push(arg.to_string());
        self
    }

    /// Appends every argument in order.
    pub fn extend(&mut self, args: &[&dyn Display]) -> &mut Self {
        self.segments.reserve(args.len());
        for arg in args {
            self.segments.push(arg.to_string());
        }
        self
    }

    /// Renders the line without a trailing newline.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Streams the rendered line into `writer` without a trailing newline.
    pub fn write_to<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: Write + ?Sized,
    {
        write!(writer, "{}", self.severity)?;
        for segment in &self.segments {
            writer.write_all(b" ")?;
            writer.write_all(segment.as_bytes())?;
        }
        Ok(())
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        for segment in &self.segments {
            write!(f, " {segment}")?;
        }
        Ok(())
    }
}
