//! crates/taglog/src/tracing_bridge.rs
//! Routes `tracing` events through a facility's level gates.
//!
//! [`TagLayer`] is a `tracing-subscriber` layer. Each event becomes one
//! line on the facility's output, in the same shape a [`Logger`] produces:
//! the event target plays the role of the tag.
//!
//! | tracing level         | severity |
//! |-----------------------|----------|
//! | `ERROR`               | error    |
//! | `WARN`                | warn     |
//! | `INFO`/`DEBUG`/`TRACE`| debug    |
//!
//! ```
//! use taglog::{Facility, Levels, MemoryLog, TagLayer};
//! use tracing_subscriber::layer::SubscriberExt;
//!
//! let log = MemoryLog::new();
//! let layer = TagLayer::new(Facility::with_output(Levels::ALL, log.clone()));
//! let subscriber = tracing_subscriber::registry().with(layer);
//!
//! tracing::subscriber::with_default(subscriber, || {
//!     tracing::warn!(target: "pool", idle = 0, "exhausted");
//! });
//!
//! assert_eq!(log.lines(), vec!["[WRN] [pool] exhausted idle=0".to_string()]);
//! ```
//!
//! [`Logger`]: crate::Logger

use std::fmt::{self, Display};

use taglog_sink::Severity;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::facility::Facility;

/// A layer that prints `tracing` events through a [`Facility`].
#[derive(Clone, Debug)]
pub struct TagLayer {
    facility: Facility,
}

impl TagLayer {
    /// Creates a layer writing through `facility`.
    #[must_use]
    pub const fn new(facility: Facility) -> Self {
        Self { facility }
    }

    /// Returns the facility events are written through.
    #[must_use]
    pub const fn facility(&self) -> &Facility {
        &self.facility
    }

    const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warn,
            _ => Severity::Debug,
        }
    }
}

impl<S> Layer<S> for TagLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Self::severity_for(metadata.level());
        if !self.facility.enabled(severity) {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let prefix = format!("[{}]", metadata.target());
        let parts = visitor.into_parts();
        let args: Vec<&dyn Display> = parts.iter().map(|part| part as &dyn Display).collect();
        self.facility.log_parts(severity, Some(&prefix), &args, None);
    }
}

/// Collects the message and the remaining fields of an event.
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl FieldVisitor {
    fn into_parts(self) -> Vec<String> {
        self.message.into_iter().chain(self.fields).collect()
    }

    fn record(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = Some(value);
        } else {
            self.fields.push(format!("{}={value}", field.name()));
        }
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record(field, value.to_owned());
    }
}

/// Installs a global `tracing` subscriber that prints through `facility`.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(facility: Facility) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(TagLayer::new(facility))
        .try_init()
}

/// Installs a global `tracing` subscriber that applies `filter` before
/// printing through `facility`.
///
/// ```no_run
/// use taglog::{Facility, Levels};
/// use tracing_subscriber::EnvFilter;
///
/// taglog::init_tracing_with_filter(Facility::new(Levels::ALL), EnvFilter::from_default_env())
///     .expect("no subscriber installed yet");
/// ```
pub fn init_tracing_with_filter<F>(facility: Facility, filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(TagLayer::new(facility))
        .try_init()
}
