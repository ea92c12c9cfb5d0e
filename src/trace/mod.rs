//! Structured trace events emitted by a state machine.
//!
//! The machine never formats or stores trace output itself. It builds a
//! `TraceEvent` for every enter, exit, transition and (at `Verbose`) update,
//! filters it against the instance's `TraceLevel`, and hands it to a
//! `TraceSink`. What happens next is up to the sink.
//!
//! # Example
//!
//! ```rust
//! use hsmrt::trace::{RecordingSink, TraceEventKind, TraceLevel};
//!
//! let sink: RecordingSink<&'static str> = RecordingSink::new();
//! assert!(TraceLevel::Basic.includes(TraceEventKind::Entered));
//! assert!(!TraceLevel::Basic.includes(TraceEventKind::Updated));
//! assert!(sink.events().is_empty());
//! ```

mod sinks;

pub use sinks::{JsonLinesSink, RecordingSink, TracingSink};

use crate::core::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Verbosity of a machine's trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    /// No events
    #[default]
    Off,

    /// Enter, exit and transition events
    Basic,

    /// Everything in `Basic` plus per-tick update events
    Verbose,
}

impl TraceLevel {
    /// Check whether events of this kind are emitted at this level.
    pub fn includes(self, kind: TraceEventKind) -> bool {
        self != TraceLevel::Off && kind.level() <= self
    }
}

/// What happened to a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceEventKind {
    Entered,
    Exited,
    Sibling,
    InnerEntry,
    Updated,
}

impl TraceEventKind {
    /// Lowest level at which this kind is emitted.
    pub fn level(self) -> TraceLevel {
        match self {
            Self::Updated => TraceLevel::Verbose,
            _ => TraceLevel::Basic,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entered => "entered",
            Self::Exited => "exited",
            Self::Sibling => "sibling",
            Self::InnerEntry => "inner_entry",
            Self::Updated => "updated",
        }
    }
}

/// One structured trace record.
#[derive(Clone, Debug, Serialize)]
pub struct TraceEvent<I: StateId> {
    /// Debug name of the emitting machine
    pub machine: String,
    /// Unique id of the emitting machine
    pub machine_id: Uuid,
    /// Tick index; 0 during initialization
    pub tick: u64,
    pub kind: TraceEventKind,
    /// State entered, exited or updated, or the target of a transition
    pub state: I,
    /// Leaf the transition was taken from
    pub from: Option<I>,
    /// Depth of `state` in the active path, root is 0
    pub depth: usize,
    pub timestamp: DateTime<Utc>,
}

/// Receiver of trace events.
///
/// Sinks are owned by a single machine and called synchronously, in order,
/// while the machine is driving. They must not fail the machine; a sink that
/// cannot deliver an event should drop it.
pub trait TraceSink<I: StateId>: Send {
    fn record(&mut self, event: &TraceEvent<I>);
}
