//! Ready-made trace sinks.

use super::{TraceEvent, TraceEventKind, TraceSink};
use crate::core::StateId;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Forwards events to the `tracing` ecosystem.
///
/// Updates are emitted at `TRACE`, everything else at `DEBUG`, under the
/// `hsmrt::trace` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl<I: StateId> TraceSink<I> for TracingSink {
    fn record(&mut self, event: &TraceEvent<I>) {
        match event.kind {
            TraceEventKind::Updated => tracing::trace!(
                target: "hsmrt::trace",
                machine = %event.machine,
                tick = event.tick,
                state = event.state.name(),
                depth = event.depth,
                "updated"
            ),
            kind => tracing::debug!(
                target: "hsmrt::trace",
                machine = %event.machine,
                tick = event.tick,
                state = event.state.name(),
                from = ?event.from,
                depth = event.depth,
                "{}",
                kind.as_str()
            ),
        }
    }
}

/// Collects events in memory.
///
/// Clones share the same buffer, so one clone can be handed to a machine
/// while another is kept for inspection.
#[derive(Debug)]
pub struct RecordingSink<I: StateId> {
    events: Arc<Mutex<Vec<TraceEvent<I>>>>,
}

impl<I: StateId> RecordingSink<I> {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of every event recorded so far.
    pub fn events(&self) -> Vec<TraceEvent<I>> {
        self.events.lock().clone()
    }

    /// Recorded `(kind, state)` pairs, in order.
    pub fn summary(&self) -> Vec<(TraceEventKind, I)> {
        self.events
            .lock()
            .iter()
            .map(|event| (event.kind, event.state))
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl<I: StateId> Clone for RecordingSink<I> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl<I: StateId> Default for RecordingSink<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: StateId> TraceSink<I> for RecordingSink<I> {
    fn record(&mut self, event: &TraceEvent<I>) {
        self.events.lock().push(event.clone());
    }
}

/// Writes each event as one JSON object per line.
pub struct JsonLinesSink<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<I: StateId, W: Write + Send> TraceSink<I> for JsonLinesSink<W> {
    fn record(&mut self, event: &TraceEvent<I>) {
        let written = serde_json::to_writer(&mut self.writer, event)
            .map_err(std::io::Error::from)
            .and_then(|()| self.writer.write_all(b"\n"));

        if let Err(error) = written {
            tracing::warn!(
                machine = %event.machine,
                error = %error,
                "Dropping trace event: sink write failed"
            );
        }
    }
}
