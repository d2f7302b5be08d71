//! The [`TraceSink`] trait and its provided implementations.

use crate::TraceEvent;
use std::io::Write;

/// Receives trace events from a redistribution pass.
///
/// # Contract
///
/// Sinks are observers: they must not influence the computation, and
/// the pass must produce identical patch state whichever sink is
/// attached. A sink that performs I/O (like [`LineSink`]) is assumed
/// non-blocking for correctness purposes; write failures are
/// swallowed, never surfaced into the pass.
pub trait TraceSink {
    /// Record one event.
    fn record(&mut self, event: &TraceEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&mut self, _event: &TraceEvent) {}
}

/// Buffers every event in memory, for test assertions.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    events: Vec<TraceEvent>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, in emission order.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Drain and return the recorded events.
    pub fn take(&mut self) -> Vec<TraceEvent> {
        std::mem::take(&mut self.events)
    }
}

impl TraceSink for MemorySink {
    fn record(&mut self, event: &TraceEvent) {
        self.events.push(event.clone());
    }
}

/// Renders each event as one human-readable line to a writer.
///
/// This is the verbose diagnostic stream: attach a
/// `LineSink::new(std::io::stderr())` to watch a pass patch by patch.
/// Write errors are ignored.
#[derive(Debug)]
pub struct LineSink<W: Write> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    /// Create a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for LineSink<W> {
    fn record(&mut self, event: &TraceEvent) {
        let _ = writeln!(self.writer, "{event}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duff_core::FamilyId;

    fn skip_event(family: u64) -> TraceEvent {
        TraceEvent::FamilySkipped {
            family: FamilyId(family),
            patch_count: 1,
        }
    }

    #[test]
    fn memory_sink_records_in_order() {
        let mut sink = MemorySink::new();
        sink.record(&skip_event(1));
        sink.record(&skip_event(2));
        assert_eq!(sink.events().len(), 2);
        assert_eq!(sink.events()[0], skip_event(1));

        let taken = sink.take();
        assert_eq!(taken.len(), 2);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn line_sink_writes_one_line_per_event() {
        let mut sink = LineSink::new(Vec::new());
        sink.record(&skip_event(1));
        sink.record(&skip_event(2));
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out.lines().count(), 2);
        assert!(out.lines().next().unwrap().contains("family 1"));
    }

    #[test]
    fn null_sink_accepts_events() {
        let mut sink = NullSink;
        sink.record(&skip_event(1));
    }
}
