//! Structured trace events and diagnostics sinks for the duff engine.
//!
//! The redistribution pass emits a [`TraceEvent`] at each observation
//! point (post-aggregate, post-collect, post-distribute, post-return,
//! post-verify, plus family skip) into a [`TraceSink`]. Sinks observe;
//! they never influence the computation, and the pass produces
//! identical results whichever sink is attached.
//!
//! Three sinks are provided: [`NullSink`] discards everything (the
//! default for production and for parallel routing), [`MemorySink`]
//! records events for test assertions, and [`LineSink`] renders the
//! human-readable diagnostic stream.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod event;
mod sink;

pub use event::TraceEvent;
pub use sink::{LineSink, MemorySink, NullSink, TraceSink};
