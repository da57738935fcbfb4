//! Observation hooks for value changes.
//!
//! A [`MyThing`](crate::MyThing) carries its tracer as a type parameter, so with the
//! default [`NoopTracer`] every hook compiles away via monomorphization.
//!
//! | Tracer | Purpose |
//! |--------|---------|
//! | [`NoopTracer`] | Zero-cost no-op (default) |
//! | [`StderrTracer`] | Human-readable change log to stderr |
//! | [`RecordingTracer`] | Collects every event for later inspection |
//!
//! ```
//! use mything::{MyThing, RecordingTracer, TraceEvent};
//!
//! let mut thing = MyThing::with_tracer(5, RecordingTracer::new());
//! thing.increment(3).unwrap();
//! assert_eq!(
//!     thing.tracer().events(),
//!     &[TraceEvent::Increment { old: 5, delta: 3, new: Some(8) }]
//! );
//! ```

/// A single observed change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// `set_value` replaced `old` with `new`.
    Set { old: i64, new: i64 },
    /// `increment` was called; `new` is `None` when the sum overflowed.
    Increment { old: i64, delta: i64, new: Option<i64> },
}

/// Hooks called after each mutation of a [`MyThing`](crate::MyThing).
///
/// All methods default to no-ops, implementations override only what they need.
pub trait ThingTracer: std::fmt::Debug {
    /// Called after `set_value` stored `new` in place of `old`.
    #[inline(always)]
    fn on_set(&mut self, _old: i64, _new: i64) {}

    /// Called after `increment`.
    ///
    /// # Arguments
    /// * `old` - Value before the call
    /// * `delta` - Requested delta
    /// * `new` - Resulting value, or `None` if the increment overflowed and was rejected
    #[inline(always)]
    fn on_increment(&mut self, _old: i64, _delta: i64, _new: Option<i64>) {}
}

/// Tracer that does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopTracer;

impl ThingTracer for NoopTracer {}

/// Tracer that writes one line per change to stderr.
///
/// ```text
/// SET        5 -> -1
/// INCREMENT  -1 + 3 -> 2
/// INCREMENT  9223372036854775807 + 1 -> overflow
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StderrTracer;

impl ThingTracer for StderrTracer {
    fn on_set(&mut self, old: i64, new: i64) {
        eprintln!("SET        {old} -> {new}");
    }

    fn on_increment(&mut self, old: i64, delta: i64, new: Option<i64>) {
        match new {
            Some(new) => eprintln!("INCREMENT  {old} + {delta} -> {new}"),
            None => eprintln!("INCREMENT  {old} + {delta} -> overflow"),
        }
    }
}

/// Tracer that records every event in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingTracer {
    events: Vec<TraceEvent>,
}

impl RecordingTracer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Consumes the tracer, returning the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}

impl ThingTracer for RecordingTracer {
    fn on_set(&mut self, old: i64, new: i64) {
        self.events.push(TraceEvent::Set { old, new });
    }

    fn on_increment(&mut self, old: i64, delta: i64, new: Option<i64>) {
        self.events.push(TraceEvent::Increment { old, delta, new });
    }
}
