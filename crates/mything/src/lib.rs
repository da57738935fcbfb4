#![doc = include_str!("../../../README.md")]

mod error;
mod thing;
pub mod tracer;

pub use crate::{
    error::{ThingError, ThingErrorKind},
    thing::{MyThing, VERSION},
    tracer::{NoopTracer, RecordingTracer, StderrTracer, ThingTracer, TraceEvent},
};
