use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    error::ThingError,
    tracer::{NoopTracer, ThingTracer},
};

/// Version string reported by [`MyThing::version`].
pub const VERSION: &str = "MyThing/1.0";

/// A value holder wrapping a single signed integer.
///
/// Every operation is a plain read or write of `value`. The tracer is carried as a
/// type parameter so that the default [`NoopTracer`] compiles away entirely; it
/// observes changes but never alters them.
///
/// Only the value is serialized, a loaded instance starts with a fresh tracer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = "Tr: Default"))]
pub struct MyThing<Tr: ThingTracer = NoopTracer> {
    value: i64,
    #[serde(skip)]
    tracer: Tr,
}

impl MyThing {
    /// Creates a holder with the given initial value.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::with_tracer(value, NoopTracer)
    }

    /// Returns the library version, `"MyThing/1.0"`.
    ///
    /// Associated with the type rather than an instance.
    #[must_use]
    pub fn version() -> &'static str {
        VERSION
    }
}

impl Default for MyThing {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<Tr: ThingTracer> MyThing<Tr> {
    /// Creates a holder that reports every change to `tracer`.
    #[must_use]
    pub fn with_tracer(value: i64, tracer: Tr) -> Self {
        Self { value, tracer }
    }

    #[must_use]
    pub fn get_value(&self) -> i64 {
        self.value
    }

    pub fn set_value(&mut self, value: i64) {
        let old = self.value;
        self.value = value;
        self.tracer.on_set(old, value);
    }

    /// Adds `delta` to the held value and returns the new value.
    ///
    /// # Errors
    /// Returns [`ThingError::Overflow`] if the sum does not fit in an `i64`.
    /// The held value is unchanged in that case.
    pub fn increment(&mut self, delta: i64) -> Result<i64, ThingError> {
        let old = self.value;
        let Some(new) = old.checked_add(delta) else {
            self.tracer.on_increment(old, delta, None);
            return Err(ThingError::Overflow { value: old, delta });
        };
        self.value = new;
        self.tracer.on_increment(old, delta, Some(new));
        Ok(new)
    }

    #[must_use]
    pub fn tracer(&self) -> &Tr {
        &self.tracer
    }

    /// Consumes the holder, returning its tracer.
    #[must_use]
    pub fn into_tracer(self) -> Tr {
        self.tracer
    }

    /// Serializes the held value to postcard's binary format.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn dump(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_allocvec(self)
    }
}

impl<Tr: ThingTracer + Default> MyThing<Tr> {
    /// Deserializes a holder from the output of [`dump`](Self::dump).
    ///
    /// # Errors
    /// Returns an error if `bytes` is not a valid dump, including a valid dump
    /// followed by trailing bytes (`DeserializeBadEncoding`).
    pub fn load(bytes: &[u8]) -> Result<Self, postcard::Error> {
        let (thing, rest) = postcard::take_from_bytes(bytes)?;
        if !rest.is_empty() {
            return Err(postcard::Error::DeserializeBadEncoding);
        }
        Ok(thing)
    }
}

impl<Tr: ThingTracer> fmt::Display for MyThing<Tr> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MyThing(value={})", self.value)
    }
}
