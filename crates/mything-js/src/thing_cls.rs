use mything::{MyThing, ThingErrorKind};
use napi::bindgen_prelude::*;
use napi_derive::napi;

use crate::convert::{is_safe_integer, js_number_to_i64, thing_err_to_js};

/// A tiny demo class with one member variable, a member method, and a static method.
///
/// Values are limited to the JS safe integer range.
#[napi(js_name = "MyThing")]
pub struct JsMyThing {
    thing: MyThing,
}

#[napi]
impl JsMyThing {
    /// Creates a new instance holding `value` (default 0).
    #[napi(constructor)]
    pub fn new(value: Option<f64>) -> Result<Self> {
        let value = value.map_or(Ok(0), |v| js_number_to_i64(v, "value"))?;
        Ok(Self {
            thing: MyThing::new(value),
        })
    }

    /// The internal integer value.
    #[napi(getter, js_name = "value")]
    pub fn get_value(&self) -> i64 {
        self.thing.get_value()
    }

    #[napi(setter, js_name = "value")]
    pub fn set_value(&mut self, value: f64) -> Result<()> {
        self.thing.set_value(js_number_to_i64(value, "value")?);
        Ok(())
    }

    /// Increases the value by `delta` and returns the new value.
    ///
    /// Throws if the result leaves the safe integer range, the value is left unchanged.
    #[napi]
    pub fn increment(&mut self, delta: f64) -> Result<i64> {
        let delta = js_number_to_i64(delta, "delta")?;
        let value = self.thing.get_value();
        // both operands are safe integers, so the sum itself cannot overflow an i64
        if !is_safe_integer(value + delta) {
            return Err(Error::from_reason(format!(
                "{}: incrementing {value} by {delta} leaves the safe integer range",
                ThingErrorKind::Overflow
            )));
        }
        self.thing.increment(delta).map_err(|e| thing_err_to_js(&e))
    }

    /// Returns the library version.
    #[napi]
    pub fn version() -> String {
        MyThing::version().to_owned()
    }

    /// Serializes the instance to a binary format.
    #[napi]
    pub fn dump(&self) -> Result<Buffer> {
        let bytes = self
            .thing
            .dump()
            .map_err(|e| Error::from_reason(format!("Serialization failed: {e}")))?;
        Ok(Buffer::from(bytes))
    }

    /// Restores an instance from the output of `dump()`.
    #[napi(factory)]
    pub fn load(data: Buffer) -> Result<Self> {
        let thing: MyThing =
            MyThing::load(&data).map_err(|e| Error::from_reason(format!("Deserialization failed: {e}")))?;
        if !is_safe_integer(thing.get_value()) {
            return Err(Error::new(
                Status::InvalidArg,
                format!(
                    "Deserialization failed: value {} is outside the safe integer range",
                    thing.get_value()
                ),
            ));
        }
        Ok(Self { thing })
    }

    /// Returns a string representation, e.g. `MyThing(value=5)`.
    #[napi]
    pub fn repr(&self) -> String {
        self.thing.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_construction_is_zero() {
        let thing = JsMyThing::new(None).unwrap();
        assert_eq!(thing.get_value(), 0);
        assert_eq!(thing.repr(), "MyThing(value=0)");
    }

    #[test]
    fn construct_increment_set() {
        let mut thing = JsMyThing::new(Some(5.0)).unwrap();
        assert_eq!(thing.increment(3.0).unwrap(), 8);
        assert_eq!(thing.get_value(), 8);
        thing.set_value(-1.0).unwrap();
        assert_eq!(thing.get_value(), -1);
    }

    #[test]
    fn non_integer_arguments_are_rejected() {
        assert_eq!(JsMyThing::new(Some(1.5)).err().unwrap().status, Status::InvalidArg);
        assert_eq!(JsMyThing::new(Some(f64::NAN)).err().unwrap().status, Status::InvalidArg);
        assert_eq!(JsMyThing::new(Some(f64::INFINITY)).err().unwrap().status, Status::InvalidArg);
        assert_eq!(JsMyThing::new(Some(2f64.powi(63))).err().unwrap().status, Status::InvalidArg);

        let mut thing = JsMyThing::new(Some(5.0)).unwrap();
        assert_eq!(thing.increment(2.9).unwrap_err().status, Status::InvalidArg);
        assert_eq!(thing.set_value(2f64.powi(53) + 1.0).unwrap_err().status, Status::InvalidArg);
        assert_eq!(thing.get_value(), 5);
    }

    #[test]
    fn increment_past_safe_range_keeps_value() {
        let max = 9_007_199_254_740_991.0;
        let mut thing = JsMyThing::new(Some(max)).unwrap();
        let err = thing.increment(1.0).unwrap_err();
        assert_eq!(
            err.reason,
            "OverflowError: incrementing 9007199254740991 by 1 leaves the safe integer range"
        );
        assert_eq!(thing.get_value(), 9_007_199_254_740_991);
    }

    #[test]
    fn version_is_static() {
        assert_eq!(JsMyThing::version(), "MyThing/1.0");
    }

    #[test]
    fn load_restores_dump() {
        let mut thing = JsMyThing::new(Some(5.0)).unwrap();
        thing.increment(37.0).unwrap();
        let bytes = thing.thing.dump().unwrap();
        let loaded = JsMyThing::load(Buffer::from(bytes)).unwrap();
        assert_eq!(loaded.get_value(), 42);
    }

    #[test]
    fn load_rejects_bad_data() {
        let err = JsMyThing::load(Buffer::from(Vec::new())).err().unwrap();
        assert!(err.reason.starts_with("Deserialization failed: "));
    }

    #[test]
    fn load_rejects_unsafe_value() {
        let bytes = MyThing::new(i64::MAX).dump().unwrap();
        let err = JsMyThing::load(Buffer::from(bytes)).err().unwrap();
        assert_eq!(err.status, Status::InvalidArg);
        assert_eq!(
            err.reason,
            "Deserialization failed: value 9223372036854775807 is outside the safe integer range"
        );
    }
}
