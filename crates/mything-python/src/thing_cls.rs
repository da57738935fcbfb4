// Use `::mything` to refer to the core crate (not the pymodule)
use ::mything::MyThing;
use pyo3::{prelude::*, types::PyBytes};

use crate::exceptions::{postcard_err_to_py, thing_err_to_py};

/// A tiny demo class with one member variable, a member method, and a static method.
#[pyclass(name = "MyThing", module = "mything")]
#[derive(Debug)]
pub struct PyMyThing {
    thing: MyThing,
}

#[pymethods]
impl PyMyThing {
    /// Create with initial value.
    #[new]
    #[pyo3(signature = (value = 0))]
    fn new(value: i64) -> Self {
        Self {
            thing: MyThing::new(value),
        }
    }

    /// The internal integer value.
    #[getter]
    fn get_value(&self) -> i64 {
        self.thing.get_value()
    }

    #[setter]
    fn set_value(&mut self, value: i64) {
        self.thing.set_value(value);
    }

    /// Increase value by delta and return the new value.
    ///
    /// # Raises
    /// `OverflowError` if the result does not fit in a 64-bit signed integer,
    /// the value is left unchanged.
    #[pyo3(signature = (delta))]
    fn increment(&mut self, delta: i64) -> PyResult<i64> {
        self.thing.increment(delta).map_err(|e| thing_err_to_py(&e))
    }

    /// Return library version.
    #[staticmethod]
    fn version() -> &'static str {
        MyThing::version()
    }

    /// Serializes the instance to a binary format.
    ///
    /// # Returns
    /// Bytes that `MyThing.load()` turns back into an equal instance.
    fn dump<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self.thing.dump().map_err(|e| postcard_err_to_py(&e))?;
        Ok(PyBytes::new(py, &bytes))
    }

    /// Deserializes an instance from the output of `dump()`.
    ///
    /// # Raises
    /// `ValueError` if deserialization fails.
    #[staticmethod]
    #[pyo3(signature = (data))]
    fn load(data: &Bound<'_, PyBytes>) -> PyResult<Self> {
        let thing = MyThing::load(data.as_bytes()).map_err(|e| postcard_err_to_py(&e))?;
        Ok(Self { thing })
    }

    fn __repr__(&self) -> String {
        self.thing.to_string()
    }
}
