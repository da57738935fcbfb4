//! Conversion of native errors into Python exceptions.

// Use `::mything` to refer to the core crate (not the pymodule)
use ::mything::{ThingError, ThingErrorKind};
use pyo3::{
    PyErr,
    exceptions::{PyOverflowError, PyValueError},
};

/// Converts a `ThingError` to the Python exception named by its kind.
pub fn thing_err_to_py(err: &ThingError) -> PyErr {
    match err.kind() {
        ThingErrorKind::Overflow => PyOverflowError::new_err(err.to_string()),
    }
}

/// Converts a postcard failure from `dump()` or `load()` into a `ValueError`.
pub fn postcard_err_to_py(err: &postcard::Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}
