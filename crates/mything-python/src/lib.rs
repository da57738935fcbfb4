//! Python bindings for the MyThing value holder.
//!
//! Exposes `MyThing` as a Python class with a `value` property, an `increment`
//! method and a static `version()`, all forwarding to the native type.

mod exceptions;
mod thing_cls;

use std::sync::OnceLock;

use pyo3::prelude::*;
pub use thing_cls::PyMyThing;

/// Returns the package version, converting Cargo's format to Python's PEP 440.
fn get_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();

    VERSION.get_or_init(|| {
        let version = env!("CARGO_PKG_VERSION");
        // cargo uses "1.0-alpha1" etc. while python uses "1.0.0a1", this is not full compatibility,
        // but it's good enough here
        version.replace("-alpha", "a").replace("-beta", "b")
    })
}

/// Minimal example exposing a native class to Python.
#[pymodule]
pub mod mything {
    use pyo3::prelude::*;

    #[pymodule_export]
    use super::PyMyThing as MyThing;
    use super::get_version;

    #[pymodule_init]
    fn init(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add("__version__", get_version())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::get_version;

    #[test]
    fn version_is_pep440() {
        assert_eq!(get_version(), "1.0.0");
    }
}
