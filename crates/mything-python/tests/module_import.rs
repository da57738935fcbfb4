//! Tests importing the `mything` extension module by name.
//!
//! The module must be registered before the interpreter starts, so this binary
//! holds a single test.

use mything_python::mything as mything_module;
use pyo3::prelude::*;

#[test]
fn import_module() {
    pyo3::append_to_inittab!(mything_module);
    Python::attach(|py| {
        py.run(
            c"import mything
assert mything.MyThing(5).increment(3) == 8
assert mything.MyThing().value == 0
assert mything.MyThing.version() == 'MyThing/1.0'
assert mything.MyThing.__module__ == 'mything'
assert mything.__version__ == '1.0.0'
assert mything.__doc__.startswith('Minimal example exposing a native class to Python')
",
            None,
            None,
        )
        .unwrap();
    });
}
