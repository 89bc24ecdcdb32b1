use interop_proc_macros::trace_fn;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyByteArray, PyBytes, PyIterator, PyString};
use pyo3_stub_gen::derive::gen_stub_pyfunction;

use crate::error::InteropError;
use crate::{logging, reduce};

pyo3::create_exception!(
    numeric_interop,
    InvalidArgumentError,
    PyValueError,
    "Raised when an argument cannot be converted for the native reduction."
);

impl From<InteropError> for PyErr {
    fn from(err: InteropError) -> Self {
        InvalidArgumentError::new_err(err.to_string())
    }
}

fn type_name(obj: &Bound<'_, PyAny>) -> String {
    obj.get_type()
        .name()
        .map(|name| name.to_string())
        .unwrap_or_else(|_| "<unknown>".to_string())
}

fn float_iter<'py>(values: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyIterator>> {
    if values.is_none() {
        return Err(InteropError::invalid_argument("values must be an iterable of floats, got None").into());
    }
    // str and bytes iterate, but never into floats
    if values.is_instance_of::<PyString>()
        || values.is_instance_of::<PyBytes>()
        || values.is_instance_of::<PyByteArray>()
    {
        return Err(InteropError::invalid_argument(format!(
            "values must be an iterable of floats, got {}",
            type_name(values)
        ))
        .into());
    }
    values.try_iter().map_err(|_| {
        InteropError::invalid_argument(format!("values must be an iterable of floats, got {}", type_name(values)))
            .into()
    })
}

/// Multiply `multiplier` by the sum of `values`.
///
/// The sum is a left-to-right fold from `0.0`; NaN and infinities propagate.
#[gen_stub_pyfunction]
#[pyfunction]
#[trace_fn]
fn scale_sum(multiplier: i64, values: &Bound<'_, PyAny>) -> PyResult<f64> {
    // Items are folded as they are converted, so `len()` is never consulted.
    // The first failure stops the stream; errors raised by the iterable
    // itself propagate unchanged.
    let mut failure = None;
    let converted = float_iter(values)?.enumerate().map_while(|(index, item)| {
        let value = item.and_then(|item| {
            item.extract::<f64>().map_err(|_| {
                InteropError::invalid_argument(format!("values[{index}] is {}, expected float", type_name(&item)))
                    .into()
            })
        });
        value.map_err(|e| failure = Some(e)).ok()
    });
    let result = reduce::scale_fold(multiplier, converted);
    match failure {
        Some(err) => Err(err),
        None => Ok(result),
    }
}

/// Install a stderr log subscriber. Returns `False` if one is already set.
#[gen_stub_pyfunction]
#[pyfunction]
#[pyo3(signature = (directive=None))]
fn init_logging(directive: Option<&str>) -> bool {
    logging::init_logging(directive)
}

#[pymodule]
pub fn numeric_interop(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add("InvalidArgumentError", m.py().get_type::<InvalidArgumentError>())?;
    m.add_function(wrap_pyfunction!(scale_sum, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    Ok(())
}

/// Gather the information `stub_gen` needs to write `numeric_interop.pyi`.
pub fn stub_info() -> pyo3_stub_gen::Result<pyo3_stub_gen::StubInfo> {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()?;
    let manifest_path = std::path::PathBuf::from(std::str::from_utf8(&output.stdout)?.trim());
    let workspace_dir = manifest_path
        .parent()
        .ok_or_else(|| std::io::Error::other(format!("no parent for {}", manifest_path.display())))?;
    pyo3_stub_gen::StubInfo::from_pyproject_toml(workspace_dir.join("pyproject.toml"))
}
