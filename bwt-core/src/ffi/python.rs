// In: src/ffi/python.rs

use std::path::Path;

use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::bridge;
use crate::config::{BwtConfig, RunLengthScheme};
use crate::error::BwtError;
use crate::transform::DEFAULT_SENTINEL;

//==================================================================================
// I. Stateful API (a configured codec)
//==================================================================================

/// Parses the user-facing run-length scheme name.
fn parse_scheme(name: &str) -> Result<RunLengthScheme, BwtError> {
    match name {
        "single_byte" => Ok(RunLengthScheme::SingleByte),
        "single_digit" => Ok(RunLengthScheme::SingleDigit),
        other => Err(BwtError::InvalidArgument(format!(
            "unknown run_length scheme '{}'; expected 'single_byte' or 'single_digit'",
            other
        ))),
    }
}

#[pyclass(name = "Codec", module = "bwt_core")]
pub struct PyCodec {
    config: BwtConfig,
}

#[pymethods]
impl PyCodec {
    /// Creates a codec from keyword arguments, or from a JSON config string when
    /// `config_json` is given (the keyword arguments are then ignored).
    #[new]
    #[pyo3(signature = (
        sentinel = DEFAULT_SENTINEL,
        run_length = "single_byte",
        verify_round_trip = false,
        config_json = None
    ))]
    fn new(
        sentinel: char,
        run_length: &str,
        verify_round_trip: bool,
        config_json: Option<&str>,
    ) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => BwtConfig::from_json_str(json)?,
            None => BwtConfig {
                sentinel,
                run_length: parse_scheme(run_length)?,
                verify_round_trip,
            },
        };
        Ok(Self { config })
    }

    fn compress<'py>(&self, py: Python<'py>, text: &str) -> PyResult<Bound<'py, PyBytes>> {
        let config = self.config.clone();
        let bytes = py.allow_threads(move || bridge::compress(text, &config))?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    fn decompress(&self, py: Python<'_>, data: &[u8]) -> PyResult<String> {
        let config = self.config.clone();
        Ok(py.allow_threads(move || bridge::decompress(data, &config))?)
    }

    fn transform(&self, text: &str) -> PyResult<String> {
        Ok(bridge::transform(text, self.config.sentinel)?)
    }

    fn inverse(&self, encoded: &str) -> PyResult<String> {
        Ok(bridge::inverse_with_sentinel(encoded, self.config.sentinel)?)
    }

    /// The active configuration, serialized as JSON.
    fn config_json(&self) -> PyResult<String> {
        Ok(serde_json::to_string(&self.config).map_err(BwtError::from)?)
    }
}

//==================================================================================
// II. Stateless Functions
//==================================================================================

#[pyfunction]
#[pyo3(name = "transform", signature = (text, sentinel = DEFAULT_SENTINEL))]
pub fn transform_py(text: &str, sentinel: char) -> PyResult<String> {
    Ok(bridge::transform(text, sentinel)?)
}

#[pyfunction]
#[pyo3(name = "inverse", signature = (encoded, sentinel = DEFAULT_SENTINEL))]
pub fn inverse_py(encoded: &str, sentinel: char) -> PyResult<String> {
    Ok(bridge::inverse_with_sentinel(encoded, sentinel)?)
}

#[pyfunction]
#[pyo3(name = "compress", signature = (text, run_length = "single_byte"))]
pub fn compress_py<'py>(
    py: Python<'py>,
    text: &str,
    run_length: &str,
) -> PyResult<Bound<'py, PyBytes>> {
    let config = BwtConfig {
        run_length: parse_scheme(run_length)?,
        ..BwtConfig::default()
    };
    let bytes = py.allow_threads(move || bridge::compress(text, &config))?;
    Ok(PyBytes::new_bound(py, &bytes))
}

#[pyfunction]
#[pyo3(name = "decompress", signature = (data, run_length = "single_byte"))]
pub fn decompress_py(py: Python<'_>, data: &[u8], run_length: &str) -> PyResult<String> {
    let config = BwtConfig {
        run_length: parse_scheme(run_length)?,
        ..BwtConfig::default()
    };
    Ok(py.allow_threads(move || bridge::decompress(data, &config))?)
}

//==================================================================================
// III. Logging
//==================================================================================

#[pyfunction]
#[pyo3(name = "enable_verbose_logging", signature = (log_file = None))]
pub fn enable_verbose_logging_py(log_file: Option<String>) -> PyResult<()> {
    crate::observability::enable_verbose_logging(log_file.as_deref().map(Path::new))?;
    Ok(())
}
