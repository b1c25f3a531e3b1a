//! This file is the root of the `bwt_core` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`transform`, `kernels`, etc.)
//!     and re-exporting the public API.
//! 2.  Defining the `#[pymodule]` which acts as the main entry point when the
//!     compiled library is imported into Python (only with the `python` feature).
//!
//! # Example
//! ```
//! use bwt_core::BurrowsWheeler;
//!
//! let bwt = BurrowsWheeler::new();
//! let encoded = bwt.transform("BANANA").unwrap();
//! assert_eq!(encoded, "ANNB\u{7}AA");
//! assert_eq!(bwt.inverse(&encoded).unwrap(), "BANANA");
//! ```

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod error;
pub mod kernels;
pub mod transform;

#[cfg(feature = "python")]
mod ffi;

pub use bridge::{analyze, compress, decompress, inverse, inverse_with_sentinel, CompressionStats};
pub use config::{BwtConfig, RunLengthScheme};
pub use error::BwtError;
pub use observability::enable_verbose_logging;
pub use transform::{BurrowsWheeler, SentinelComparator, DEFAULT_SENTINEL};

/// Forward transform with an explicit sentinel. See `BurrowsWheeler::transform`.
pub fn transform(input: &str, sentinel: char) -> Result<String, BwtError> {
    bridge::transform(input, sentinel)
}

//==================================================================================
// 2. Python Module Definition
//==================================================================================
#[cfg(feature = "python")]
use pyo3::prelude::*;

/// The `bwt_core` Python module, containing all exposed Rust functions.
#[cfg(feature = "python")]
#[pymodule]
fn bwt_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::transform_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::inverse_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::compress_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::decompress_py, m)?)?;

    m.add_class::<ffi::PyCodec>()?;

    m.add("__version__", VERSION)?;

    m.add_function(wrap_pyfunction!(ffi::enable_verbose_logging_py, m)?)?;

    Ok(())
}
