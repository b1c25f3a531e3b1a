//! This module serves as the public API for the Foreign Function Interface (FFI) layer.
//!
//! It is only compiled with the `python` feature. The pure engine in `transform`,
//! `kernels` and `bridge` has no knowledge of it.

//==================================================================================
// 1. Module Declarations
//==================================================================================
/// Contains all logic for interfacing with the Python/CPython ecosystem.
pub mod python;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use self::python::{
    compress_py, decompress_py, enable_verbose_logging_py, inverse_py, transform_py, PyCodec,
};
