// In: src/error.rs

//! This module defines the single, unified error type for the entire bwt library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Only recoverable, caller-facing failures live in `BwtError`. A broken internal
//! invariant of the transform (a bookkeeping bug, never a data problem) is not an
//! error value: it goes through the `invariant!` macro and aborts the call.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BwtError {
    // =========================================================================
    // === Transform Errors (caller-facing)
    // =========================================================================
    /// An argument violated an operation's precondition (e.g. empty encoded input,
    /// or an input that already contains the sentinel character).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The encoded string could not have been produced by a consistent forward
    /// transform with this sentinel.
    #[error("Corrupt input: {0}")]
    CorruptInput(String),

    // =========================================================================
    // === Kernel Errors
    // =========================================================================
    #[error("RLE decoding error: {0}")]
    RleDecodeError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (config files, log files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while loading a `BwtConfig`.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// An error for Python FFI (Foreign Function Interface) operations.
    #[cfg(feature = "python")]
    #[error("FFI operation failed: {0}")]
    FfiError(String), // PyErr doesn't impl Error, so we can't use #[from] here.
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

#[cfg(feature = "python")]
impl From<pyo3::PyErr> for BwtError {
    fn from(err: pyo3::PyErr) -> Self {
        BwtError::FfiError(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<BwtError> for pyo3::PyErr {
    fn from(err: BwtError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

// =============================================================================
// === Internal Invariants ===
// =============================================================================

/// Aborts the current operation when an internal invariant of the transform does
/// not hold. The violation is logged at `error` level before panicking so it is
/// visible even when the panic is caught further up.
macro_rules! invariant {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            let message = format!($($arg)+);
            log::error!("internal invariant violated (this is a bug): {}", message);
            panic!("internal invariant violated: {}", message);
        }
    };
}

pub(crate) use invariant;
