//! This module serves as the public API and dispatcher for the run-length kernels
//! that post-process a transform string.
//!
//! The Burrows-Wheeler Transform itself never calls into this module. The bridge
//! layer runs a kernel on the transform output, selected by the configured
//! `RunLengthScheme`, through the `dispatch_encode` / `dispatch_decode` pair.

use crate::config::RunLengthScheme;
use crate::error::BwtError;

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Fixed-width packets: one digit count, one character.
pub mod single_digit_rle;

/// Binary packets: one count byte, one UTF-16 code unit.
pub mod single_byte_rle;

//==================================================================================
// 2. Public API (Unified Dispatchers)
//==================================================================================

/// Encodes `input` with `scheme`, replacing the contents of `output_buf`.
/// Single-digit packets are stored as UTF-8 text.
pub fn dispatch_encode(scheme: RunLengthScheme, input: &str, output_buf: &mut Vec<u8>) {
    match scheme {
        RunLengthScheme::SingleDigit => {
            output_buf.clear();
            output_buf.extend_from_slice(single_digit_rle::encode(input).as_bytes());
        }
        RunLengthScheme::SingleByte => single_byte_rle::encode(input, output_buf),
    }
}

/// Decodes bytes produced by `dispatch_encode` with the same `scheme`.
pub fn dispatch_decode(scheme: RunLengthScheme, input_bytes: &[u8]) -> Result<String, BwtError> {
    match scheme {
        RunLengthScheme::SingleDigit => {
            let text = std::str::from_utf8(input_bytes).map_err(|e| {
                BwtError::RleDecodeError(format!("single-digit payload is not UTF-8: {}", e))
            })?;
            single_digit_rle::decode(text)
        }
        RunLengthScheme::SingleByte => single_byte_rle::decode(input_bytes),
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
