// In: src/config.rs

//! The single source of truth for bwt configuration.
//!
//! `BwtConfig` is created once at the application boundary (e.g. from a JSON file
//! or a Python dictionary) and then passed by reference to the bridge layer.
//! Every field has a serde default, so an empty JSON object is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::BwtError;
use crate::transform::DEFAULT_SENTINEL;

//==================================================================================
// I. Core Configuration Enums
//==================================================================================

/// Selects the run-length kernel applied to the transform output.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RunLengthScheme {
    /// Text packets `<digit><char>`, runs of at most 9. Human-readable output.
    SingleDigit,

    /// **Default:** 3-byte packets (count byte + UTF-16 code unit), runs of at
    /// most 255. Better suited to the long runs a transform produces.
    #[default]
    SingleByte,
}

//==================================================================================
// II. The Unified BwtConfig
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct BwtConfig {
    /// Marker appended before the transform. Must not occur in the input.
    #[serde(default = "default_sentinel")]
    pub sentinel: char,

    /// The run-length kernel used by `compress` / `decompress`.
    #[serde(default)]
    pub run_length: RunLengthScheme,

    /// If true, `compress` inverts its own transform and fails on mismatch.
    /// Doubles the work; intended for diagnostics.
    #[serde(default)]
    pub verify_round_trip: bool,
}

impl Default for BwtConfig {
    fn default() -> Self {
        Self {
            sentinel: default_sentinel(),
            run_length: RunLengthScheme::default(),
            verify_round_trip: false,
        }
    }
}

impl BwtConfig {
    pub fn from_json_str(json: &str) -> Result<Self, BwtError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, BwtError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}

/// Helper for `serde` to provide the default sentinel.
fn default_sentinel() -> char {
    DEFAULT_SENTINEL
}
