// In: src/bridge/format.rs

//! Defines the public-facing report structures of the bridge layer.

use serde::{Deserialize, Serialize};

use crate::config::RunLengthScheme;

/// The public-facing struct for compression analysis results, returned by `analyze`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CompressionStats {
    /// Characters in the original input.
    pub original_chars: usize,
    /// Maximal runs of identical characters in the original input.
    pub original_runs: usize,
    /// Maximal runs of identical characters in the transform output. Fewer runs
    /// than `original_runs` is what makes the transform worth applying.
    pub transform_runs: usize,
    /// Bytes produced by the run-length stage.
    pub compressed_size: usize,
    pub run_length: RunLengthScheme,
}

/// Counts maximal runs of identical characters.
pub(crate) fn count_runs(text: &str) -> usize {
    let mut runs = 0;
    let mut previous = None;
    for c in text.chars() {
        if previous != Some(c) {
            runs += 1;
            previous = Some(c);
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_runs() {
        assert_eq!(count_runs(""), 0);
        assert_eq!(count_runs("a"), 1);
        assert_eq!(count_runs("aabbbccde"), 5);
        assert_eq!(count_runs("abab"), 4);
    }
}
