// In: src/bridge/stateless_api.rs

use crate::bridge::format::{count_runs, CompressionStats};
use crate::config::BwtConfig;
use crate::error::BwtError;
use crate::kernels;
use crate::transform::BurrowsWheeler;

/// Forward transform of `input` with an explicit sentinel.
pub fn transform(input: &str, sentinel: char) -> Result<String, BwtError> {
    BurrowsWheeler::with_sentinel(sentinel).transform(input)
}

/// Inverse transform using the default sentinel convention.
pub fn inverse(encoded: &str) -> Result<String, BwtError> {
    BurrowsWheeler::new().inverse(encoded)
}

/// Inverse transform for output produced with a non-default sentinel.
pub fn inverse_with_sentinel(encoded: &str, sentinel: char) -> Result<String, BwtError> {
    BurrowsWheeler::with_sentinel(sentinel).inverse(encoded)
}

/// Runs the transform followed by the configured run-length kernel.
pub fn compress(input: &str, config: &BwtConfig) -> Result<Vec<u8>, BwtError> {
    let bwt = BurrowsWheeler::with_sentinel(config.sentinel);

    // 1. Permute the input so equal characters cluster.
    let transformed = bwt.transform(input)?;

    // 2. Optionally prove the permutation is reversible before committing to it.
    if config.verify_round_trip {
        let restored = bwt.inverse(&transformed)?;
        if restored != input {
            return Err(BwtError::CorruptInput(
                "round-trip verification failed: inverse did not restore the input".to_string(),
            ));
        }
    }

    // 3. Collapse the runs.
    let mut output = Vec::new();
    kernels::dispatch_encode(config.run_length, &transformed, &mut output);

    log::info!(
        "compress: {} chars -> {} bytes ({:?})",
        input.chars().count(),
        output.len(),
        config.run_length
    );
    Ok(output)
}

/// Reverses `compress` with the same configuration.
pub fn decompress(bytes: &[u8], config: &BwtConfig) -> Result<String, BwtError> {
    let transformed = kernels::dispatch_decode(config.run_length, bytes)?;
    let output = BurrowsWheeler::with_sentinel(config.sentinel).inverse(&transformed)?;

    log::info!(
        "decompress: {} bytes -> {} chars ({:?})",
        bytes.len(),
        output.chars().count(),
        config.run_length
    );
    Ok(output)
}

/// Compresses `input` and reports how much the transform helped.
pub fn analyze(input: &str, config: &BwtConfig) -> Result<CompressionStats, BwtError> {
    let transformed = BurrowsWheeler::with_sentinel(config.sentinel).transform(input)?;
    let mut output = Vec::new();
    kernels::dispatch_encode(config.run_length, &transformed, &mut output);

    Ok(CompressionStats {
        original_chars: input.chars().count(),
        original_runs: count_runs(input),
        transform_runs: count_runs(&transformed),
        compressed_size: output.len(),
        run_length: config.run_length,
    })
}
