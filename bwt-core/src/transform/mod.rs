//! The Burrows-Wheeler Transform engine.
//!
//! `BurrowsWheeler` owns the sentinel convention and drives both directions:
//!
//!   transform: input + sentinel -> rotations -> sorted rotations -> last column
//!   inverse:   transform string -> reconstructed grid -> sentinel row -> input
//!
//! Both directions are pure functions of their arguments. The value itself is
//! `Copy` and holds no mutable state, so it can be shared freely across threads.

pub mod comparator;
pub mod grid;
pub mod rotation;

pub use comparator::SentinelComparator;
pub use grid::Grid;

use crate::error::{invariant, BwtError};
use crate::log_metric;

/// The BEL control character, which ordinary text does not contain.
pub const DEFAULT_SENTINEL: char = '\u{7}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BurrowsWheeler {
    comparator: SentinelComparator,
}

impl Default for BurrowsWheeler {
    fn default() -> Self {
        Self::new()
    }
}

impl BurrowsWheeler {
    /// A transform using `DEFAULT_SENTINEL`.
    pub fn new() -> Self {
        Self::with_sentinel(DEFAULT_SENTINEL)
    }

    pub fn with_sentinel(sentinel: char) -> Self {
        Self {
            comparator: SentinelComparator::new(sentinel),
        }
    }

    pub fn sentinel(&self) -> char {
        self.comparator.sentinel()
    }

    pub fn comparator(&self) -> &SentinelComparator {
        &self.comparator
    }

    /// Forward transform.
    ///
    /// `input` may be empty, in which case the result is the lone sentinel. An
    /// input that already contains the sentinel is rejected, since its inverse
    /// would not be unique.
    pub fn transform(&self, input: &str) -> Result<String, BwtError> {
        let sentinel = self.sentinel();
        if let Some(position) = input.chars().position(|c| c == sentinel) {
            return Err(BwtError::InvalidArgument(format!(
                "input contains the sentinel character {:?} at position {}",
                sentinel, position
            )));
        }

        let terminated: Vec<char> = input.chars().chain(std::iter::once(sentinel)).collect();

        let mut rotations = rotation::generate_rotations(&terminated);
        rotation::sort_rotations(&mut rotations, &self.comparator);
        let output = rotation::last_column(&rotations);

        log::debug!(
            "bwt transform: {} chars -> {} rotations",
            terminated.len() - 1,
            rotations.len()
        );
        log_metric!("event" = "transform", "rotations" = rotations.len());

        Ok(output)
    }

    /// Inverse transform.
    ///
    /// The encoded string must be non-empty and contain the sentinel exactly once;
    /// anything else cannot have come from `transform` with this sentinel. A
    /// string that passes those checks but is still not a transform output is
    /// reported as `CorruptInput`, never decoded into a wrong answer.
    pub fn inverse(&self, encoded: &str) -> Result<String, BwtError> {
        if encoded.is_empty() {
            return Err(BwtError::InvalidArgument(
                "encoded input must not be empty".to_string(),
            ));
        }

        let sentinel = self.sentinel();
        let encoded_str = encoded;
        let encoded: Vec<char> = encoded.chars().collect();
        let occurrences = encoded.iter().filter(|&&c| c == sentinel).count();
        if occurrences != 1 {
            return Err(BwtError::CorruptInput(format!(
                "expected exactly one sentinel {:?} in the encoded input, found {}",
                sentinel, occurrences
            )));
        }

        let grid = grid::reconstruct(&encoded, &self.comparator)?;
        let rows = grid.rows();
        let original = extract_original(&rows, sentinel)?;

        if self.transform(&original)? != encoded_str {
            return Err(BwtError::CorruptInput(format!(
                "recovered {:?} does not transform back to the encoded input",
                original
            )));
        }

        invariant!(
            original.chars().count() == encoded.len() - 1,
            "recovered {} chars from an encoding of length {}",
            original.chars().count(),
            encoded.len()
        );
        log::debug!("bwt inverse: {} chars -> {} chars", encoded.len(), encoded.len() - 1);
        log_metric!("event" = "inverse", "rows" = rows.len());

        Ok(original)
    }
}

/// Finds the row ending in the sentinel and strips that sentinel.
///
/// The stripped row must be sentinel-free; a second sentinel means the rows are
/// not the rotations of one terminated string.
fn extract_original(rows: &[String], sentinel: char) -> Result<String, BwtError> {
    let target = rows
        .iter()
        .find(|row| row.ends_with(sentinel))
        .ok_or_else(|| {
            BwtError::CorruptInput(
                "the extraction of the original string failed; no row ended with the sentinel character"
                    .to_string(),
            )
        })?;

    let mut original = target.clone();
    original.pop();
    if let Some(position) = original.chars().position(|c| c == sentinel) {
        return Err(BwtError::CorruptInput(format!(
            "recovered row {:?} holds a second sentinel at position {}",
            target, position
        )));
    }
    Ok(original)
}
