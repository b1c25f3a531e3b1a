//! Forward transform helpers: rotation generation and last-column extraction.
//!
//! Rotations are kept as `Vec<char>` so the right-cyclic shift is a plain
//! `rotate_right` and every character is addressable by index.

use crate::error::invariant;
use crate::transform::comparator::SentinelComparator;

/// A single cyclic rotation of a sentinel-terminated input.
pub type Rotation = Vec<char>;

/// Moves the last element to the front and shifts everything else one position right.
/// An empty row is left untouched.
#[inline]
pub fn shift_right<T>(row: &mut [T]) {
    if !row.is_empty() {
        row.rotate_right(1);
    }
}

/// Produces every rotation of `terminated`, starting with the identity and
/// shifting right once per step.
///
/// `terminated` is the input with the sentinel already appended, so it always
/// has at least one character.
pub fn generate_rotations(terminated: &[char]) -> Vec<Rotation> {
    let mut rotations: Vec<Rotation> = Vec::with_capacity(terminated.len());
    rotations.push(terminated.to_vec());

    for _ in 1..terminated.len() {
        let mut next = rotations[rotations.len() - 1].clone();
        shift_right(&mut next);
        rotations.push(next);
    }

    check_rotation_count(rotations.len(), terminated.len());
    rotations
}

/// Every length-n string has exactly n rotations; anything else is a bookkeeping bug.
pub(crate) fn check_rotation_count(produced: usize, expected: usize) {
    invariant!(
        produced == expected,
        "invalid rotation production: produced {} rotations for a string of length {}",
        produced,
        expected
    );
}

/// Sorts rotations in place under the sentinel order.
pub fn sort_rotations(rotations: &mut [Rotation], comparator: &SentinelComparator) {
    rotations.sort_by(|a, b| comparator.compare_seq(a.iter().copied(), b.iter().copied()));
}

/// Concatenates the final character of each rotation, in order.
pub fn last_column(rotations: &[Rotation]) -> String {
    rotations.iter().filter_map(|rotation| rotation.last()).collect()
}
