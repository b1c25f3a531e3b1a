//! The sentinel-priority total order shared by the forward and inverse transforms.
//!
//! Ordering is ordinary character-code order with one exception: at the first
//! position where exactly one operand holds the sentinel, that operand sorts
//! first regardless of the other character. A string that is a prefix of the
//! other sorts first. Both directions of the transform must agree on this order
//! exactly, so it lives in one place.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A comparator value carrying the sentinel it gives priority to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentinelComparator {
    sentinel: char,
}

impl SentinelComparator {
    pub fn new(sentinel: char) -> Self {
        Self { sentinel }
    }

    pub fn sentinel(&self) -> char {
        self.sentinel
    }

    /// Orders two single characters.
    #[inline]
    pub fn compare_char(&self, x: char, y: char) -> Ordering {
        match (x == self.sentinel, y == self.sentinel) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        }
    }

    /// Orders two character sequences position by position.
    ///
    /// This is the primitive every other comparison is built on; it lets the
    /// grid compare the populated prefix of a row without building a `String`.
    pub fn compare_seq<A, B>(&self, a: A, b: B) -> Ordering
    where
        A: IntoIterator<Item = char>,
        B: IntoIterator<Item = char>,
    {
        let mut a = a.into_iter();
        let mut b = b.into_iter();
        loop {
            match (a.next(), b.next()) {
                (Some(x), Some(y)) => match self.compare_char(x, y) {
                    Ordering::Equal => continue,
                    unequal => return unequal,
                },
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
            }
        }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.compare_seq(a.chars(), b.chars())
    }

    /// Like `compare`, but an absent operand sorts before any present one.
    pub fn compare_opt(&self, a: Option<&str>, b: Option<&str>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.compare(a, b),
        }
    }

    /// Equality under this order. `compare` only returns `Equal` for identical
    /// sequences, so this coincides with plain string equality.
    pub fn equals(&self, a: &str, b: &str) -> bool {
        a == b
    }

    /// Feeds `value` into `state` consistently with `equals`.
    pub fn hash<H: Hasher>(&self, value: &str, state: &mut H) {
        value.hash(state);
    }

    /// Convenience wrapper around `hash` with the standard library hasher.
    pub fn hash_one(&self, value: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(value, &mut hasher);
        hasher.finish()
    }

    /// Sorts `items` in place under this order.
    pub fn sort<S: AsRef<str>>(&self, items: &mut [S]) {
        items.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }

    /// Sorts the characters of `input`, each treated as a length-1 string.
    pub fn sort_chars(&self, input: &[char]) -> Vec<char> {
        let mut sorted = input.to_vec();
        sorted.sort_by(|a, b| self.compare_char(*a, *b));
        sorted
    }
}
