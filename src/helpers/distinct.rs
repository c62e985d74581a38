//! Distinct helpers: exact de-duplication over the whole stream.
//!
//! # Overview
//! - [`Stream::distinct`] - the element is its own key (scalars, strings, tuples)
//! - [`Stream::distinct_by`] - explicit key projection for records
//! - [`Stream::distinct_floats`] - `f64` de-duplication keyed by [`OrderedFloat`]
//!
//! All three keep a seen-key set for the lifetime of the stream and yield the
//! first occurrence of each key, lazily and in encounter order.

use crate::Stream;
use ordered_float::OrderedFloat;
use std::collections::HashSet;
use std::hash::Hash;

impl<'a, T: 'a + Eq + Hash + Clone> Stream<'a, T> {
    /// Drop repeated elements, keeping first occurrences in order.
    ///
    /// ```
    /// use ironstream::Stream;
    ///
    /// let v = Stream::of([3, 1, 3, 2, 1]).distinct().to_vec();
    /// assert_eq!(v, vec![3, 1, 2]);
    /// ```
    #[must_use]
    pub fn distinct(self) -> Self {
        let mut seen = HashSet::new();
        Self::wrap(self.inner.filter(move |x: &T| {
            if seen.contains(x) {
                false
            } else {
                seen.insert(x.clone());
                true
            }
        }))
    }
}

impl<'a, T: 'a> Stream<'a, T> {
    /// Drop elements whose `key` was already seen.
    ///
    /// ```
    /// use ironstream::Stream;
    ///
    /// let words = Stream::of(["apple", "avocado", "banana", "blueberry", "cherry"]);
    /// let firsts = words.distinct_by(|w| w.chars().next()).to_vec();
    /// assert_eq!(firsts, vec!["apple", "banana", "cherry"]);
    /// ```
    #[must_use]
    pub fn distinct_by<K, F>(self, mut key: F) -> Self
    where
        K: Eq + Hash + 'a,
        F: FnMut(&T) -> K + 'a,
    {
        let mut seen = HashSet::new();
        Self::wrap(self.inner.filter(move |x: &T| seen.insert(key(x))))
    }
}

impl<'a> Stream<'a, f64> {
    /// Drop repeated floats. `0.0` and `-0.0` count as equal; all NaNs share one key.
    #[must_use]
    pub fn distinct_floats(self) -> Self {
        self.distinct_by(|x| OrderedFloat(*x))
    }
}
