//! Sorting operators.
//!
//! Sorting is the one intermediate operation that is not lazy: the whole
//! upstream is buffered and sorted when the operator is applied, and the
//! sorted buffer becomes the new source. Never apply it to an unbounded stream.
//!
//! All sorts are stable.

use crate::Stream;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

impl<'a, T: 'a> Stream<'a, T> {
    /// Sort by natural order.
    ///
    /// ```
    /// use ironstream::Stream;
    ///
    /// assert_eq!(Stream::of([4, 3, 2, 1]).sorted().to_vec(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn sorted(self) -> Self
    where
        T: Ord,
    {
        self.sorted_by(Ord::cmp)
    }

    /// Sort by a comparator.
    ///
    /// ```
    /// use ironstream::Stream;
    ///
    /// let v = Stream::of([1, 2, 3, 4]).sorted_by(|a, b| b.cmp(a)).to_vec();
    /// assert_eq!(v, vec![4, 3, 2, 1]);
    /// ```
    #[must_use]
    pub fn sorted_by<F>(self, cmp: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut buf: Vec<T> = self.inner.collect();
        log::debug!("sorted: materialized {} elements", buf.len());
        buf.sort_by(cmp);
        Self::of(buf)
    }

    /// Sort by a key extracted from each element.
    #[must_use]
    pub fn sorted_by_key<K, F>(self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sorted_by(|a, b| key(a).cmp(&key(b)))
    }
}

impl Stream<'_, f64> {
    /// Sort floats ascending by total order; NaN sorts after every number.
    #[must_use]
    pub fn sorted_floats(self) -> Self {
        self.sorted_by_key(|x| OrderedFloat(*x))
    }
}
