//! The lazy, single-pass [`Stream`] type: sources, element-wise transforms and
//! the generic `collect` terminal.
//!
//! Further operations are added by `impl` blocks in [`helpers`](crate::helpers).

use crate::collector::Collector;
use crate::sources::{IntRange, Iterate};
use std::fmt;
use std::iter::Peekable;

type Inner<'a, T> = Peekable<Box<dyn Iterator<Item = T> + 'a>>;

/// A lazy sequence of `T` with chained, deferred transformations.
///
/// Every intermediate operation consumes the stream and returns a new one
/// wrapping a composed iterator; nothing is evaluated until a terminal
/// operation pulls elements. Terminal operations consume the stream too, so a
/// drained stream cannot be reused:
///
/// ```compile_fail
/// use ironstream::Stream;
///
/// let s = Stream::of(vec![1, 2, 3]);
/// let a = s.to_vec();
/// let b = s.to_vec(); // use of moved value
/// ```
///
/// The lifetime `'a` bounds the source and every closure in the chain, so
/// pipelines may borrow local data.
pub struct Stream<'a, T> {
    pub(crate) inner: Inner<'a, T>,
}

impl<'a, T: 'a> Stream<'a, T> {
    pub(crate) fn wrap<I>(iter: I) -> Self
    where
        I: Iterator<Item = T> + 'a,
    {
        let boxed: Box<dyn Iterator<Item = T> + 'a> = Box::new(iter);
        Self {
            inner: boxed.peekable(),
        }
    }

    /* ---------- sources ---------- */

    /// A stream with no elements.
    #[must_use]
    pub fn empty() -> Self {
        Self::wrap(std::iter::empty())
    }

    /// Wrap any finite or infinite producer of `T`.
    ///
    /// ```
    /// use ironstream::Stream;
    ///
    /// assert_eq!(Stream::of(vec![1, 1, 2, 3]).to_vec(), vec![1, 1, 2, 3]);
    /// assert_eq!(Stream::of((1..).map(|x| x * x)).limit(3).to_vec(), vec![1, 4, 9]);
    /// ```
    pub fn of<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self::wrap(source.into_iter())
    }

    /// All elements of `a`, then all elements of `b`.
    #[must_use]
    pub fn concat(a: Self, b: Self) -> Self {
        Self::wrap(a.inner.chain(b.inner))
    }

    /// The infinite stream `seed, f(seed), f(f(seed)), ...`.
    ///
    /// `f` runs only when the next element is pulled.
    ///
    /// ```
    /// use ironstream::Stream;
    ///
    /// let v = Stream::iterate(1, |x: &i32| 2 * x + 1).limit(5).to_vec();
    /// assert_eq!(v, vec![1, 3, 7, 15, 31]);
    /// ```
    pub fn iterate<F>(seed: T, f: F) -> Self
    where
        T: Clone,
        F: FnMut(&T) -> T + 'a,
    {
        Self::wrap(Iterate::new(seed, f))
    }

    /// The infinite stream of successive `supplier()` results.
    pub fn generate<F>(supplier: F) -> Self
    where
        F: FnMut() -> T + 'a,
    {
        Self::wrap(std::iter::repeat_with(supplier))
    }

    /* ---------- element-wise transforms ---------- */

    /// Keep elements matching `pred`.
    #[must_use]
    pub fn filter<P>(self, pred: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        Self::wrap(self.inner.filter(pred))
    }

    /// Transform each element.
    pub fn map<O, F>(self, f: F) -> Stream<'a, O>
    where
        O: 'a,
        F: FnMut(T) -> O + 'a,
    {
        Stream::wrap(self.inner.map(f))
    }

    /// Run `action` on each element as it is pulled, passing it through unchanged.
    #[must_use]
    pub fn peek<F>(self, action: F) -> Self
    where
        F: FnMut(&T) + 'a,
    {
        Self::wrap(self.inner.inspect(action))
    }

    /* ---------- generic terminals ---------- */

    /// Fold every element into `collector`'s container and return its finished result.
    ///
    /// ```
    /// use ironstream::Stream;
    /// use ironstream::collectors::to_list;
    ///
    /// let v = Stream::of([3, 1, 2]).collect(to_list());
    /// assert_eq!(v, vec![3, 1, 2]);
    /// ```
    pub fn collect<U, R, C>(self, collector: C) -> R
    where
        C: Collector<T, U, R>,
    {
        let mut container = collector.supplier();
        for element in self.inner {
            collector.accumulator(&mut container, element);
        }
        collector.finisher(container)
    }

    /// Drain into a `Vec`, preserving yield order.
    #[must_use]
    pub fn to_vec(self) -> Vec<T> {
        self.inner.collect()
    }
}

impl<'a> Stream<'a, i64> {
    /// `from..to` stepping by 1.
    ///
    /// The step does not follow the direction: a descending range needs an
    /// explicit negative step, so `int_range(5, 0)` is empty.
    ///
    /// ```
    /// use ironstream::Stream;
    ///
    /// assert_eq!(Stream::int_range(0, 3).to_vec(), vec![0, 1, 2]);
    /// assert_eq!(Stream::int_range(5, 0).count(), 0);
    /// assert_eq!(Stream::int_range_step(5, 0, -2).to_vec(), vec![5, 3, 1]);
    /// ```
    #[must_use]
    pub fn int_range(from: i64, to: i64) -> Self {
        Self::int_range_step(from, to, 1)
    }

    /// `from..to` by `step`. A zero or wrong-signed step yields an empty stream.
    #[must_use]
    pub fn int_range_step(from: i64, to: i64, step: i64) -> Self {
        Self::wrap(IntRange::exclusive(from, to, step))
    }

    /// `from..=to` stepping by 1; empty when `from > to`.
    #[must_use]
    pub fn int_range_closed(from: i64, to: i64) -> Self {
        Self::int_range_closed_step(from, to, 1)
    }

    /// `from..=to` by `step`. `from == to` yields `from` whatever the step;
    /// otherwise a zero or wrong-signed step yields an empty stream.
    #[must_use]
    pub fn int_range_closed_step(from: i64, to: i64, step: i64) -> Self {
        Self::wrap(IntRange::closed(from, to, step))
    }
}

impl<'a, T: 'a> IntoIterator for Stream<'a, T> {
    type Item = T;
    type IntoIter = Inner<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner
    }
}

impl<'a, T: 'a> From<Vec<T>> for Stream<'a, T> {
    fn from(v: Vec<T>) -> Self {
        Self::of(v)
    }
}

impl<'a, T: 'a> FromIterator<T> for Stream<'a, T> {
    /// Buffers the items; use [`Stream::of`] to stay lazy.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T: 'a> Default for Stream<'a, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for Stream<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream").finish_non_exhaustive()
    }
}
