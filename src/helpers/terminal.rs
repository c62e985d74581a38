//! Terminal operations that drain a [`Stream`] into a scalar or a side effect.
//!
//! ## Available operations
//! - [`reduce`](Stream::reduce), [`count`](Stream::count), [`for_each`](Stream::for_each)
//! - [`sum`](Stream::sum) (compensated) and [`sum_inaccurate`](Stream::sum_inaccurate) (naive)
//! - [`min`](Stream::min) / [`max`](Stream::max) - `None` on an empty stream
//! - [`any_match`](Stream::any_match), [`all_match`](Stream::all_match),
//!   [`none_match`](Stream::none_match) - short-circuiting quantifiers
//! - [`find_first`](Stream::find_first) - consuming; [`peek_first`](Stream::peek_first)
//!   looks at the head without consuming it
//!
//! Quantifiers follow the usual vacuous-truth rules: on an empty stream
//! `all_match` and `none_match` are `true` and `any_match` is `false`, and the
//! predicate is never called.

use crate::Stream;
use crate::collectors::summing;
use num_traits::AsPrimitive;
use std::iter::Sum;

impl<'a, T: 'a> Stream<'a, T> {
    /// Left fold starting from `identity`.
    ///
    /// ```
    /// use ironstream::Stream;
    ///
    /// let r = Stream::int_range_closed(1, 10)
    ///     .filter(|x| x % 2 == 0)
    ///     .map(|x| x + 1)
    ///     .reduce(0, |acc, y| 2 * acc + y);
    /// assert_eq!(r, 145);
    /// ```
    pub fn reduce<A, F>(self, identity: A, f: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.inner.fold(identity, f)
    }

    /// Number of elements.
    #[must_use]
    pub fn count(self) -> usize {
        self.inner.count()
    }

    /// Compensated sum of the elements as `f64`; `0.0` when empty.
    ///
    /// Shorthand for `collect(summing())`.
    #[must_use]
    pub fn sum(self) -> f64
    where
        T: AsPrimitive<f64>,
    {
        self.collect(summing())
    }

    /// Plain running addition. Faster than [`sum`](Stream::sum) but subject to
    /// ordinary floating-point accumulation error. Empty streams sum to zero.
    #[must_use]
    pub fn sum_inaccurate(self) -> T
    where
        T: Sum<T>,
    {
        self.inner.sum()
    }

    /// Smallest element, first one on ties; `None` when empty.
    ///
    /// Works with `PartialOrd`, so floats are accepted; an incomparable
    /// element (NaN) never replaces the current minimum.
    #[must_use]
    pub fn min(mut self) -> Option<T>
    where
        T: PartialOrd,
    {
        let first = self.inner.next()?;
        Some(self.inner.fold(first, |m, x| if x < m { x } else { m }))
    }

    /// Largest element, first one on ties; `None` when empty.
    #[must_use]
    pub fn max(mut self) -> Option<T>
    where
        T: PartialOrd,
    {
        let first = self.inner.next()?;
        Some(self.inner.fold(first, |m, x| if x > m { x } else { m }))
    }

    /// Whether some element matches `pred`. Stops at the first match.
    pub fn any_match<P>(mut self, pred: P) -> bool
    where
        P: FnMut(T) -> bool,
    {
        self.inner.any(pred)
    }

    /// Whether every element matches `pred`. Stops at the first mismatch.
    pub fn all_match<P>(mut self, pred: P) -> bool
    where
        P: FnMut(T) -> bool,
    {
        self.inner.all(pred)
    }

    /// Whether no element matches `pred`. Stops at the first match.
    pub fn none_match<P>(self, pred: P) -> bool
    where
        P: FnMut(T) -> bool,
    {
        !self.any_match(pred)
    }

    /// Run `action` on every element.
    pub fn for_each<F>(self, action: F)
    where
        F: FnMut(T),
    {
        self.inner.for_each(action);
    }

    /// The first element, or `None` if the stream is empty.
    ///
    /// Only the first element is evaluated; the rest of the pipeline is
    /// dropped unevaluated.
    ///
    /// ```
    /// use ironstream::Stream;
    ///
    /// assert_eq!(Stream::of([10, 20, 30]).skip(1).find_first(), Some(20));
    /// assert_eq!(Stream::of([10, 20, 30]).skip(4).find_first(), None);
    /// ```
    #[must_use]
    pub fn find_first(mut self) -> Option<T> {
        self.inner.next()
    }

    /// Look at the first not-yet-consumed element without consuming it.
    ///
    /// Evaluates the pipeline up to that element and buffers it; the stream
    /// still yields it first afterwards.
    ///
    /// ```
    /// use ironstream::Stream;
    ///
    /// let mut s = Stream::of([10, 20, 30]).skip(1);
    /// assert_eq!(s.peek_first(), Some(&20));
    /// assert_eq!(s.to_vec(), vec![20, 30]);
    /// ```
    pub fn peek_first(&mut self) -> Option<&T> {
        self.inner.peek()
    }
}
