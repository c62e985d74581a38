//! The fold-based [`Collector`] protocol.
//!
//! A collector describes one aggregation strategy as three steps:
//!
//! 1. [`supplier`](Collector::supplier) creates a fresh, independent container `U`;
//! 2. [`accumulator`](Collector::accumulator) folds each element `T` into it, in
//!    encounter order;
//! 3. [`finisher`](Collector::finisher) turns the container into the result `R`,
//!    exactly once, after the last element.
//!
//! [`Stream::collect`](crate::Stream::collect) drives the protocol. A collector
//! holds no per-run state, so the same value (or a reference to it) can be used
//! for any number of runs.
//!
//! Ready-made strategies live in [`collectors`](crate::collectors); arbitrary
//! ones can be assembled from closures with [`of`].
//!
//! # Example
//! ```
//! use ironstream::{Stream, collector};
//!
//! let longest = collector::of(
//!     || String::new(),
//!     |best: &mut String, s: &str| if s.len() > best.len() { *best = s.to_string() },
//!     |best| best,
//! );
//! let r = Stream::of(["a", "abc", "ab"]).collect(&longest);
//! assert_eq!(r, "abc");
//! ```

use std::marker::PhantomData;

/// A (supplier, accumulator, finisher) aggregation strategy.
///
/// - `T`: element type
/// - `U`: mutable accumulation container
/// - `R`: result type
pub trait Collector<T, U, R> {
    /// Create a new, empty container.
    fn supplier(&self) -> U;

    /// Fold one element into `container`.
    fn accumulator(&self, container: &mut U, element: T);

    /// Turn the accumulated state into the final result.
    fn finisher(&self, container: U) -> R;
}

impl<T, U, R, C> Collector<T, U, R> for &C
where
    C: Collector<T, U, R> + ?Sized,
{
    fn supplier(&self) -> U {
        (**self).supplier()
    }

    fn accumulator(&self, container: &mut U, element: T) {
        (**self).accumulator(container, element);
    }

    fn finisher(&self, container: U) -> R {
        (**self).finisher(container)
    }
}

/// A collector assembled from three closures. Built by [`of`].
#[derive(Clone)]
pub struct FnCollector<T, S, A, F> {
    supplier: S,
    accumulator: A,
    finisher: F,
    _t: PhantomData<fn(T)>,
}

impl<T, U, R, S, A, F> Collector<T, U, R> for FnCollector<T, S, A, F>
where
    S: Fn() -> U,
    A: Fn(&mut U, T),
    F: Fn(U) -> R,
{
    fn supplier(&self) -> U {
        (self.supplier)()
    }

    fn accumulator(&self, container: &mut U, element: T) {
        (self.accumulator)(container, element);
    }

    fn finisher(&self, container: U) -> R {
        (self.finisher)(container)
    }
}

/// Wrap three user functions into a [`Collector`].
///
/// This is the escape hatch for aggregations not covered by
/// [`collectors`](crate::collectors).
pub fn of<T, U, R, S, A, F>(supplier: S, accumulator: A, finisher: F) -> FnCollector<T, S, A, F>
where
    S: Fn() -> U,
    A: Fn(&mut U, T),
    F: Fn(U) -> R,
{
    FnCollector {
        supplier,
        accumulator,
        finisher,
        _t: PhantomData,
    }
}
