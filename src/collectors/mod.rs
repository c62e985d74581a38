//! Built-in collectors for [`Stream::collect`](crate::Stream::collect).
//!
//! These are reusable implementations of [`Collector`]:
//!
//! - [`ToList`] -- every element, in encounter order.
//! - [`ToSet`] / [`ToSetBy`] -- distinct elements, first-insertion order.
//! - [`GroupingBy`] -- `(key, elements)` groups in first-seen key order.
//! - [`Summing`] -- compensated sum as `f64`.
//! - [`Averaging`] -- compensated mean as `f64` (0 on empty input).
//! - [`Statistics`] -- sum, count, avg, min and max in one [`Stats`] record.
//! - [`TopN`] -- the `k` greatest elements, ascending.
//!
//! Each collector specifies its container type (`U`) and output type (`R`).
//! The free functions below are the usual way to build them.
//!
//! # Examples
//! ```
//! use ironstream::Stream;
//! use ironstream::collectors::{averaging, grouping_by, statistics, summing, to_set, top_n};
//!
//! let groups = Stream::int_range_closed(1, 10).collect(grouping_by(|x: &i64| x % 2));
//! assert_eq!(groups, vec![(1, vec![1, 3, 5, 7, 9]), (0, vec![2, 4, 6, 8, 10])]);
//!
//! assert_eq!(Stream::of([1.0, 1e100, 1.0, -1e100]).collect(summing()), 2.0);
//! assert_eq!(Stream::of([1, 2, 3, 4]).collect(averaging()), 2.5);
//! assert_eq!(Stream::of([1, 1, 2, 1, 3]).collect(to_set()), vec![1, 2, 3]);
//! assert_eq!(Stream::of([5, 1, 9, 3, 7]).collect(top_n(3)), vec![5, 7, 9]);
//!
//! let s = Stream::of([2, 4, 9]).collect(statistics());
//! assert_eq!((s.count, s.min, s.max), (3, Some(2.0), Some(9.0)));
//! ```

mod basic;
mod compensated;
mod statistical;
mod topk;

pub use basic::{Groups, GroupingBy, ToList, ToSet, ToSetBy};
pub use compensated::CompensatedSum;
pub use statistical::{Averaging, Identity, Statistics, Stats, StatsState, Summing, ValueMapper};
pub use topk::{TopN, TopNState};

pub use crate::collector::{Collector, FnCollector, of};

use crate::heap::Comparator;
use std::cmp::Ordering;

/// Collect into a `Vec<T>` in encounter order.
#[must_use]
pub const fn to_list() -> ToList {
    ToList
}

/// Collect distinct elements, first-insertion order.
#[must_use]
pub const fn to_set() -> ToSet {
    ToSet
}

/// Collect elements with distinct `key(element)`, first occurrence wins.
pub fn to_set_by<T, K, F: Fn(&T) -> K>(key: F) -> ToSetBy<F> {
    ToSetBy::new(key)
}

/// Group elements by `classify(element)`.
pub fn grouping_by<T, K, F: Fn(&T) -> K>(classify: F) -> GroupingBy<F> {
    GroupingBy::new(classify)
}

/// Compensated sum of numeric elements.
#[must_use]
pub const fn summing() -> Summing {
    Summing::new(Identity)
}

/// Compensated sum of `mapper(element)`.
pub fn summing_by<T, F: Fn(&T) -> f64>(mapper: F) -> Summing<F> {
    Summing::new(mapper)
}

/// Mean of numeric elements; 0 when empty.
#[must_use]
pub const fn averaging() -> Averaging {
    Averaging::new(Identity)
}

/// Mean of `mapper(element)`; 0 when empty.
pub fn averaging_by<T, F: Fn(&T) -> f64>(mapper: F) -> Averaging<F> {
    Averaging::new(mapper)
}

/// Sum/count/avg/min/max of numeric elements.
#[must_use]
pub const fn statistics() -> Statistics {
    Statistics::new(Identity)
}

/// Sum/count/avg/min/max of `mapper(element)`.
pub fn statistics_by<T, F: Fn(&T) -> f64>(mapper: F) -> Statistics<F> {
    Statistics::new(mapper)
}

/// The `k` largest elements by natural order, ascending.
#[must_use]
pub const fn top_n(k: usize) -> TopN {
    TopN::new(k)
}

/// The `k` highest-ranking elements under `cmp`, ascending under `cmp`.
pub fn top_n_by<T, C>(k: usize, cmp: C) -> TopN<C>
where
    C: Fn(&T, &T) -> Ordering + Clone,
{
    TopN::with_comparator(k, cmp)
}

/// Like [`top_n_by`] but for an arbitrary [`Comparator`] value.
pub fn top_n_with<T, C: Comparator<T> + Clone>(k: usize, cmp: C) -> TopN<C> {
    TopN::with_comparator(k, cmp)
}
