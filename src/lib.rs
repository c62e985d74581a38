//! # Ironstream
//!
//! **Lazy, single-pass sequence pipelines** for Rust: a chain of deferred
//! transformations over an element source, finished by a terminal operation
//! that either produces a scalar/aggregate or drains the sequence into a
//! container.
//!
//! ## Key Features
//!
//! - **Fluent pipeline API** - chain `filter`, `map`, `flat_map`, `distinct`, `limit`, ...
//! - **Lazy, pull-based evaluation** - nothing runs until a terminal operation pulls,
//!   and short-circuiting operators stop pulling as soon as they can
//! - **Fold-based collectors** - the [`Collector`] protocol (supplier / accumulator /
//!   finisher) plus ready-made grouping, set/list, statistics and top-N strategies
//! - **Accurate floating-point aggregation** - two-level compensated summation
//! - **Bounded top-N** - O(n log k) selection over a binary [`MinHeap`]
//! - **Ownership-enforced single pass** - every operation consumes the stream
//!
//! ## Quick Start
//!
//! ```
//! use ironstream::Stream;
//!
//! let total = Stream::of(vec![3, 8, 1, 9, 4])
//!     .filter(|x| x % 2 == 1)
//!     .map(|x| x * 10)
//!     .sum();
//! assert_eq!(total, 130.0);
//! ```
//!
//! ## Core Concepts
//!
//! ### Stream
//!
//! A [`Stream<'a, T>`](Stream) owns exactly one lazy sequence. It is created by a
//! source constructor:
//! - [`Stream::of`] - any `IntoIterator`, finite or infinite
//! - [`Stream::empty`]
//! - [`Stream::int_range`] / [`Stream::int_range_closed`] (and `_step` variants)
//! - [`Stream::concat`] - `a` then `b`
//! - [`Stream::iterate`] - `seed, f(seed), f(f(seed)), ...`
//! - [`Stream::generate`] - repeated calls of a supplier
//!
//! #### Intermediate operations
//! Each one consumes the stream and returns a new, lazily composed one:
//! [`filter`](Stream::filter), [`map`](Stream::map), [`peek`](Stream::peek),
//! [`flat_map`](Stream::flat_map), [`flatten`](Stream::flatten),
//! [`distinct`](Stream::distinct), [`limit`](Stream::limit), [`skip`](Stream::skip),
//! [`take_while`](Stream::take_while), [`drop_while`](Stream::drop_while),
//! [`chunk`](Stream::chunk) and [`sorted`](Stream::sorted) (the one operator that
//! buffers its whole input).
//!
//! #### Terminal operations
//! [`collect`](Stream::collect), [`to_vec`](Stream::to_vec), [`reduce`](Stream::reduce),
//! [`count`](Stream::count), [`sum`](Stream::sum), [`sum_inaccurate`](Stream::sum_inaccurate),
//! [`min`](Stream::min), [`max`](Stream::max), [`any_match`](Stream::any_match),
//! [`all_match`](Stream::all_match), [`none_match`](Stream::none_match),
//! [`for_each`](Stream::for_each) and [`find_first`](Stream::find_first).
//!
//! ### Collectors
//!
//! The [`collectors`] module provides reusable aggregation strategies:
//! - [`to_list`](collectors::to_list) / [`to_set`](collectors::to_set)
//! - [`grouping_by`](collectors::grouping_by)
//! - [`summing`](collectors::summing) / [`averaging`](collectors::averaging) /
//!   [`statistics`](collectors::statistics)
//! - [`top_n`](collectors::top_n)
//!
//! You can also implement [`Collector`] yourself or assemble one from closures
//! with [`collector::of`].
//!
//! ## Infinite sources
//!
//! Infinite sources are fine as long as something short-circuits:
//!
//! ```
//! use ironstream::Stream;
//!
//! let first_squares_over_50: Vec<i64> = Stream::iterate(1i64, |x| x + 1)
//!     .map(|x| x * x)
//!     .drop_while(|x| *x <= 50)
//!     .limit(3)
//!     .to_vec();
//! assert_eq!(first_squares_over_50, vec![64, 81, 100]);
//! ```
//!
//! Draining an infinite source with `count`, `to_vec` or `for_each` never
//! returns; that is the caller's responsibility.
//!
//! ## Feature Flags
//!
//! - `serde` (default) - `Serialize`/`Deserialize` for [`collectors::Stats`] and
//!   [`Nested`], plus [`collectors::Stats::to_json`]
//!
//! ## Module Overview
//!
//! - [`stream`] - the `Stream` type, sources and `collect`
//! - [`helpers`] - the remaining intermediate and terminal operators
//! - [`collector`] - the `Collector` protocol
//! - [`collectors`] - built-in collectors
//! - [`heap`] - the binary min-heap behind top-N
//! - [`sources`] - range and iterate source iterators
//! - [`testing`] - assertions and probes for tests of stream code

pub mod collector;
pub mod collectors;
pub mod heap;
pub mod helpers;
pub mod sources;
pub mod stream;
pub mod testing;

// General re-exports
pub use collector::Collector;
pub use collectors::{CompensatedSum, Stats};
pub use heap::{Comparator, MinHeap, Natural, Reversed};
pub use helpers::Nested;
pub use stream::Stream;
