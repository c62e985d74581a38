//! Testing utilities for code built on Ironstream.
//!
//! This module gives downstream users the tools the crate's own tests use:
//!
//! - **Assertions**: compare stream outputs with expected results
//! - **Test data builders**: generate input data fluently
//! - **Probes**: count how many elements a pipeline actually pulled
//!
//! # Quick Start
//!
//! ```
//! use ironstream::Stream;
//! use ironstream::testing::*;
//!
//! let probe = PullCounter::new();
//! let data = TestDataBuilder::<i64>::new().add_range(1..=100).build();
//!
//! let result = Stream::of(data)
//!     .peek(probe.hook())
//!     .filter(|x| x % 7 == 0)
//!     .limit(2)
//!     .to_vec();
//!
//! assert_collections_equal(&result, &[7, 14]);
//! assert_eq!(probe.count(), 14);
//! ```
//!
//! # Assertion Functions
//!
//! - [`assert_collections_equal`]: exact, order-dependent comparison
//! - [`assert_collections_unordered_equal`]: order-independent comparison
//! - [`assert_grouped_equal`]: grouped output, keys in order, values ignoring order
//! - [`assert_all`] / [`assert_any`] / [`assert_none`]: predicate checks
//! - [`assert_close`]: floating-point comparison with a tolerance

pub mod assertions;
pub mod builders;
pub mod probes;

pub use assertions::*;
pub use builders::*;
pub use probes::*;
