//! `impl Stream` blocks grouped by concern.
//!
//! - [`sequencing`] - `limit`, `skip`, `take_while`, `drop_while`, `chunk`
//! - [`distinct`] - `distinct`, `distinct_by`, `distinct_floats`
//! - [`sorting`] - `sorted`, `sorted_by`, `sorted_by_key`, `sorted_floats`
//! - [`flatten`] - `flat_map`, recursive `flatten` over [`Nested`]
//! - [`terminal`] - `reduce`, `count`, `sum`, `min`/`max`, quantifiers, `find_first`
//! - [`try_process`] - fallible helpers built on `anyhow`
//! - [`debug`] - log-based inspection

pub mod debug;
pub mod distinct;
pub mod flatten;
pub mod sequencing;
pub mod sorting;
pub mod terminal;
pub mod try_process;

pub use flatten::Nested;
