//! Fallible processing with `anyhow`.
//!
//! Plain closures that panic propagate the panic out of whichever terminal
//! operation pulled the failing element. Closures that return
//! [`anyhow::Result`] use these helpers instead: the first `Err` stops the
//! drain and is returned to the caller, and no further element is pulled.

use crate::Stream;
use anyhow::{Context, Result};

impl<'a, T: 'a> Stream<'a, T> {
    /// Map each element through a fallible function, keeping the `Result`s.
    ///
    /// Pair with [`collect_fail_fast`](Stream::collect_fail_fast) to stop at
    /// the first error.
    pub fn try_map<O, F>(self, f: F) -> Stream<'a, Result<O>>
    where
        O: 'a,
        F: FnMut(T) -> Result<O> + 'a,
    {
        self.map(f)
    }

    /// Run a fallible action on every element, stopping at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by `action`.
    pub fn try_for_each<F>(mut self, action: F) -> Result<()>
    where
        F: FnMut(T) -> Result<()>,
    {
        self.inner.try_for_each(action)
    }

    /// Left fold with a fallible step, stopping at the first error.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_reduce<A, F>(mut self, identity: A, f: F) -> Result<A>
    where
        F: FnMut(A, T) -> Result<A>,
    {
        self.inner.try_fold(identity, f)
    }
}

impl<'a, T: 'a> Stream<'a, Result<T>> {
    /// Drain a stream of results into a `Vec`, failing fast.
    ///
    /// ```
    /// use ironstream::Stream;
    ///
    /// let ok = Stream::of(["1", "2", "3"])
    ///     .try_map(|s| Ok(s.parse::<i32>()?))
    ///     .collect_fail_fast();
    /// assert_eq!(ok.unwrap(), vec![1, 2, 3]);
    ///
    /// let err = Stream::of(["1", "x", "3"])
    ///     .try_map(|s| Ok(s.parse::<i32>()?))
    ///     .collect_fail_fast();
    /// assert!(err.unwrap_err().to_string().contains("element 1"));
    /// ```
    ///
    /// # Errors
    /// Returns the first `Err`, with context naming its position.
    pub fn collect_fail_fast(self) -> Result<Vec<T>> {
        self.inner
            .enumerate()
            .map(|(i, r)| r.with_context(|| format!("element {i} failed")))
            .collect()
    }
}
