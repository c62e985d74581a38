//! Probes for checking how much of a pipeline actually ran.

use std::cell::Cell;
use std::rc::Rc;

/// Counts how many times a hook was called.
///
/// Clones share the same counter, so one clone can be moved into a closure
/// while another is kept for the assertion.
///
/// # Example
///
/// ```
/// use ironstream::Stream;
/// use ironstream::testing::PullCounter;
///
/// let pulls = PullCounter::new();
/// let v = Stream::generate(pulls.supplier(|| 7)).limit(3).to_vec();
///
/// assert_eq!(v, vec![7, 7, 7]);
/// assert_eq!(pulls.count(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PullCounter {
    hits: Rc<Cell<usize>>,
}

impl PullCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded calls so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.hits.get()
    }

    /// Record one call.
    pub fn hit(&self) {
        self.hits.set(self.hits.get() + 1);
    }

    /// A `peek`-style hook that records every element it sees.
    pub fn hook<T>(&self) -> impl FnMut(&T) + use<T> {
        let probe = self.clone();
        move |_: &T| probe.hit()
    }

    /// Wrap a supplier so each call is recorded.
    pub fn supplier<T, F>(&self, mut f: F) -> impl FnMut() -> T + use<T, F>
    where
        F: FnMut() -> T,
    {
        let probe = self.clone();
        move || {
            probe.hit();
            f()
        }
    }

    /// Wrap a single-argument function so each call is recorded.
    pub fn func<A, R, F>(&self, mut f: F) -> impl FnMut(A) -> R + use<A, R, F>
    where
        F: FnMut(A) -> R,
    {
        let probe = self.clone();
        move |a: A| {
            probe.hit();
            f(a)
        }
    }
}
