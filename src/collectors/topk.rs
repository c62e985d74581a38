//! Bounded top-N selection backed by [`MinHeap`].

use crate::collector::Collector;
use crate::heap::{Comparator, MinHeap, Natural};
use std::cmp::Ordering;

/// Upper bound on the heap slots reserved up front; larger `k` grows on demand.
const PREALLOC_LIMIT: usize = 1024;

/// Accumulation state of [`TopN`].
///
/// The heap holds at most `k` elements; its root is the weakest element still
/// in the running. Once the heap is full, `current_min` caches that root so
/// rejected elements never touch the heap.
#[derive(Clone, Debug)]
pub struct TopNState<T, C> {
    pub is_full: bool,
    pub current_min: Option<T>,
    pub heap: MinHeap<T, C>,
}

/// The `k` greatest elements under a comparator, returned ascending.
///
/// Accumulation happens in two phases. While fewer than `k` elements are held
/// every element is inserted; on reaching `k` the minimum is cached and the
/// state is marked full. From then on an element is only admitted if it ranks
/// strictly above the cached minimum, in which case it replaces the heap root
/// in a single sift-down and the cache is refreshed from the new root.
///
/// - Container: [`TopNState<T, C>`]
/// - Output: `Vec<T>` sorted ascending by the comparator
///
/// Cost is O(n log k). `k == 0` always yields an empty vector; a `k` larger than
/// the input yields every element.
#[derive(Clone, Copy, Debug)]
pub struct TopN<C = Natural> {
    /// Number of elements to keep.
    pub k: usize,
    cmp: C,
}

impl TopN<Natural> {
    /// Top `k` by natural order.
    #[must_use]
    pub const fn new(k: usize) -> Self {
        Self { k, cmp: Natural }
    }
}

impl<C> TopN<C> {
    /// Top `k` by `cmp`.
    #[must_use]
    pub const fn with_comparator(k: usize, cmp: C) -> Self {
        Self { k, cmp }
    }
}

impl<T, C> Collector<T, TopNState<T, C>, Vec<T>> for TopN<C>
where
    T: Clone,
    C: Comparator<T> + Clone,
{
    fn supplier(&self) -> TopNState<T, C> {
        TopNState {
            is_full: false,
            current_min: None,
            heap: MinHeap::with_capacity_and_comparator(self.k.min(PREALLOC_LIMIT), self.cmp.clone()),
        }
    }

    fn accumulator(&self, state: &mut TopNState<T, C>, element: T) {
        if self.k == 0 {
            return;
        }
        if !state.is_full {
            state.heap.insert(element);
            if state.heap.count() == self.k {
                state.is_full = true;
                state.current_min = state.heap.peek_min().cloned();
            }
            return;
        }
        let admit = state
            .current_min
            .as_ref()
            .is_some_and(|min| self.cmp.compare(&element, min) == Ordering::Greater);
        if admit {
            state.heap.replace_min(element);
            state.current_min = state.heap.peek_min().cloned();
        }
    }

    fn finisher(&self, state: TopNState<T, C>) -> Vec<T> {
        log::debug!("top_n: retained {} of k={}", state.heap.count(), self.k);
        state.heap.into_sorted_vec()
    }
}
