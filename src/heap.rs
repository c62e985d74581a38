//! Array-backed binary min-heap with a pluggable ordering.
//!
//! [`MinHeap`] keeps its elements in a flat `Vec` laid out as an implicit
//! binary tree (`parent(i) = (i - 1) / 2`, `left(i) = 2i + 1`,
//! `right(i) = 2i + 2`). The root is always the minimum under the active
//! [`Comparator`]. Wrapping a comparator in [`Reversed`] turns the same
//! structure into a max-heap.
//!
//! Besides the classic `insert` / `extract_min` pair the heap offers
//! [`MinHeap::extract_and_insert`], which swaps the root for a larger
//! element in a single sift-down. Bounded top-K selection
//! ([`TopN`](crate::collectors::TopN)) is built on it.
//!
//! # Example
//! ```
//! use ironstream::heap::MinHeap;
//!
//! let mut heap: MinHeap<i32> = [5, 1, 4, 2].into_iter().collect();
//! assert_eq!(heap.peek_min(), Some(&1));
//! assert_eq!(heap.extract_min(), Some(1));
//! assert_eq!(heap.into_sorted_vec(), vec![2, 4, 5]);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A total ordering strategy over `T`.
///
/// Implemented by [`Natural`] (delegates to `Ord`), by [`Reversed`], and by
/// any closure `Fn(&T, &T) -> Ordering`.
pub trait Comparator<T> {
    /// Compare `a` with `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Natural (`Ord`) ordering.
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T: Ord> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the wrapped comparator. `MinHeap<T, Reversed<Natural>>` is a max-heap.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<C>(pub C);

impl<T, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[inline]
const fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
const fn left(i: usize) -> usize {
    2 * i + 1
}

/// Binary min-heap ordered by `C` (natural order by default).
///
/// Invariant: for every non-root index `i`, `arr[parent(i)] <= arr[i]` under `C`.
#[derive(Clone)]
pub struct MinHeap<T, C = Natural> {
    arr: Vec<T>,
    cmp: C,
}

impl<T: Ord> MinHeap<T, Natural> {
    /// Create an empty heap ordered by `T`'s natural order.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arr: Vec::new(),
            cmp: Natural,
        }
    }
}

impl<T: Ord> Default for MinHeap<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> MinHeap<T, C> {
    /// Create an empty heap ordered by `cmp`.
    #[must_use]
    pub const fn with_comparator(cmp: C) -> Self {
        Self {
            arr: Vec::new(),
            cmp,
        }
    }

    /// Create an empty heap ordered by `cmp` with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            arr: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Number of elements in the heap.
    #[must_use]
    pub fn count(&self) -> usize {
        self.arr.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arr.is_empty()
    }

    /// The minimum element, without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<&T> {
        self.arr.first()
    }

    /// The comparator this heap is ordered by.
    pub const fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Insert `x`, restoring the heap property by sifting it up. O(log n).
    pub fn insert(&mut self, x: T) {
        self.arr.push(x);
        self.sift_up(self.arr.len() - 1);
    }

    /// Remove and return the minimum element, or `None` if the heap is empty. O(log n).
    pub fn extract_min(&mut self) -> Option<T> {
        match self.arr.len() {
            0 => None,
            1 => self.arr.pop(),
            _ => {
                let min = self.arr.swap_remove(0);
                self.sift_down(0);
                Some(min)
            }
        }
    }

    /// Offer `x` in exchange for the current minimum.
    ///
    /// - Empty heap: `x` is inserted and `None` is returned.
    /// - `x` strictly greater than the root: the root is replaced by `x`,
    ///   sifted down, and the old root is returned.
    /// - Otherwise `x` is discarded, the heap is left untouched and a clone of
    ///   the root is returned.
    pub fn extract_and_insert(&mut self, x: T) -> Option<T>
    where
        T: Clone,
    {
        let Some(root) = self.arr.first() else {
            self.insert(x);
            return None;
        };
        if self.cmp.compare(&x, root) == Ordering::Greater {
            self.replace_min(x)
        } else {
            Some(root.clone())
        }
    }

    /// Unconditionally replace the root with `x` and return the old root.
    ///
    /// Costs one sift-down instead of an `extract_min` followed by an `insert`.
    /// On an empty heap this is an `insert` returning `None`.
    pub fn replace_min(&mut self, x: T) -> Option<T> {
        if self.arr.is_empty() {
            self.insert(x);
            return None;
        }
        let old = std::mem::replace(&mut self.arr[0], x);
        self.sift_down(0);
        Some(old)
    }

    /// Drain the heap into a vector sorted ascending by the heap's comparator.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.arr.len());
        while let Some(x) = self.extract_min() {
            out.push(x);
        }
        out
    }

    /// Iterate over the elements in storage order (not sorted).
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.arr.iter()
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.arr.clear();
    }

    fn sift_up(&mut self, mut curr: usize) {
        while curr > 0 {
            let p = parent(curr);
            if self.cmp.compare(&self.arr[p], &self.arr[curr]) != Ordering::Greater {
                break;
            }
            self.arr.swap(p, curr);
            curr = p;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let size = self.arr.len();
        loop {
            let l = left(index);
            let r = l + 1;
            let mut smallest = index;

            if l < size && self.cmp.compare(&self.arr[l], &self.arr[smallest]) == Ordering::Less {
                smallest = l;
            }
            // strict: equal children keep the left one
            if r < size && self.cmp.compare(&self.arr[r], &self.arr[smallest]) == Ordering::Less {
                smallest = r;
            }
            if smallest == index {
                break;
            }
            self.arr.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T, C: Comparator<T>> Extend<T> for MinHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for x in iter {
            self.insert(x);
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T, Natural> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: fmt::Debug, C> fmt::Debug for MinHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap").field("arr", &self.arr).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_heap_property<T, C: Comparator<T>>(h: &MinHeap<T, C>) {
        for i in 1..h.arr.len() {
            assert_ne!(
                h.cmp.compare(&h.arr[parent(i)], &h.arr[i]),
                Ordering::Greater,
                "heap property violated at index {i}"
            );
        }
    }

    #[test]
    fn insert_keeps_minimum_at_root() {
        let mut h = MinHeap::new();
        for x in [9, 3, 7, 1, 8, 2] {
            h.insert(x);
            assert_heap_property(&h);
        }
        assert_eq!(h.peek_min(), Some(&1));
        assert_eq!(h.count(), 6);
    }

    #[test]
    fn extract_min_on_empty_and_single() {
        let mut h: MinHeap<i32> = MinHeap::new();
        assert_eq!(h.extract_min(), None);
        h.insert(4);
        assert_eq!(h.extract_min(), Some(4));
        assert!(h.is_empty());
    }

    #[test]
    fn extract_and_insert_replaces_only_when_greater() {
        let mut h: MinHeap<i32> = [3, 5, 7].into_iter().collect();

        assert_eq!(h.extract_and_insert(1), Some(3));
        assert_eq!(h.count(), 3);
        assert_eq!(h.peek_min(), Some(&3));

        assert_eq!(h.extract_and_insert(3), Some(3));
        assert_eq!(h.clone().into_sorted_vec(), vec![3, 5, 7]);

        assert_eq!(h.extract_and_insert(6), Some(3));
        assert_heap_property(&h);
        assert_eq!(h.into_sorted_vec(), vec![5, 6, 7]);
    }

    #[test]
    fn extract_and_insert_on_empty_inserts() {
        let mut h = MinHeap::new();
        assert_eq!(h.extract_and_insert(10), None);
        assert_eq!(h.peek_min(), Some(&10));
    }

    #[test]
    fn reversed_comparator_builds_max_heap() {
        let mut h = MinHeap::with_comparator(Reversed(Natural));
        h.extend([1, 1, 2, 1, 1, 3, 1, 1, 4, 1]);
        assert_eq!(h.peek_min(), Some(&4));
        assert_eq!(h.into_sorted_vec(), vec![4, 3, 2, 1, 1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn closure_comparator_orders_by_key() {
        let mut h = MinHeap::with_comparator(|a: &(char, u32), b: &(char, u32)| a.1.cmp(&b.1));
        h.extend([('c', 30), ('a', 10), ('b', 20)]);
        assert_eq!(h.extract_min(), Some(('a', 10)));
        assert_eq!(h.extract_min(), Some(('b', 20)));
    }

    #[test]
    fn sift_down_prefers_left_on_equal_children() {
        let mut h = MinHeap::with_comparator(|a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0));
        h.arr = vec![(0, 'r'), (1, 'L'), (1, 'R'), (5, 'x')];
        assert_eq!(h.extract_min(), Some((0, 'r')));
        assert_eq!(h.peek_min(), Some(&(1, 'L')));
    }
}
