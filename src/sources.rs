//! Lazy source iterators behind [`Stream`](crate::Stream)'s range and
//! `iterate` constructors.

use std::iter::FusedIterator;

/// Arithmetic progression of `i64` from `from` towards an inclusive `end`.
///
/// - `from == end` yields exactly `from`, whatever the step.
/// - A zero step, or a step pointing away from `end`, yields nothing.
/// - The progression stops early rather than overflow.
#[derive(Clone, Debug)]
pub struct IntRange {
    next: Option<i64>,
    end: i64,
    step: i64,
}

impl IntRange {
    /// Inclusive range `from..=end` by `step`.
    #[must_use]
    pub fn closed(from: i64, end: i64, step: i64) -> Self {
        let progresses = from == end || (from < end && step > 0) || (from > end && step < 0);
        Self {
            next: progresses.then_some(from),
            end,
            step,
        }
    }

    /// Exclusive range `from..end` by `step`.
    ///
    /// Empty when `from == end`; otherwise the inclusive range whose end is
    /// pulled one unit back towards `from`.
    #[must_use]
    pub fn exclusive(from: i64, end: i64, step: i64) -> Self {
        match from.cmp(&end) {
            std::cmp::Ordering::Equal => Self {
                next: None,
                end,
                step,
            },
            std::cmp::Ordering::Less => Self::closed(from, end - 1, step),
            std::cmp::Ordering::Greater => Self::closed(from, end + 1, step),
        }
    }
}

impl Iterator for IntRange {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let cur = self.next?;
        self.next = if cur == self.end {
            None
        } else {
            cur.checked_add(self.step).filter(|n| {
                if self.step > 0 {
                    *n <= self.end
                } else {
                    *n >= self.end
                }
            })
        };
        Some(cur)
    }
}

impl FusedIterator for IntRange {}

/// `seed, f(seed), f(f(seed)), ...`; `f` runs only when the next value is pulled.
pub struct Iterate<T, F> {
    seed: Option<T>,
    last: Option<T>,
    f: F,
}

impl<T, F> Iterate<T, F> {
    pub const fn new(seed: T, f: F) -> Self {
        Self {
            seed: Some(seed),
            last: None,
            f,
        }
    }
}

impl<T, F> Iterator for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = match self.seed.take() {
            Some(seed) => seed,
            None => (self.f)(self.last.as_ref()?),
        };
        self.last = Some(value.clone());
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
