//! Positional and prefix operators: `limit`, `skip`, `take_while`,
//! `drop_while`, `chunk`.
//!
//! All of them stay lazy. `limit` and `take_while` are short-circuiting: once
//! they stop, nothing more is pulled from upstream, which makes them the way to
//! bound an infinite source.
//!
//! ```
//! use ironstream::Stream;
//!
//! let v = Stream::iterate(1, |x: &i64| x + 1)
//!     .drop_while(|x| *x < 5)
//!     .take_while(|x| *x < 9)
//!     .to_vec();
//! assert_eq!(v, vec![5, 6, 7, 8]);
//! ```

use crate::Stream;
use std::iter::FusedIterator;

impl<'a, T: 'a> Stream<'a, T> {
    /// At most the first `n` elements. Element `n + 1` is never pulled.
    #[must_use]
    pub fn limit(self, n: usize) -> Self {
        Self::wrap(self.inner.take(n))
    }

    /// Everything after the first `n` elements.
    #[must_use]
    pub fn skip(self, n: usize) -> Self {
        Self::wrap(self.inner.skip(n))
    }

    /// The longest prefix whose elements satisfy `pred`; stops for good at the
    /// first failing element.
    #[must_use]
    pub fn take_while<P>(self, pred: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        Self::wrap(self.inner.take_while(pred))
    }

    /// Drop elements while `pred` holds, then yield everything from the first
    /// failing element on, including later elements that would match `pred`.
    #[must_use]
    pub fn drop_while<P>(self, pred: P) -> Self
    where
        P: FnMut(&T) -> bool + 'a,
    {
        Self::wrap(self.inner.skip_while(pred))
    }

    /// Group consecutive elements into `Vec`s of `size`; the last one may be
    /// shorter. An empty stream yields no chunks. `size == 0` is treated as 1.
    ///
    /// ```
    /// use ironstream::Stream;
    ///
    /// let v = Stream::of(1..=8).chunk(3).to_vec();
    /// assert_eq!(v, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8]]);
    /// ```
    pub fn chunk(self, size: usize) -> Stream<'a, Vec<T>> {
        if size == 0 {
            log::warn!("chunk: size 0 requested, using 1");
        }
        Stream::wrap(Chunks {
            inner: self.inner,
            size: size.max(1),
        })
    }
}

/// Iterator behind [`Stream::chunk`].
struct Chunks<I> {
    inner: I,
    size: usize,
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chunk = Vec::with_capacity(self.size.min(self.inner.size_hint().0));
        for item in self.inner.by_ref() {
            chunk.push(item);
            if chunk.len() == self.size {
                break;
            }
        }
        (!chunk.is_empty()).then_some(chunk)
    }
}

impl<I: FusedIterator> FusedIterator for Chunks<I> {}
