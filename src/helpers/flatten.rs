//! `flat_map` and recursive `flatten`.
//!
//! Arbitrarily nested input is modelled explicitly with [`Nested<T>`]: a value
//! is either a [`Nested::Leaf`] or a [`Nested::Seq`] of further nested values.
//! [`Stream::flatten`] walks that tree depth-first, lazily, with an explicit
//! stack instead of recursion, so nesting depth is not limited by the call
//! stack.

use crate::Stream;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A leaf value or a sequence of nested values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Nested<T> {
    Leaf(T),
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// A sequence of plain leaves.
    pub fn seq<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self::Seq(items.into_iter().map(Nested::Leaf).collect())
    }

    /// `true` if this is a sequence rather than a leaf.
    #[must_use]
    pub const fn is_seq(&self) -> bool {
        matches!(self, Self::Seq(_))
    }
}

impl<'a, T: 'a> Stream<'a, T> {
    /// Replace each element with the full contents of `f(element)`.
    ///
    /// ```
    /// use ironstream::Stream;
    ///
    /// let v = Stream::of([1, 2, 3, 4]).flat_map(|x| [x, 2 * x + 1]).to_vec();
    /// assert_eq!(v, vec![1, 3, 2, 5, 3, 7, 4, 9]);
    /// ```
    pub fn flat_map<O, U, F>(self, f: F) -> Stream<'a, O>
    where
        O: 'a,
        U: IntoIterator<Item = O> + 'a,
        F: FnMut(T) -> U + 'a,
    {
        Stream::wrap(self.inner.flat_map(f))
    }
}

impl<'a, T: 'a> Stream<'a, Nested<T>> {
    /// Replace every [`Nested::Seq`] with its contents, to any depth; leaves
    /// pass through unchanged.
    ///
    /// ```
    /// use ironstream::{Nested, Stream};
    /// use ironstream::Nested::{Leaf, Seq};
    ///
    /// let input = vec![
    ///     Leaf(1),
    ///     Nested::seq([2, 3]),
    ///     Leaf(4),
    ///     Seq(vec![Leaf(5), Seq(vec![Leaf(6), Nested::seq([7]), Leaf(8)]), Leaf(9)]),
    ///     Leaf(10),
    /// ];
    /// assert_eq!(Stream::of(input).flatten().to_vec(), (1..=10).collect::<Vec<_>>());
    /// ```
    pub fn flatten(self) -> Stream<'a, T> {
        Stream::wrap(Flatten {
            outer: self.inner,
            stack: Vec::new(),
        })
    }
}

/// Depth-first iterator behind [`Stream::flatten`].
struct Flatten<I, T> {
    outer: I,
    stack: Vec<std::vec::IntoIter<Nested<T>>>,
}

impl<I, T> Iterator for Flatten<I, T>
where
    I: Iterator<Item = Nested<T>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let node = match self.stack.last_mut() {
                Some(top) => match top.next() {
                    Some(node) => node,
                    None => {
                        self.stack.pop();
                        continue;
                    }
                },
                None => self.outer.next()?,
            };
            match node {
                Nested::Leaf(v) => return Some(v),
                Nested::Seq(children) => self.stack.push(children.into_iter()),
            }
        }
    }
}
