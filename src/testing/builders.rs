//! Test data builders for creating stream inputs fluently.

use crate::Stream;
use std::ops::RangeInclusive;

/// A fluent builder for test datasets.
///
/// # Example
///
/// ```
/// use ironstream::testing::TestDataBuilder;
///
/// let data = TestDataBuilder::new()
///     .add_range(1..=10)
///     .add_value(100)
///     .add_repeated(42, 5)
///     .build();
///
/// assert_eq!(data.len(), 16); // 10 + 1 + 5
/// ```
#[derive(Clone, Debug, Default)]
pub struct TestDataBuilder<T> {
    data: Vec<T>,
}

impl<T> TestDataBuilder<T> {
    /// Create a new empty builder.
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Add a single value.
    #[must_use]
    pub fn add_value(mut self, value: T) -> Self {
        self.data.push(value);
        self
    }

    /// Add several values.
    #[must_use]
    pub fn add_values(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.data.extend(values);
        self
    }

    /// Add `value` `count` times.
    #[must_use]
    pub fn add_repeated(mut self, value: T, count: usize) -> Self
    where
        T: Clone,
    {
        self.data.extend(std::iter::repeat_n(value, count));
        self
    }

    /// Add `count` values produced by `generator(index)`.
    ///
    /// ```
    /// use ironstream::testing::TestDataBuilder;
    ///
    /// let data = TestDataBuilder::new().add_generated(4, |i| i * i).build();
    /// assert_eq!(data, vec![0, 1, 4, 9]);
    /// ```
    #[must_use]
    pub fn add_generated(mut self, count: usize, generator: impl FnMut(usize) -> T) -> Self {
        self.data.extend((0..count).map(generator));
        self
    }

    /// Current number of values.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Return the dataset.
    #[must_use]
    pub fn build(self) -> Vec<T> {
        self.data
    }

    /// Return the dataset wrapped in a [`Stream`].
    #[must_use]
    pub fn build_stream<'a>(self) -> Stream<'a, T>
    where
        T: 'a,
    {
        Stream::of(self.data)
    }
}

impl<T: From<i32>> TestDataBuilder<T> {
    /// Add every integer of `range`, converted to `T`.
    ///
    /// ```
    /// use ironstream::testing::TestDataBuilder;
    ///
    /// let data = TestDataBuilder::<f64>::new().add_range(1..=3).build();
    /// assert_eq!(data, vec![1.0, 2.0, 3.0]);
    /// ```
    #[must_use]
    pub fn add_range(mut self, range: RangeInclusive<i32>) -> Self {
        self.data.extend(range.map(T::from));
        self
    }
}
