//! Assertion functions for testing stream outputs.
//!
//! These compare collections produced by streams with expected results and
//! panic with a message that shows both sides in full.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that two collections are equal in order and content.
///
/// # Panics
///
/// Panics if the collections differ in length or content.
///
/// # Example
///
/// ```
/// use ironstream::testing::assert_collections_equal;
///
/// let actual = vec![1, 2, 3];
/// let expected = vec![1, 2, 3];
/// assert_collections_equal(&actual, &expected);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            a, e,
            "Collection mismatch at index {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two collections contain the same elements, ignoring order.
///
/// Duplicates matter: each element must occur the same number of times on
/// both sides.
///
/// # Panics
///
/// Panics if the collections differ in content (ignoring order).
///
/// # Example
///
/// ```
/// use ironstream::testing::assert_collections_unordered_equal;
///
/// assert_collections_unordered_equal(&[3, 1, 2], &[1, 2, 3]);
/// ```
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );

    let actual_counts = counts(actual);
    let expected_counts = counts(expected);

    if actual_counts != expected_counts {
        let missing: Vec<_> = surplus(&expected_counts, &actual_counts);
        let extra: Vec<_> = surplus(&actual_counts, &expected_counts);

        panic!(
            "Collection content mismatch:\n  Missing elements: {missing:?}\n  Extra elements: {extra:?}\n  Expected: {expected:?}\n  Actual: {actual:?}"
        );
    }
}

/// Assert that grouped output (e.g. from `grouping_by`) matches.
///
/// Keys are compared in order, since grouping preserves first-seen key
/// order; the values inside each group are compared ignoring order, with
/// duplicates counted.
///
/// # Panics
///
/// Panics if the groups differ in keys, key order, or values.
///
/// # Example
///
/// ```
/// use ironstream::testing::assert_grouped_equal;
///
/// let actual = vec![("a", vec![1, 2]), ("b", vec![3])];
/// let expected = vec![("a", vec![2, 1]), ("b", vec![3])];
/// assert_grouped_equal(&actual, &expected);
/// ```
pub fn assert_grouped_equal<K, V>(actual: &[(K, Vec<V>)], expected: &[(K, Vec<V>)])
where
    K: Debug + PartialEq,
    V: Debug + Eq + Hash,
{
    assert_eq!(
        actual.len(),
        expected.len(),
        "Group count mismatch:\n  Expected: {}\n  Actual: {}",
        expected.len(),
        actual.len()
    );

    for (i, ((ak, av), (ek, ev))) in actual.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            ak, ek,
            "Key mismatch at index {i}:\n  Expected: {ek:?}\n  Actual: {ak:?}"
        );

        assert!(
            counts(av) == counts(ev),
            "Value mismatch for key {ak:?} at index {i}:\n  Expected values: {ev:?}\n  Actual values: {av:?}"
        );
    }
}

/// Occurrence count of each distinct element.
fn counts<T: Eq + Hash>(items: &[T]) -> HashMap<&T, usize> {
    let mut m = HashMap::new();
    for item in items {
        *m.entry(item).or_insert(0) += 1;
    }
    m
}

/// Elements occurring more often in `a` than in `b`, with the excess count.
fn surplus<'a, T: Eq + Hash>(
    a: &HashMap<&'a T, usize>,
    b: &HashMap<&'a T, usize>,
) -> Vec<(&'a T, usize)> {
    a.iter()
        .filter_map(|(k, n)| {
            let m = b.get(k).copied().unwrap_or(0);
            (*n > m).then(|| (*k, n - m))
        })
        .collect()
}

/// Assert that all elements in a collection satisfy a predicate.
///
/// # Panics
///
/// Panics if any element does not satisfy the predicate.
///
/// # Example
///
/// ```
/// use ironstream::testing::assert_all;
///
/// assert_all(&[2, 4, 6, 8], |x| x % 2 == 0);
/// ```
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            predicate(item),
            "Predicate failed for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that at least one element in a collection satisfies a predicate.
///
/// # Panics
///
/// Panics if no elements satisfy the predicate.
pub fn assert_any<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    assert!(
        collection.iter().any(&predicate),
        "No elements satisfied the predicate:\n  Collection: {collection:?}"
    );
}

/// Assert that no elements in a collection satisfy a predicate.
///
/// # Panics
///
/// Panics if any element satisfies the predicate.
pub fn assert_none<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    for (i, item) in collection.iter().enumerate() {
        assert!(
            !predicate(item),
            "Predicate unexpectedly succeeded for element at index {i}:\n  Element: {item:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that two floats differ by at most `tolerance`.
///
/// # Panics
///
/// Panics if `|actual - expected| > tolerance` or either side is NaN.
///
/// # Example
///
/// ```
/// use ironstream::testing::assert_close;
///
/// assert_close(0.1 + 0.2, 0.3, 1e-12);
/// ```
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "Float mismatch:\n  Expected: {expected}\n  Actual: {actual}\n  Tolerance: {tolerance}"
    );
}
