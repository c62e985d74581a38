//! Container collectors: `ToList`, `ToSet`, `ToSetBy`, `GroupingBy`

use crate::collector::Collector;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/* ===================== ToList ===================== */

/// All elements in encounter order, duplicates kept.
///
/// - Container: `Vec<T>`
/// - Output: `Vec<T>`
#[derive(Clone, Copy, Debug, Default)]
pub struct ToList;

impl<T> Collector<T, Vec<T>, Vec<T>> for ToList {
    fn supplier(&self) -> Vec<T> {
        Vec::new()
    }

    fn accumulator(&self, container: &mut Vec<T>, element: T) {
        container.push(element);
    }

    fn finisher(&self, container: Vec<T>) -> Vec<T> {
        container
    }
}

/* ===================== ToSet ===================== */

/// Each distinct element once, in first-insertion order.
///
/// The element is its own key, so this is meant for scalar-like types with
/// value equality. Use [`ToSetBy`] to deduplicate records by a projected key.
///
/// - Container: `(HashSet<T>, Vec<T>)`
/// - Output: `Vec<T>`
#[derive(Clone, Copy, Debug, Default)]
pub struct ToSet;

impl<T> Collector<T, (HashSet<T>, Vec<T>), Vec<T>> for ToSet
where
    T: Eq + Hash + Clone,
{
    fn supplier(&self) -> (HashSet<T>, Vec<T>) {
        (HashSet::new(), Vec::new())
    }

    fn accumulator(&self, container: &mut (HashSet<T>, Vec<T>), element: T) {
        if !container.0.contains(&element) {
            container.0.insert(element.clone());
            container.1.push(element);
        }
    }

    fn finisher(&self, container: (HashSet<T>, Vec<T>)) -> Vec<T> {
        container.1
    }
}

/// Elements with distinct keys (first occurrence wins), in first-insertion order.
///
/// - Container: `(HashSet<K>, Vec<T>)`
/// - Output: `Vec<T>`
#[derive(Clone, Copy, Debug)]
pub struct ToSetBy<F> {
    key: F,
}

impl<F> ToSetBy<F> {
    #[must_use]
    pub const fn new(key: F) -> Self {
        Self { key }
    }
}

impl<T, K, F> Collector<T, (HashSet<K>, Vec<T>), Vec<T>> for ToSetBy<F>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    fn supplier(&self) -> (HashSet<K>, Vec<T>) {
        (HashSet::new(), Vec::new())
    }

    fn accumulator(&self, container: &mut (HashSet<K>, Vec<T>), element: T) {
        if container.0.insert((self.key)(&element)) {
            container.1.push(element);
        }
    }

    fn finisher(&self, container: (HashSet<K>, Vec<T>)) -> Vec<T> {
        container.1
    }
}

/* ===================== GroupingBy ===================== */

/// Insertion-ordered grouping state used by [`GroupingBy`].
#[derive(Clone, Debug)]
pub struct Groups<K, T> {
    index: HashMap<K, usize>,
    groups: Vec<(K, Vec<T>)>,
}

impl<K, T> Default for Groups<K, T> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, T> Groups<K, T> {
    fn push(&mut self, key: K, element: T) {
        if let Some(&slot) = self.index.get(&key) {
            self.groups[slot].1.push(element);
        } else {
            self.index.insert(key.clone(), self.groups.len());
            self.groups.push((key, vec![element]));
        }
    }
}

/// Group elements by a classification key.
///
/// Output is `Vec<(K, Vec<T>)>`: groups appear in the order their key was first
/// seen, and elements within a group keep encounter order.
///
/// - Container: [`Groups<K, T>`]
/// - Output: `Vec<(K, Vec<T>)>`
#[derive(Clone, Copy, Debug)]
pub struct GroupingBy<F> {
    classify: F,
}

impl<F> GroupingBy<F> {
    #[must_use]
    pub const fn new(classify: F) -> Self {
        Self { classify }
    }
}

impl<T, K, F> Collector<T, Groups<K, T>, Vec<(K, Vec<T>)>> for GroupingBy<F>
where
    K: Eq + Hash + Clone,
    F: Fn(&T) -> K,
{
    fn supplier(&self) -> Groups<K, T> {
        Groups::default()
    }

    fn accumulator(&self, container: &mut Groups<K, T>, element: T) {
        let key = (self.classify)(&element);
        container.push(key, element);
    }

    fn finisher(&self, container: Groups<K, T>) -> Vec<(K, Vec<T>)> {
        container.groups
    }
}
