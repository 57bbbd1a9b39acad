//! Core traits and types for mapsort.
//!
//! This module defines:
//! - [`EntrySource`]: The trait a mapping implements so it can be sorted.
//! - [`PropertyProvider`]: Derives the sort key from a mapped value.
//! - [`Direction`]: Ascending or descending bucket order.

use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A trait for traversing the entries of a mapping without copying them.
///
/// The order in which [`entries`](EntrySource::entries) yields pairs is the order
/// ties are preserved in: two entries with equal sort keys appear in the sorted
/// result in the same relative order as they are yielded here. Every provided
/// implementation documents its traversal order.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use mapsort::core::EntrySource;
///
/// struct Scores {
///     names: Vec<String>,
///     points: Vec<u32>,
/// }
///
/// impl EntrySource for Scores {
///     type Key = String;
///     type Value = u32;
///
///     fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)> {
///         self.names.iter().zip(self.points.iter())
///     }
///
///     fn len(&self) -> usize {
///         self.names.len()
///     }
/// }
/// ```
pub trait EntrySource {
    type Key;
    type Value;

    /// Yields every `(key, value)` pair exactly once.
    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the mapping has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Traversal order is the hash map's own, which is unspecified and varies between runs
// with the default hasher. Use an `IndexMap` source when tie order matters.
impl<K, V, S: BuildHasher> EntrySource for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Ascending key order.
impl<K, V> EntrySource for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Insertion order.
impl<K, V, S> EntrySource for IndexMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Slice order. Duplicate keys are not rejected; the sorted map keeps the first
// position of a repeated key and the last value written to it.
impl<K, V> EntrySource for [(K, V)] {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter().map(|(k, v)| (k, v))
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_slice()).
impl<K, V> EntrySource for Vec<(K, V)> {
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.as_slice().entries()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

/// Provides the property of a mapped value that a map is sorted by.
///
/// Implemented for every `Fn(&V) -> P`, so a closure is usually all that is
/// needed. The provider is called exactly once per entry and should be pure.
///
/// ```
/// use mapsort::core::PropertyProvider;
///
/// struct ByLength;
///
/// impl PropertyProvider<String> for ByLength {
///     type Property = usize;
///
///     fn property(&self, item: &String) -> usize {
///         item.len()
///     }
/// }
///
/// assert_eq!(ByLength.property(&"four".to_string()), 4);
/// ```
pub trait PropertyProvider<V: ?Sized> {
    type Property;

    fn property(&self, item: &V) -> Self::Property;
}

impl<V: ?Sized, P, F> PropertyProvider<V> for F
where
    F: Fn(&V) -> P,
{
    type Property = P;

    #[inline]
    fn property(&self, item: &V) -> P {
        self(item)
    }
}

/// Order in which buckets are emitted.
///
/// Only the bucket order flips for [`Direction::Descending`]; entries inside a
/// bucket always keep their traversal order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Maps a natural ordering onto this direction.
    #[inline(always)]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_apply() {
        assert_eq!(Direction::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Direction::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Direction::Descending.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(Direction::default(), Direction::Ascending);
        assert_eq!(Direction::Ascending.reverse(), Direction::Descending);
    }

    #[test]
    fn test_slice_entries_keep_order() {
        let source = vec![("b", 1), ("a", 2), ("c", 0)];
        let keys: Vec<&str> = source.entries().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(EntrySource::len(&source), 3);
        assert!(!EntrySource::is_empty(&source));
    }

    #[test]
    fn test_closure_provider() {
        let provider = |s: &String| s.len();
        assert_eq!(provider.property(&"abc".to_string()), 3);
    }
}
