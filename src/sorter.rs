//! Chained sorting with a one-shot descending modifier.

use crate::algo;
use crate::core::{Direction, EntrySource, PropertyProvider};
use crate::error::Result;
use indexmap::IndexMap;
use std::hash::Hash;

/// Sorts one borrowed mapping by its values, any number of times.
///
/// Sorting is ascending unless [`descending`](MapSorter::descending) was called right
/// before. The descending flag applies to exactly one sort call and is cleared when that
/// call starts, whether or not it succeeds.
///
/// ```
/// use indexmap::IndexMap;
/// use mapsort::MapSorter;
///
/// let source: IndexMap<&str, u32> = [("A", 3), ("E", 5), ("D", 2)].into_iter().collect();
/// let mut sorter = MapSorter::new(&source);
///
/// let desc = sorter.descending().sort_by_value();
/// assert_eq!(desc.keys().copied().collect::<Vec<_>>(), vec!["E", "A", "D"]);
///
/// // Back to ascending.
/// let asc = sorter.sort_by_value();
/// assert_eq!(asc.keys().copied().collect::<Vec<_>>(), vec!["D", "A", "E"]);
/// ```
#[derive(Debug)]
pub struct MapSorter<'a, S: ?Sized> {
    source: &'a S,
    descending: bool,
}

impl<'a, S: EntrySource + ?Sized> MapSorter<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            descending: false,
        }
    }

    pub fn source(&self) -> &'a S {
        self.source
    }

    /// Direction the next sort call will use.
    pub fn direction(&self) -> Direction {
        if self.descending {
            Direction::Descending
        } else {
            Direction::Ascending
        }
    }

    /// Makes the next sort call descending.
    pub fn descending(&mut self) -> &mut Self {
        self.descending = true;
        self
    }

    fn take_direction(&mut self) -> Direction {
        let direction = self.direction();
        self.descending = false;
        direction
    }

    /// See [`algo::sort_by_value`].
    pub fn sort_by_value(&mut self) -> IndexMap<S::Key, S::Value>
    where
        S::Key: Hash + Eq + Clone,
        S::Value: Ord + Clone,
    {
        let direction = self.take_direction();
        algo::sort_by_value(self.source, direction)
    }

    /// See [`algo::sort_by_property`].
    pub fn sort_by_property<P>(&mut self, provider: P) -> IndexMap<S::Key, S::Value>
    where
        S::Key: Hash + Eq + Clone,
        S::Value: Clone,
        P: PropertyProvider<S::Value>,
        P::Property: Ord,
    {
        let direction = self.take_direction();
        algo::sort_by_property(self.source, provider, direction)
    }

    /// See [`algo::try_sort_by_value`]. The descending flag is cleared even on error.
    pub fn try_sort_by_value(&mut self) -> Result<IndexMap<S::Key, S::Value>>
    where
        S::Key: Hash + Eq + Clone,
        S::Value: PartialOrd + Clone,
    {
        let direction = self.take_direction();
        algo::try_sort_by_value(self.source, direction)
    }

    /// See [`algo::try_sort_by_property`]. The descending flag is cleared even on error.
    pub fn try_sort_by_property<P>(&mut self, provider: P) -> Result<IndexMap<S::Key, S::Value>>
    where
        S::Key: Hash + Eq + Clone,
        S::Value: Clone,
        P: PropertyProvider<S::Value>,
        P::Property: PartialOrd,
    {
        let direction = self.take_direction();
        algo::try_sort_by_property(self.source, provider, direction)
    }
}
