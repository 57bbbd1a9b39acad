//! # mapsort
//!
//! `mapsort` sorts the entries of a map by their values, or by a property derived from
//! their values, and returns a new insertion-ordered [`IndexMap`](indexmap::IndexMap)
//! whose iteration order is the sorted order.
//!
//! ## Key Features
//!
//! - **Stable**: Entries with equal sort keys keep the order in which the source map
//!   yields them. See [`EntrySource`] for the traversal order of each supported map.
//! - **Bucketed**: Entries are grouped by sort key in an ordered map and emitted bucket by
//!   bucket, so the number of comparisons grows with the number of *distinct* sort keys.
//! - **Borrowing**: The source map is only read. Keys and values are cloned into the result.
//! - **Partial orders**: The `try_*` functions accept [`PartialOrd`] keys and report
//!   [`SortError::TypeMismatch`] when two keys turn out to be incomparable.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use indexmap::IndexMap;
//! use mapsort::{sort_by_value, Direction};
//!
//! let source: IndexMap<&str, u32> = [("A", 3), ("E", 5), ("D", 2), ("F", 2)].into_iter().collect();
//!
//! let sorted = sort_by_value(&source, Direction::Descending);
//! assert_eq!(sorted.keys().copied().collect::<Vec<_>>(), vec!["E", "A", "D", "F"]);
//! ```
//!
//! ### Sorting by a property
//!
//! Values only need to be `Clone`; map to references when they are not:
//!
//! ```rust
//! # use std::collections::BTreeMap;
//! # use mapsort::{sort_by_property, Direction};
//! # struct Task { priority: u8 }
//! let deploy = Task { priority: 2 };
//! let build = Task { priority: 1 };
//! let test = Task { priority: 1 };
//!
//! let mut tasks = BTreeMap::new();
//! tasks.insert("deploy", &deploy);
//! tasks.insert("build", &build);
//! tasks.insert("test", &test);
//!
//! let sorted = sort_by_property(&tasks, |t: &&Task| t.priority, Direction::Ascending);
//! assert_eq!(sorted.keys().copied().collect::<Vec<_>>(), vec!["build", "test", "deploy"]);
//! ```
//!
//! ### Chained style
//!
//! [`MapSorter`] wraps a map and offers a one-shot [`descending`](MapSorter::descending)
//! modifier that applies to the next sort call only.
//!
//! ## Performance Characteristics
//!
//! - **Time**: O(n log u) comparisons, where u is the number of distinct sort keys.
//! - **Memory Overhead**: One bucket per distinct sort key holding borrowed entries,
//!   plus the result map.

pub mod algo;
pub mod core;
pub mod error;
pub mod sorter;
pub use algo::{sort_by_property, sort_by_value, try_sort_by_property, try_sort_by_value};
pub use core::{Direction, EntrySource, PropertyProvider};
pub use error::{Result, SortError};
pub use sorter::MapSorter;

pub mod prelude {
    pub use crate::algo::{sort_by_property, sort_by_value, try_sort_by_property, try_sort_by_value};
    pub use crate::core::{Direction, EntrySource, PropertyProvider};
    pub use crate::error::SortError;
    pub use crate::sorter::MapSorter;
}
