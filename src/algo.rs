//! Bucketed stable sort of map entries.
//!
//! Every entry of the source is placed into a bucket keyed by its sort key (the value
//! itself or a property derived from it). Buckets live in an ordered map, so emitting
//! them front to back yields the entries in sort-key order. Inside a bucket entries keep
//! the order in which the source yielded them, which makes the whole operation a stable
//! sort relative to [`EntrySource::entries`].
//!
//! The main entry points are [`sort_by_value`] and [`sort_by_property`], with the
//! partial-order variants [`try_sort_by_value`] and [`try_sort_by_property`].

use crate::core::{Direction, EntrySource, PropertyProvider};
use crate::error::{Result, SortError};
use indexmap::IndexMap;
use log::{debug, trace, warn};
use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::hash::Hash;
use std::marker::PhantomData;

/// How two sort keys are compared while bucketing.
pub(crate) trait KeyOrder<P> {
    type Error;

    fn compare(a: &P, b: &P) -> std::result::Result<Ordering, Self::Error>;
}

/// Total order via [`Ord`]. Cannot fail.
pub(crate) struct TotalOrder;

impl<P: Ord> KeyOrder<P> for TotalOrder {
    type Error = Infallible;

    #[inline(always)]
    fn compare(a: &P, b: &P) -> std::result::Result<Ordering, Infallible> {
        Ok(a.cmp(b))
    }
}

/// Partial order via [`PartialOrd`]. Fails with [`SortError::TypeMismatch`] on `None`.
pub(crate) struct PartialOrder;

impl<P: PartialOrd> KeyOrder<P> for PartialOrder {
    type Error = SortError;

    #[inline(always)]
    fn compare(a: &P, b: &P) -> Result<Ordering> {
        a.partial_cmp(b).ok_or(SortError::TypeMismatch)
    }
}

/// Key of the bucket map.
///
/// Orders by `direction` applied to `O`. A failed comparison is parked in `fault` and
/// reported as `Equal`; the caller checks `fault` after every insertion and abandons
/// the map, so the inconsistent answer is never observed.
struct BucketKey<'f, P, O: KeyOrder<P>> {
    key: P,
    direction: Direction,
    fault: &'f Cell<Option<O::Error>>,
    order: PhantomData<O>,
}

impl<P, O: KeyOrder<P>> Ord for BucketKey<'_, P, O> {
    fn cmp(&self, other: &Self) -> Ordering {
        match O::compare(&self.key, &other.key) {
            Ok(ordering) => self.direction.apply(ordering),
            Err(e) => {
                self.fault.set(Some(e));
                Ordering::Equal
            }
        }
    }
}

impl<P, O: KeyOrder<P>> PartialOrd for BucketKey<'_, P, O> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P, O: KeyOrder<P>> PartialEq for BucketKey<'_, P, O> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P, O: KeyOrder<P>> Eq for BucketKey<'_, P, O> {}

/// Groups `items` by sort key and returns the buckets in `direction` order.
///
/// Items sharing a sort key stay in iteration order within their bucket. The first
/// comparison error aborts the whole operation.
pub(crate) fn into_buckets<P, T, O, I>(
    items: I,
    direction: Direction,
) -> std::result::Result<Vec<(P, Vec<T>)>, O::Error>
where
    O: KeyOrder<P>,
    I: IntoIterator<Item = (P, T)>,
{
    let fault = Cell::new(None);
    let mut buckets: BTreeMap<BucketKey<'_, P, O>, Vec<T>> = BTreeMap::new();

    for (index, (key, item)) in items.into_iter().enumerate() {
        let key = BucketKey {
            key,
            direction,
            fault: &fault,
            order: PhantomData,
        };
        let opened = buckets.len();
        if opened == 0 {
            // The first key has nothing to be compared against; check it is orderable at all.
            if let Err(e) = O::compare(&key.key, &key.key) {
                warn!("entry {} has a sort key with no ordering", index);
                return Err(e);
            }
        }
        buckets.entry(key).or_default().push(item);

        if let Some(e) = fault.take() {
            warn!(
                "entry {} has a sort key with no ordering against the existing buckets",
                index
            );
            return Err(e);
        }
        if buckets.len() > opened {
            trace!("entry {} opened bucket {}", index, buckets.len());
        }
    }

    Ok(buckets
        .into_iter()
        .map(|(bucket, items)| (bucket.key, items))
        .collect())
}

/// Flattens buckets of borrowed entries into a freshly allocated, insertion-ordered map.
fn collect_buckets<P, K, V>(buckets: Vec<(P, Vec<(&K, &V)>)>, capacity: usize) -> IndexMap<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    let mut sorted = IndexMap::with_capacity(capacity);
    for (_, entries) in buckets {
        for (key, value) in entries {
            sorted.insert(key.clone(), value.clone());
        }
    }
    sorted
}

/// Sorts the entries of `source` by their values.
///
/// Returns a new map whose iteration order is the value order in `direction`. Entries
/// with equal values keep the order in which `source` yields them. The source is not
/// modified.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use mapsort::{sort_by_value, Direction};
///
/// let source: IndexMap<&str, u32> = [("A", 3), ("E", 5), ("D", 2), ("F", 2)].into_iter().collect();
/// let sorted = sort_by_value(&source, Direction::Ascending);
///
/// let keys: Vec<&str> = sorted.keys().copied().collect();
/// assert_eq!(keys, vec!["D", "F", "A", "E"]);
/// ```
pub fn sort_by_value<S>(source: &S, direction: Direction) -> IndexMap<S::Key, S::Value>
where
    S: EntrySource + ?Sized,
    S::Key: Hash + Eq + Clone,
    S::Value: Ord + Clone,
{
    let items = source.entries().map(|(key, value)| (value, (key, value)));
    let buckets = into_buckets::<_, _, TotalOrder, _>(items, direction)
        .unwrap_or_else(|never| match never {});

    debug!(
        "sorted {} entries by value into {} buckets ({:?})",
        source.len(),
        buckets.len(),
        direction
    );
    collect_buckets(buckets, source.len())
}

/// Sorts the entries of `source` by a property of their values.
///
/// `provider` is called once per entry and its result is the sort key. Ties keep the
/// order in which `source` yields them.
///
/// # Examples
///
/// ```
/// use indexmap::IndexMap;
/// use mapsort::{sort_by_property, Direction};
///
/// let source: IndexMap<&str, &str> =
///     [("x", "three"), ("y", "a"), ("z", "bb")].into_iter().collect();
/// let sorted = sort_by_property(&source, |v: &&str| v.len(), Direction::Descending);
///
/// let keys: Vec<&str> = sorted.keys().copied().collect();
/// assert_eq!(keys, vec!["x", "z", "y"]);
/// ```
pub fn sort_by_property<S, P>(
    source: &S,
    provider: P,
    direction: Direction,
) -> IndexMap<S::Key, S::Value>
where
    S: EntrySource + ?Sized,
    S::Key: Hash + Eq + Clone,
    S::Value: Clone,
    P: PropertyProvider<S::Value>,
    P::Property: Ord,
{
    let items = source
        .entries()
        .map(|(key, value)| (provider.property(value), (key, value)));
    let buckets = into_buckets::<_, _, TotalOrder, _>(items, direction)
        .unwrap_or_else(|never| match never {});

    debug!(
        "sorted {} entries by property into {} buckets ({:?})",
        source.len(),
        buckets.len(),
        direction
    );
    collect_buckets(buckets, source.len())
}

/// Like [`sort_by_value`], but only requires values to be [`PartialOrd`].
///
/// # Errors
///
/// Returns [`SortError::TypeMismatch`] as soon as two values turn out to have no
/// ordering (for example `f64::NAN` against any number). A lone value is compared
/// with itself, so a source holding a single NaN fails too. Nothing is returned for
/// a failed sort.
///
/// ```
/// use mapsort::{try_sort_by_value, Direction, SortError};
///
/// let source = vec![("a", 1.5), ("b", f64::NAN)];
/// assert_eq!(try_sort_by_value(&source, Direction::Ascending), Err(SortError::TypeMismatch));
/// ```
pub fn try_sort_by_value<S>(source: &S, direction: Direction) -> Result<IndexMap<S::Key, S::Value>>
where
    S: EntrySource + ?Sized,
    S::Key: Hash + Eq + Clone,
    S::Value: PartialOrd + Clone,
{
    let items = source.entries().map(|(key, value)| (value, (key, value)));
    let buckets = into_buckets::<_, _, PartialOrder, _>(items, direction)?;

    debug!(
        "sorted {} entries by value into {} buckets ({:?})",
        source.len(),
        buckets.len(),
        direction
    );
    Ok(collect_buckets(buckets, source.len()))
}

/// Like [`sort_by_property`], but only requires the property to be [`PartialOrd`].
///
/// # Errors
///
/// Returns [`SortError::TypeMismatch`] as soon as two properties turn out to have no
/// ordering.
pub fn try_sort_by_property<S, P>(
    source: &S,
    provider: P,
    direction: Direction,
) -> Result<IndexMap<S::Key, S::Value>>
where
    S: EntrySource + ?Sized,
    S::Key: Hash + Eq + Clone,
    S::Value: Clone,
    P: PropertyProvider<S::Value>,
    P::Property: PartialOrd,
{
    let items = source
        .entries()
        .map(|(key, value)| (provider.property(value), (key, value)));
    let buckets = into_buckets::<_, _, PartialOrder, _>(items, direction)?;

    debug!(
        "sorted {} entries by property into {} buckets ({:?})",
        source.len(),
        buckets.len(),
        direction
    );
    Ok(collect_buckets(buckets, source.len()))
}
