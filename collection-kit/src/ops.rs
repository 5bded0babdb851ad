//! # Dual-mode Operations
//!
//! Iteration, transformation, reduction and size over a [`Collection`].
//! Each function behaves the same whether the collection is a sequence or a
//! mapping because each one enumerates through [`Collection::entries`].
//!
//! Callbacks receive `(value, key, collection)`:
//!
//! - `value`: a reference to the element
//! - `key`: [`Key::Index`] for sequences, [`Key::Name`] for mappings
//! - `collection`: the view being processed (it is `Copy`)
//!
//! ## Example
//!
//! ```
//! use collection_kit::{ops, Collection};
//!
//! let items = vec![1, 2, 3, 4, 5];
//! let coll = Collection::sequence(&items);
//!
//! assert_eq!(ops::map(coll, |v, _, _| v * 2), vec![2, 4, 6, 8, 10]);
//! assert_eq!(ops::reduce(coll, |acc, v, _, _| acc + v, Some(0)), Ok(15));
//! assert_eq!(ops::reduce(coll, |acc, v, _, _| acc + v, None), Ok(15));
//! assert_eq!(ops::size(coll), 5);
//! ```

use tracing::debug;

use crate::collection::{Collection, Key};
use crate::error::{Error, Result};

/// Calls `callback` once per element, in enumeration order, and returns the
/// same view it was given.
///
/// Nothing the callback returns is collected. An empty collection means zero
/// calls.
///
/// # Example
/// ```
/// use collection_kit::{ops, Collection};
///
/// let items = vec!['a', 'b'];
/// let mut seen = Vec::new();
/// let coll = Collection::sequence(&items);
/// let returned = ops::for_each(coll, |v, k, _| seen.push((k.index(), *v)));
///
/// assert!(returned.ptr_eq(&coll));
/// assert_eq!(seen, vec![(Some(0), 'a'), (Some(1), 'b')]);
/// ```
pub fn for_each<'a, K, V, F>(
    collection: Collection<'a, K, V>,
    mut callback: F,
) -> Collection<'a, K, V>
where
    F: FnMut(&'a V, Key<'a, K>, Collection<'a, K, V>),
{
    for (key, value) in collection.entries() {
        callback(value, key, collection);
    }
    collection
}

/// Like [`for_each`], but stops at the first error the callback returns and
/// hands it back unchanged.
pub fn try_for_each<'a, K, V, E, F>(
    collection: Collection<'a, K, V>,
    mut callback: F,
) -> std::result::Result<Collection<'a, K, V>, E>
where
    F: FnMut(&'a V, Key<'a, K>, Collection<'a, K, V>) -> std::result::Result<(), E>,
{
    for (key, value) in collection.entries() {
        callback(value, key, collection)?;
    }
    Ok(collection)
}

/// Builds a new sequence with one transformed element per input element.
///
/// For a mapping the output holds the transformed *values*; the keys are not
/// kept. Capture them through the callback's `key` argument when needed.
///
/// # Example
/// ```
/// use collection_kit::{ops, Collection};
/// use indexmap::IndexMap;
///
/// let mut prices = IndexMap::new();
/// prices.insert("tea".to_string(), 3);
/// prices.insert("cake".to_string(), 5);
///
/// let labels = ops::map(Collection::mapping(&prices), |v, k, _| format!("{k}={v}"));
/// assert_eq!(labels, vec!["tea=3", "cake=5"]);
/// ```
pub fn map<'a, K, V, R, F>(collection: Collection<'a, K, V>, mut callback: F) -> Vec<R>
where
    F: FnMut(&'a V, Key<'a, K>, Collection<'a, K, V>) -> R,
{
    collection
        .entries()
        .map(|(key, value)| callback(value, key, collection))
        .collect()
}

/// Fallible [`map`]. No partial output is returned on error.
pub fn try_map<'a, K, V, R, E, F>(
    collection: Collection<'a, K, V>,
    mut callback: F,
) -> std::result::Result<Vec<R>, E>
where
    F: FnMut(&'a V, Key<'a, K>, Collection<'a, K, V>) -> std::result::Result<R, E>,
{
    collection
        .entries()
        .map(|(key, value)| callback(value, key, collection))
        .collect()
}

/// Folds the collection into a single value of the element type.
///
/// - `Some(initial)`: the accumulator starts at `initial` and every element
///   is visited.
/// - `None`: the first element (for a mapping, the value under the first key
///   in enumeration order) seeds the accumulator and the fold continues from
///   the second element.
///
/// `Some(0)`, `Some(false)` and friends are real initial values; only `None`
/// means "not provided".
///
/// # Errors
///
/// [`Error::EmptyReduce`] when the collection is empty and `initial` is
/// `None`.
///
/// # Example
/// ```
/// use collection_kit::{ops, Collection, Error};
///
/// let empty: Vec<i32> = vec![];
/// let coll = Collection::sequence(&empty);
///
/// assert_eq!(ops::reduce(coll, |acc, v, _, _| acc + v, Some(0)), Ok(0));
/// assert_eq!(ops::reduce(coll, |acc, v, _, _| acc + v, None), Err(Error::EmptyReduce));
/// ```
pub fn reduce<'a, K, V, F>(
    collection: Collection<'a, K, V>,
    mut callback: F,
    initial: Option<V>,
) -> Result<V>
where
    V: Clone,
    F: FnMut(V, &'a V, Key<'a, K>, Collection<'a, K, V>) -> V,
{
    let mut entries = collection.entries();
    let seed = match initial {
        Some(initial) => initial,
        None => match entries.next() {
            Some((_, first)) => first.clone(),
            None => {
                debug!("reduce rejected: empty collection and no initial value");
                return Err(Error::EmptyReduce);
            }
        },
    };
    Ok(entries.fold(seed, |acc, (key, value)| callback(acc, value, key, collection)))
}

/// Folds the collection into an accumulator of any type, starting from
/// `initial`. Never fails.
///
/// # Example
/// ```
/// use collection_kit::{ops, Collection};
///
/// let words = vec!["to", "be", "or"];
/// let total = ops::fold(Collection::sequence(&words), 0usize, |n, w, _, _| n + w.len());
/// assert_eq!(total, 6);
/// ```
pub fn fold<'a, K, V, A, F>(collection: Collection<'a, K, V>, initial: A, mut callback: F) -> A
where
    F: FnMut(A, &'a V, Key<'a, K>, Collection<'a, K, V>) -> A,
{
    collection
        .entries()
        .fold(initial, |acc, (key, value)| callback(acc, value, key, collection))
}

/// Fallible [`fold`]; the first callback error is returned unchanged.
pub fn try_fold<'a, K, V, A, E, F>(
    collection: Collection<'a, K, V>,
    initial: A,
    mut callback: F,
) -> std::result::Result<A, E>
where
    F: FnMut(A, &'a V, Key<'a, K>, Collection<'a, K, V>) -> std::result::Result<A, E>,
{
    let mut acc = initial;
    for (key, value) in collection.entries() {
        acc = callback(acc, value, key, collection)?;
    }
    Ok(acc)
}

/// Number of elements: slice length, or key count for a mapping.
#[inline]
#[must_use]
pub fn size<K, V>(collection: Collection<'_, K, V>) -> usize {
    collection.len()
}
