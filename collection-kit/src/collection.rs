//! # Collections and the Dispatch Rule
//!
//! Every dual-mode operation in this crate accepts a [`Collection`]: a cheap,
//! `Copy` view that is either an ordered sequence (a slice) or a key-value
//! mapping (anything implementing [`MappingSource`]).
//!
//! The sequence/mapping decision is made exactly once, when the view is
//! built. Operations never inspect the container themselves; they enumerate
//! through [`Collection::entries`], which yields `(key, value)` pairs:
//!
//! - sequences yield `(Key::Index(i), &items[i])` in ascending index order
//! - mappings yield `(Key::Name(&k), &v)` in the map's native order
//!
//! ## Mapping order
//!
//! A mapping enumerates in whatever order its own iterator uses:
//!
//! | Type                       | Order                     |
//! |----------------------------|---------------------------|
//! | `indexmap::IndexMap`       | insertion                 |
//! | `std::collections::BTreeMap` | ascending key           |
//! | `std::collections::HashMap`  | unspecified (hash)      |
//! | `im::OrdMap`               | ascending key             |
//! | `im::HashMap`              | unspecified (hash)        |
//! | `serde_json::Map`          | insertion                 |
//!
//! `IndexMap` is the recommended mapping when order matters.
//!
//! ## Example
//!
//! ```
//! use collection_kit::{Collection, Key};
//! use indexmap::IndexMap;
//!
//! let items = vec![10, 20];
//! let seq = Collection::sequence(&items);
//! assert!(seq.is_sequence());
//! let pairs: Vec<_> = seq.entries().collect();
//! assert_eq!(pairs, vec![(Key::Index(0), &10), (Key::Index(1), &20)]);
//!
//! let mut scores = IndexMap::new();
//! scores.insert("b", 2);
//! scores.insert("a", 1);
//! let map = Collection::mapping(&scores);
//! assert!(map.is_mapping());
//! let keys: Vec<_> = map.entries().map(|(k, _)| k.name().copied()).collect();
//! assert_eq!(keys, vec![Some("b"), Some("a")]);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::iter::Enumerate;
use std::slice;

use indexmap::IndexMap;

/// A key-value container that can be enumerated as a mapping.
///
/// Implementations must yield every entry exactly once, and `len` must agree
/// with the number of entries yielded without walking the values.
pub trait MappingSource {
    type Key;
    type Value;

    /// Number of entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries in this mapping's native enumeration order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&Self::Key, &Self::Value)> + '_>;
}

impl<K, V, S> MappingSource for IndexMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        IndexMap::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

impl<K, V> MappingSource for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

impl<K, V, S> MappingSource for HashMap<K, V, S> {
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

#[cfg(feature = "im")]
impl<K, V, S> MappingSource for im::HashMap<K, V, S>
where
    K: std::hash::Hash + Eq + Clone,
    V: Clone,
    S: std::hash::BuildHasher,
{
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        im::HashMap::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

#[cfg(feature = "im")]
impl<K, V> MappingSource for im::OrdMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn len(&self) -> usize {
        im::OrdMap::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }
}

#[cfg(feature = "json")]
impl MappingSource for serde_json::Map<String, serde_json::Value> {
    type Key = String;
    type Value = serde_json::Value;

    fn len(&self) -> usize {
        serde_json::Map::len(self)
    }

    fn entries(&self) -> Box<dyn Iterator<Item = (&String, &serde_json::Value)> + '_> {
        Box::new(self.iter())
    }
}

/// Position of an element: an index into a sequence or a key of a mapping.
///
/// This is the second argument every dual-mode callback receives.
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Key<'a, K> {
    Index(usize),
    Name(&'a K),
}

impl<K> Clone for Key<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Key<'_, K> {}

impl<'a, K> Key<'a, K> {
    /// The sequence index, if this is a sequence position.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(i),
            Key::Name(_) => None,
        }
    }

    /// The mapping key, if this is a mapping position.
    #[must_use]
    pub fn name(self) -> Option<&'a K> {
        match self {
            Key::Index(_) => None,
            Key::Name(k) => Some(k),
        }
    }
}

impl<K: fmt::Display> fmt::Display for Key<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(k) => write!(f, "{k}"),
        }
    }
}

/// A borrowed view of either an ordered sequence or a mapping.
///
/// The variant *is* the dispatch rule: it is chosen once when the view is
/// built, and operations read it back through [`Collection::entries`].
pub enum Collection<'a, K: 'a, V: 'a> {
    Sequence(&'a [V]),
    Mapping(&'a dyn MappingSource<Key = K, Value = V>),
}

impl<K, V> Clone for Collection<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Collection<'_, K, V> {}

impl<'a, V> Collection<'a, usize, V> {
    /// Views a slice as a sequence. Sequences are keyed by index, so the key
    /// type is fixed to `usize`.
    ///
    /// Use [`Collection::Sequence`] directly when a sequence must share a key
    /// type with mappings (as dynamic values do).
    #[must_use]
    pub fn sequence(items: &'a [V]) -> Self {
        Collection::Sequence(items)
    }
}

impl<'a, K, V> Collection<'a, K, V> {
    /// Views a key-value container as a mapping.
    #[must_use]
    pub fn mapping<M>(map: &'a M) -> Self
    where
        M: MappingSource<Key = K, Value = V> + 'a,
    {
        Collection::Mapping(map)
    }

    /// Whether this is an ordered sequence.
    #[must_use]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Collection::Sequence(_))
    }

    #[must_use]
    pub fn is_mapping(&self) -> bool {
        !self.is_sequence()
    }

    /// Element count, without touching any value.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Collection::Sequence(items) => items.len(),
            Collection::Mapping(map) => map.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enumerates `(key, value)` pairs in the order appropriate to the
    /// container kind.
    #[must_use]
    pub fn entries(&self) -> Entries<'a, K, V> {
        let inner = match *self {
            Collection::Sequence(items) => EntriesInner::Sequence(items.iter().enumerate()),
            Collection::Mapping(map) => EntriesInner::Mapping(map.entries()),
        };
        Entries { inner }
    }

    /// The sequence slice, if this is a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&'a [V]> {
        match *self {
            Collection::Sequence(items) => Some(items),
            Collection::Mapping(_) => None,
        }
    }

    /// The mapping, if this is a mapping.
    #[must_use]
    pub fn as_mapping(&self) -> Option<&'a dyn MappingSource<Key = K, Value = V>> {
        match *self {
            Collection::Sequence(_) => None,
            Collection::Mapping(map) => Some(map),
        }
    }

    /// Whether both views borrow the very same container.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Collection::Sequence(a), Collection::Sequence(b)) => std::ptr::eq(a, b),
            (Collection::Mapping(a), Collection::Mapping(b)) => {
                std::ptr::eq(a as *const _ as *const u8, b as *const _ as *const u8)
            }
            _ => false,
        }
    }
}

impl<'a, V> From<&'a [V]> for Collection<'a, usize, V> {
    fn from(items: &'a [V]) -> Self {
        Collection::Sequence(items)
    }
}

impl<'a, V> From<&'a Vec<V>> for Collection<'a, usize, V> {
    fn from(items: &'a Vec<V>) -> Self {
        Collection::Sequence(items.as_slice())
    }
}

impl<'a, V, const N: usize> From<&'a [V; N]> for Collection<'a, usize, V> {
    fn from(items: &'a [V; N]) -> Self {
        Collection::Sequence(items.as_slice())
    }
}

impl<'a, K, V, S> From<&'a IndexMap<K, V, S>> for Collection<'a, K, V> {
    fn from(map: &'a IndexMap<K, V, S>) -> Self {
        Collection::Mapping(map)
    }
}

impl<'a, K, V> From<&'a BTreeMap<K, V>> for Collection<'a, K, V> {
    fn from(map: &'a BTreeMap<K, V>) -> Self {
        Collection::Mapping(map)
    }
}

impl<'a, K, V, S> From<&'a HashMap<K, V, S>> for Collection<'a, K, V> {
    fn from(map: &'a HashMap<K, V, S>) -> Self {
        Collection::Mapping(map)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Collection<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Collection::Mapping(map) => f.debug_map().entries(map.entries()).finish(),
        }
    }
}

/// Iterator over the `(key, value)` pairs of a [`Collection`].
pub struct Entries<'a, K, V> {
    inner: EntriesInner<'a, K, V>,
}

enum EntriesInner<'a, K, V> {
    Sequence(Enumerate<slice::Iter<'a, V>>),
    Mapping(Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>),
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = (Key<'a, K>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            EntriesInner::Sequence(iter) => iter.next().map(|(i, v)| (Key::Index(i), v)),
            EntriesInner::Mapping(iter) => iter.next().map(|(k, v)| (Key::Name(k), v)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            EntriesInner::Sequence(iter) => iter.size_hint(),
            EntriesInner::Mapping(iter) => iter.size_hint(),
        }
    }
}
