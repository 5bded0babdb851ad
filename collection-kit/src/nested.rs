//! # Nested Sequences and Flattening
//!
//! A sequence whose elements may themselves be sequences, to any depth, is a
//! `[Nested<T>]`. Each element is either a bare [`Nested::Item`] or a
//! [`Nested::List`] of further elements.
//!
//! [`flatten`] removes nesting either one level at a time (shallow) or
//! completely (deep). Deep flattening walks the structure depth-first, left
//! to right, so items come out in pre-order.
//!
//! ## Example
//!
//! ```
//! use collection_kit::nested::{flatten, flatten_deep, Nested};
//! use collection_kit::nested::Nested::{Item, List};
//!
//! // [1, [2, [3, [4]], 5]]
//! let input = vec![
//!     Item(1),
//!     List(vec![
//!         Item(2),
//!         List(vec![Item(3), List(vec![Item(4)])]),
//!         Item(5),
//!     ]),
//! ];
//!
//! assert_eq!(flatten_deep(&input), vec![1, 2, 3, 4, 5]);
//!
//! // [1, 2, [3, [4]], 5]
//! assert_eq!(
//!     flatten(&input, true),
//!     vec![Item(1), Item(2), List(vec![Item(3), List(vec![Item(4)])]), Item(5)]
//! );
//! ```

use tracing::trace;

/// An element of a possibly nested sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn is_item(&self) -> bool {
        matches!(self, Nested::Item(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Nested::List(_))
    }

    /// The wrapped value, if this is an item.
    pub fn as_item(&self) -> Option<&T> {
        match self {
            Nested::Item(value) => Some(value),
            Nested::List(_) => None,
        }
    }

    /// Levels of list nesting: 0 for an item, 1 for a list of items (or an
    /// empty list), and so on.
    pub fn depth(&self) -> usize {
        match self {
            Nested::Item(_) => 0,
            Nested::List(children) => 1 + children.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }

    /// Number of items at any depth.
    pub fn leaf_count(&self) -> usize {
        match self {
            Nested::Item(_) => 1,
            Nested::List(children) => children.iter().map(Nested::leaf_count).sum(),
        }
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(children: Vec<Nested<T>>) -> Self {
        Nested::List(children)
    }
}

/// How far [`flatten_with`] unwraps nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlattenMode {
    /// Unwrap exactly one level.
    Shallow,
    /// Unwrap every level.
    #[default]
    Deep,
}

impl From<bool> for FlattenMode {
    /// `true` selects [`FlattenMode::Shallow`].
    fn from(shallow: bool) -> Self {
        if shallow {
            FlattenMode::Shallow
        } else {
            FlattenMode::Deep
        }
    }
}

/// Flattens `sequence` one level (`shallow = true`) or completely
/// (`shallow = false`).
///
/// Every call builds its result from scratch; nothing carries over between
/// calls. The input is never modified.
pub fn flatten<T: Clone>(sequence: &[Nested<T>], shallow: bool) -> Vec<Nested<T>> {
    flatten_with(sequence, FlattenMode::from(shallow))
}

/// [`flatten`] with an explicit [`FlattenMode`].
pub fn flatten_with<T: Clone>(sequence: &[Nested<T>], mode: FlattenMode) -> Vec<Nested<T>> {
    let flattened = match mode {
        FlattenMode::Shallow => flatten_shallow(sequence),
        FlattenMode::Deep => flatten_deep(sequence)
            .into_iter()
            .map(Nested::Item)
            .collect(),
    };
    trace!(?mode, input = sequence.len(), output = flattened.len(), "flatten");
    flattened
}

/// Splices the direct children of each list element in place. Items pass
/// through; lists nested two or more levels deep stay lists.
pub fn flatten_shallow<T: Clone>(sequence: &[Nested<T>]) -> Vec<Nested<T>> {
    let mut flattened = Vec::with_capacity(sequence.len());
    for element in sequence {
        match element {
            Nested::Item(_) => flattened.push(element.clone()),
            Nested::List(children) => flattened.extend(children.iter().cloned()),
        }
    }
    flattened
}

/// Every item at every depth, in pre-order.
pub fn flatten_deep<T: Clone>(sequence: &[Nested<T>]) -> Vec<T> {
    fn collect_items<T: Clone>(sequence: &[Nested<T>], items: &mut Vec<T>) {
        for element in sequence {
            match element {
                Nested::Item(value) => items.push(value.clone()),
                Nested::List(children) => collect_items(children, items),
            }
        }
    }

    let mut items = Vec::new();
    collect_items(sequence, &mut items);
    items
}
