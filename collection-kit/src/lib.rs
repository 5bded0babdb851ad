//! # collection-kit
//!
//! Uniform traversal, transformation, reduction, search and slicing over two
//! container shapes: ordered sequences and key-value mappings.
//!
//! ## Modules
//!
//! - [`collection`]: the [`Collection`] view and the sequence/mapping dispatch rule
//! - [`ops`]: dual-mode `for_each`, `map`, `reduce`, `fold` and `size`
//! - [`sequence`]: `find`, `filter`, `first`, `last` and `sort_by` on slices
//! - [`mapping`]: `keys` and `values`
//! - [`nested`]: nested sequences and `flatten`
//! - [`json`]: the same contract over `serde_json::Value` (feature `json`)
//!
//! ## Design Principles
//!
//! 1. **One dispatch rule**: whether something is a sequence or a mapping is
//!    decided once, by the [`Collection`] variant, and every dual-mode
//!    operation enumerates through [`Collection::entries`]
//! 2. **Pure**: operations return new values and never mutate their input;
//!    only caller callbacks have side effects
//! 3. **Explicit absence**: "not found" and "empty" are `Option::None`;
//!    reducing an empty collection without an initial value is an
//!    [`Error::EmptyReduce`], never a made-up value
//!
//! ## Example
//!
//! ```
//! use collection_kit::{filter, first_n, flatten_deep, keys, reduce, Collection, Nested};
//! use indexmap::IndexMap;
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//! assert_eq!(reduce(Collection::sequence(&numbers), |acc, v, _, _| acc + v, None), Ok(15));
//! assert_eq!(filter(&numbers, |v| v % 2 == 0), vec![2, 4]);
//! assert_eq!(first_n(&numbers, 3), &[1, 2, 3]);
//!
//! let mut object = IndexMap::new();
//! object.insert("a", 1);
//! object.insert("b", 2);
//! assert_eq!(keys(&object), vec![&"a", &"b"]);
//!
//! let nested = vec![Nested::Item(1), Nested::List(vec![Nested::Item(2)])];
//! assert_eq!(flatten_deep(&nested), vec![1, 2]);
//! ```

pub mod collection;
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod mapping;
pub mod nested;
pub mod ops;
pub mod sequence;

// Re-export the whole operation surface for convenience
pub use collection::{Collection, Entries, Key, MappingSource};
pub use error::{Error, Result};
pub use mapping::{keys, values};
pub use nested::{flatten, flatten_deep, flatten_shallow, flatten_with, FlattenMode, Nested};
pub use ops::{fold, for_each, map, reduce, size, try_fold, try_for_each, try_map};
pub use sequence::{filter, find, first, first_n, last, last_n, sort_by};
