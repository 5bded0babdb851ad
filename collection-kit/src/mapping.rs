//! # Mapping Accessors
//!
//! Keys and values of a mapping as sequences. Both enumerate through
//! [`MappingSource::entries`], so for the same mapping state `values[i]` is
//! the value stored under `keys[i]`.
//!
//! ## Example
//!
//! ```
//! use collection_kit::mapping::{keys, values};
//! use indexmap::IndexMap;
//!
//! let mut object = IndexMap::new();
//! object.insert("a", 1);
//! object.insert("b", 2);
//! object.insert("c", 3);
//!
//! assert_eq!(keys(&object), vec![&"a", &"b", &"c"]);
//! assert_eq!(values(&object), vec![&1, &2, &3]);
//! ```

use crate::collection::MappingSource;

/// All keys, in the mapping's native enumeration order.
#[must_use]
pub fn keys<M>(mapping: &M) -> Vec<&M::Key>
where
    M: MappingSource + ?Sized,
{
    mapping.entries().map(|(key, _)| key).collect()
}

/// All values, in the same order [`keys`] yields their keys.
#[must_use]
pub fn values<M>(mapping: &M) -> Vec<&M::Value>
where
    M: MappingSource + ?Sized,
{
    mapping.entries().map(|(_, value)| value).collect()
}
