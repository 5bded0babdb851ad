//! # Sequence Operations
//!
//! Search, filtering, slicing and sorting for ordered sequences. These take
//! plain slices: none of them has a mapping mode.
//!
//! ## Counts
//!
//! `first_n` and `last_n` take a `usize`, so a negative count cannot be
//! expressed. A count larger than the sequence is clamped to its length.
//! Counts that arrive as signed integers go through [`count`] first, which
//! rejects negatives instead of reinterpreting them.
//!
//! ## Example
//!
//! ```
//! use collection_kit::sequence::{filter, find, first, first_n, last, last_n};
//!
//! let items = [1, 2, 3, 4, 5];
//!
//! assert_eq!(find(&items, |v| *v > 3), Some(&4));
//! assert_eq!(filter(&items, |v| v % 2 == 0), vec![2, 4]);
//! assert_eq!(first(&items), Some(&1));
//! assert_eq!(first_n(&items, 3), &[1, 2, 3]);
//! assert_eq!(last(&items), Some(&5));
//! assert_eq!(last_n(&items, 3), &[3, 4, 5]);
//! ```

use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Returns the first element, scanning by ascending index, for which
/// `predicate` holds.
///
/// `None` means no element matched (or the sequence is empty); it is never
/// confused with an element value.
///
/// # Example
/// ```
/// use collection_kit::sequence::find;
/// assert_eq!(find(&[1, 2, 3], |v| *v > 10), None);
/// assert_eq!(find(&[None, Some(0)], |v| v.is_none()), Some(&None));
/// ```
pub fn find<T, P>(sequence: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    sequence.iter().find(|item| predicate(item))
}

/// Keeps, in original order, exactly the elements for which `predicate`
/// holds.
pub fn filter<T, P>(sequence: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    sequence.iter().filter(|item| predicate(item)).cloned().collect()
}

/// The element at index 0, or `None` for an empty sequence.
#[inline]
#[must_use]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// The leading `min(n, len)` elements. `n = 0` gives an empty slice.
///
/// # Example
/// ```
/// use collection_kit::sequence::first_n;
/// let items = [1, 2, 3, 4, 5];
/// assert_eq!(first_n(&items, 100), &items);
/// assert!(first_n(&items, 0).is_empty());
/// ```
#[inline]
#[must_use]
pub fn first_n<T>(sequence: &[T], n: usize) -> &[T] {
    &sequence[..n.min(sequence.len())]
}

/// The final element, or `None` for an empty sequence.
#[inline]
#[must_use]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// The trailing `min(n, len)` elements, in their original order.
///
/// # Example
/// ```
/// use collection_kit::sequence::last_n;
/// let items = ['a', 'b', 'c'];
/// assert_eq!(last_n(&items, 2), &['b', 'c']);
/// assert_eq!(last_n(&items, 9), &items);
/// assert!(last_n(&items, 0).is_empty());
/// ```
#[inline]
#[must_use]
pub fn last_n<T>(sequence: &[T], n: usize) -> &[T] {
    &sequence[sequence.len().saturating_sub(n)..]
}

/// Validates a signed element count for `operation`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `n` is negative. Negative counts are
/// rejected rather than reinterpreted as counting from the other end.
///
/// # Example
/// ```
/// use collection_kit::sequence::count;
/// assert_eq!(count("last", 3), Ok(3));
/// assert!(count("last", -3).is_err());
/// ```
pub fn count(operation: &'static str, n: i64) -> Result<usize> {
    match usize::try_from(n) {
        Ok(n) => Ok(n),
        Err(_) if n < 0 => {
            debug!(operation, n, "negative count rejected");
            Err(Error::invalid_argument(
                operation,
                format!("count must not be negative, got {n}"),
            ))
        }
        // Wider than usize on 32-bit targets; oversized counts clamp.
        Err(_) => Ok(usize::MAX),
    }
}

/// Returns a new sequence sorted ascending by the key `callback` extracts.
///
/// The sort is stable: elements with equal keys keep their input order.
/// `callback` is called at most once per element. The input is untouched.
///
/// Keys must be totally ordered; floating point keys need a newtype whose
/// `Ord` uses `f64::total_cmp`.
///
/// # Example
/// ```
/// use collection_kit::sequence::sort_by;
///
/// let people = [("ann", 31), ("bob", 25), ("cy", 31), ("di", 25)];
/// let by_age = sort_by(&people, |p| p.1);
/// assert_eq!(by_age, vec![("bob", 25), ("di", 25), ("ann", 31), ("cy", 31)]);
/// ```
pub fn sort_by<T, O, F>(sequence: &[T], callback: F) -> Vec<T>
where
    T: Clone,
    O: Ord,
    F: FnMut(&T) -> O,
{
    trace!(len = sequence.len(), "sort_by");
    let mut sorted = sequence.to_vec();
    // `sort_by_cached_key` is stable and evaluates the key at most once per element.
    sorted.sort_by_cached_key(callback);
    sorted
}
