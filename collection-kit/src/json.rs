//! # Dynamic Values
//!
//! The same contract over [`serde_json::Value`], for data whose shape is only
//! known at run time.
//!
//! [`collection`] is the dispatch rule for dynamic values: an array is a
//! sequence, an object is a mapping, and anything else is rejected with
//! [`Error::InvalidArgument`]. The dual-mode functions here go through it and
//! then through the generic [`ops`](crate::ops), so a value is classified the
//! same way by every operation.
//!
//! Sequence-only functions (`find`, `filter`, `first`, `last`, `sort_by`,
//! `flatten`) require an array; mapping-only functions (`keys`, `values`)
//! require an object.
//!
//! Objects enumerate in insertion order (`serde_json` is built with
//! `preserve_order`).
//!
//! ## Example
//!
//! ```
//! use collection_kit::json;
//! use serde_json::json;
//!
//! let object = json!({"a": 1, "b": 2, "c": 3});
//! assert_eq!(json::keys(&object)?, vec!["a", "b", "c"]);
//! assert_eq!(json::size(&object)?, 3);
//!
//! let doubled = json::map(&json!([1, 2, 3]), |v, _, _| v.as_i64().unwrap_or(0) * 2)?;
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! assert!(json::size(&json!("text")).is_err());
//! # Ok::<(), collection_kit::Error>(())
//! ```

use std::cmp::Ordering;

use serde_json::{Number, Value};
use tracing::debug;

use crate::collection::{Collection, Key, MappingSource};
use crate::error::{Error, Result};
use crate::nested::{self, FlattenMode, Nested};
use crate::{ops, sequence};

/// Views `value` as a collection: arrays are sequences, objects are mappings.
///
/// # Errors
///
/// [`Error::InvalidArgument`] for null, booleans, numbers and strings.
pub fn collection(value: &Value) -> Result<Collection<'_, String, Value>> {
    dispatch("collection", value)
}

fn classify(value: &Value) -> Option<Collection<'_, String, Value>> {
    match value {
        Value::Array(items) => Some(Collection::Sequence(items.as_slice())),
        Value::Object(map) => Some(Collection::mapping(map)),
        _ => None,
    }
}

fn dispatch<'a>(
    operation: &'static str,
    value: &'a Value,
) -> Result<Collection<'a, String, Value>> {
    classify(value).ok_or_else(|| wrong_shape(operation, "an array or object", value))
}

fn array<'a>(operation: &'static str, value: &'a Value) -> Result<&'a [Value]> {
    classify(value)
        .and_then(|collection| collection.as_sequence())
        .ok_or_else(|| wrong_shape(operation, "an array", value))
}

fn object<'a>(
    operation: &'static str,
    value: &'a Value,
) -> Result<&'a dyn MappingSource<Key = String, Value = Value>> {
    classify(value)
        .and_then(|collection| collection.as_mapping())
        .ok_or_else(|| wrong_shape(operation, "an object", value))
}

fn wrong_shape(operation: &'static str, expected: &str, found: &Value) -> Error {
    let found = kind_of(found);
    debug!(operation, expected, found, "value rejected by dispatch");
    Error::invalid_argument(operation, format!("expected {expected}, got {found}"))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Calls `callback` for every element of an array or object and returns
/// `value` itself.
pub fn for_each<'a, F>(value: &'a Value, callback: F) -> Result<&'a Value>
where
    F: FnMut(&'a Value, Key<'a, String>, Collection<'a, String, Value>),
{
    ops::for_each(dispatch("for_each", value)?, callback);
    Ok(value)
}

/// Transforms every element of an array, or every value of an object.
pub fn map<'a, R, F>(value: &'a Value, callback: F) -> Result<Vec<R>>
where
    F: FnMut(&'a Value, Key<'a, String>, Collection<'a, String, Value>) -> R,
{
    Ok(ops::map(dispatch("map", value)?, callback))
}

/// [`ops::reduce`] over an array or object.
///
/// # Errors
///
/// [`Error::InvalidArgument`] for scalars and [`Error::EmptyReduce`] for an
/// empty array or object without `initial`.
pub fn reduce<'a, F>(value: &'a Value, callback: F, initial: Option<Value>) -> Result<Value>
where
    F: FnMut(Value, &'a Value, Key<'a, String>, Collection<'a, String, Value>) -> Value,
{
    ops::reduce(dispatch("reduce", value)?, callback, initial)
}

/// Element count of an array, or key count of an object.
pub fn size(value: &Value) -> Result<usize> {
    dispatch("size", value).map(ops::size)
}

pub fn find<P>(value: &Value, predicate: P) -> Result<Option<&Value>>
where
    P: FnMut(&Value) -> bool,
{
    Ok(sequence::find(array("find", value)?, predicate))
}

pub fn filter<P>(value: &Value, predicate: P) -> Result<Vec<Value>>
where
    P: FnMut(&Value) -> bool,
{
    Ok(sequence::filter(array("filter", value)?, predicate))
}

/// The first element of an array; `Ok(None)` when it is empty.
///
/// A stored `null` comes back as `Some(&Value::Null)`, never as `None`.
pub fn first(value: &Value) -> Result<Option<&Value>> {
    Ok(sequence::first(array("first", value)?))
}

/// The leading `min(n, len)` elements of an array.
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `value` is not an array or `n` is
/// negative.
pub fn first_n(value: &Value, n: i64) -> Result<&[Value]> {
    let items = array("first", value)?;
    Ok(sequence::first_n(items, sequence::count("first", n)?))
}

/// The last element of an array; `Ok(None)` when it is empty.
pub fn last(value: &Value) -> Result<Option<&Value>> {
    Ok(sequence::last(array("last", value)?))
}

/// The trailing `min(n, len)` elements of an array, in original order.
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `value` is not an array or `n` is
/// negative.
pub fn last_n(value: &Value, n: i64) -> Result<&[Value]> {
    let items = array("last", value)?;
    Ok(sequence::last_n(items, sequence::count("last", n)?))
}

pub fn keys(value: &Value) -> Result<Vec<&String>> {
    Ok(crate::mapping::keys(object("keys", value)?))
}

pub fn values(value: &Value) -> Result<Vec<&Value>> {
    Ok(crate::mapping::values(object("values", value)?))
}

/// A sort key extracted from a dynamic value.
#[derive(Debug)]
enum SortKey {
    Number(Number),
    Text(String),
}

impl SortKey {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Number(n) => Ok(SortKey::Number(n)),
            Value::String(s) => Ok(SortKey::Text(s)),
            other => Err(Error::invalid_argument(
                "sort_by",
                format!("sort keys must be numbers or strings, got {}", kind_of(&other)),
            )),
        }
    }
}

/// The exact value of an integer number. Every `i64` and `u64` fits.
fn as_integer(n: &Number) -> Option<i128> {
    n.as_i64()
        .map(i128::from)
        .or_else(|| n.as_u64().map(i128::from))
}

/// Numeric order: integers compare exactly, anything involving a float
/// compares as `f64`, where `-0.0` equals `0`.
fn compare_numbers(a: &Number, b: &Number) -> Ordering {
    if let (Some(a), Some(b)) = (as_integer(a), as_integer(b)) {
        return a.cmp(&b);
    }
    // Numbers are finite without `arbitrary_precision`, so `partial_cmp` is total here.
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => compare_numbers(a, b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

/// Sorts an array ascending by the key `callback` returns for each element.
///
/// Keys must be all numbers (compared numerically) or all strings (compared
/// lexicographically). Integer keys compare exactly, even past 2^53. The sort is stable and `callback` runs once per
/// element.
///
/// # Errors
///
/// [`Error::InvalidArgument`] when `value` is not an array, a key is neither
/// a number nor a string, or numbers and strings are mixed.
///
/// # Example
/// ```
/// use collection_kit::json;
/// use serde_json::json;
///
/// let rows = json!([{"k": 1, "v": "a"}, {"k": 0, "v": "z"}, {"k": 1, "v": "b"}]);
/// let sorted = json::sort_by(&rows, |row| row["k"].clone())?;
/// let order: Vec<_> = sorted.iter().map(|row| row["v"].as_str().unwrap()).collect();
/// assert_eq!(order, vec!["z", "a", "b"]);
/// # Ok::<(), collection_kit::Error>(())
/// ```
pub fn sort_by<F>(value: &Value, mut callback: F) -> Result<Vec<Value>>
where
    F: FnMut(&Value) -> Value,
{
    let items = array("sort_by", value)?;
    let mut keyed = items
        .iter()
        .map(|item| SortKey::from_value(callback(item)).map(|key| (key, item)))
        .collect::<Result<Vec<_>>>()?;

    let numbers = keyed
        .iter()
        .filter(|(key, _)| matches!(key, SortKey::Number(_)))
        .count();
    if numbers != 0 && numbers != keyed.len() {
        debug!(numbers, total = keyed.len(), "sort_by rejected mixed keys");
        return Err(Error::invalid_argument("sort_by", "sort keys mix numbers and strings"));
    }

    // `sort_by` on a Vec is stable.
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(keyed.into_iter().map(|(_, item)| item.clone()).collect())
}

/// Flattens an array one level (`shallow = true`) or completely.
///
/// # Example
/// ```
/// use collection_kit::json;
/// use serde_json::json;
///
/// let input = json!([1, [2, [3, [4]], 5]]);
/// assert_eq!(json::flatten(&input, false)?, vec![json!(1), json!(2), json!(3), json!(4), json!(5)]);
/// assert_eq!(json::flatten(&input, true)?, vec![json!(1), json!(2), json!([3, [4]]), json!(5)]);
/// # Ok::<(), collection_kit::Error>(())
/// ```
pub fn flatten(value: &Value, shallow: bool) -> Result<Vec<Value>> {
    let items: Vec<Nested<Value>> = array("flatten", value)?.iter().map(to_nested).collect();
    Ok(nested::flatten_with(&items, FlattenMode::from(shallow))
        .into_iter()
        .map(from_nested)
        .collect())
}

fn to_nested(value: &Value) -> Nested<Value> {
    match classify(value).and_then(|collection| collection.as_sequence()) {
        Some(items) => Nested::List(items.iter().map(to_nested).collect()),
        None => Nested::Item(value.clone()),
    }
}

fn from_nested(element: Nested<Value>) -> Value {
    match element {
        Nested::Item(value) => value,
        Nested::List(children) => Value::Array(children.into_iter().map(from_nested).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dispatch_rule() {
        assert!(collection(&json!([1, 2])).unwrap().is_sequence());
        assert!(collection(&json!({"a": 1})).unwrap().is_mapping());

        for scalar in [json!(null), json!(true), json!(3), json!("s")] {
            let err = collection(&scalar).unwrap_err();
            assert!(err.is_invalid_argument(), "{scalar} should be rejected");
        }
    }

    #[test]
    fn test_error_names_operation_and_shape() {
        let err = size(&json!(42)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "size: invalid argument: expected an array or object, got a number"
        );

        let err = keys(&json!([1])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "keys: invalid argument: expected an object, got an array"
        );
    }

    #[test]
    fn test_every_operation_shares_one_classification() {
        let array = json!([1, 2]);
        let object = json!({"a": 1});
        let scalar = json!("s");

        assert!(find(&array, |_| true).is_ok());
        assert!(filter(&array, |_| true).is_ok());
        assert!(first(&array).is_ok());
        assert!(last(&array).is_ok());
        assert!(sort_by(&array, |v| v.clone()).is_ok());
        assert!(flatten(&array, false).is_ok());
        assert!(keys(&object).is_ok());
        assert!(values(&object).is_ok());

        for wrong in [&object, &scalar] {
            assert!(find(wrong, |_| true).unwrap_err().is_invalid_argument());
            assert!(filter(wrong, |_| true).unwrap_err().is_invalid_argument());
            assert!(first(wrong).unwrap_err().is_invalid_argument());
            assert!(last_n(wrong, 1).unwrap_err().is_invalid_argument());
            assert!(flatten(wrong, true).unwrap_err().is_invalid_argument());
        }
        for wrong in [&array, &scalar] {
            assert!(keys(wrong).unwrap_err().is_invalid_argument());
            assert!(values(wrong).unwrap_err().is_invalid_argument());
        }
        assert_eq!(
            first(&object).unwrap_err().to_string(),
            "first: invalid argument: expected an array, got an object"
        );
    }

    #[test]
    fn test_for_each_returns_same_value() {
        let value = json!({"a": 1, "b": 2});
        let mut seen = Vec::new();
        let returned = for_each(&value, |v, k, _| seen.push(format!("{k}={v}"))).unwrap();
        assert!(std::ptr::eq(returned, &value));
        assert_eq!(seen, vec!["a=1", "b=2"]);
    }

    #[test]
    fn test_map_over_object_yields_values() {
        let value = json!({"x": 1, "y": 2});
        let out = map(&value, |v, _, _| v.clone()).unwrap();
        assert_eq!(out, vec![json!(1), json!(2)]);
        assert_eq!(out.len(), size(&value).unwrap());
    }

    #[test]
    fn test_reduce() {
        fn sum(
            acc: Value,
            v: &Value,
            _: Key<'_, String>,
            _: Collection<'_, String, Value>,
        ) -> Value {
            json!(acc.as_i64().unwrap() + v.as_i64().unwrap())
        }
        let items = json!([1, 2, 3, 4, 5]);
        assert_eq!(reduce(&items, sum, Some(json!(0))).unwrap(), json!(15));
        assert_eq!(reduce(&items, sum, None).unwrap(), json!(15));

        let empty = json!([]);
        assert_eq!(reduce(&empty, sum, None), Err(Error::EmptyReduce));
        assert_eq!(reduce(&empty, sum, Some(json!(0))).unwrap(), json!(0));

        let object = json!({"a": 1, "b": 2, "c": 3});
        assert_eq!(reduce(&object, sum, None).unwrap(), json!(6));
    }

    #[test]
    fn test_reduce_null_initial_is_provided() {
        let items = json!([1]);
        let result = reduce(&items, |acc, _, _, _| acc, Some(Value::Null)).unwrap();
        assert_eq!(result, Value::Null);
    }

    #[test]
    fn test_find_and_filter() {
        let items = json!([1, 2, 3, 4, 5]);
        let gt3 = |v: &Value| v.as_i64().is_some_and(|n| n > 3);
        assert_eq!(find(&items, gt3).unwrap(), Some(&json!(4)));
        assert_eq!(find(&json!([1, 2, 3]), gt3).unwrap(), None);

        let even = filter(&items, |v| v.as_i64().is_some_and(|n| n % 2 == 0)).unwrap();
        assert_eq!(even, vec![json!(2), json!(4)]);

        assert!(find(&json!({"a": 1}), gt3).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_first_and_last() {
        let items = json!([1, 2, 3, 4, 5]);
        assert_eq!(first(&items).unwrap(), Some(&json!(1)));
        assert_eq!(last(&items).unwrap(), Some(&json!(5)));
        assert_eq!(first_n(&items, 3).unwrap(), &[json!(1), json!(2), json!(3)]);
        assert_eq!(first_n(&items, 100).unwrap().len(), 5);
        assert_eq!(last_n(&items, 3).unwrap(), &[json!(3), json!(4), json!(5)]);
        assert!(first_n(&items, 0).unwrap().is_empty());

        assert_eq!(first(&json!([])).unwrap(), None);
        assert_eq!(first(&json!([null])).unwrap(), Some(&Value::Null));
    }

    #[test]
    fn test_negative_counts_rejected() {
        let items = json!([1, 2, 3]);
        assert!(first_n(&items, -1).unwrap_err().is_invalid_argument());
        assert!(last_n(&items, -2).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_keys_and_values_in_insertion_order() {
        let object = json!({"c": 3, "a": 1, "b": 2});
        assert_eq!(keys(&object).unwrap(), vec!["c", "a", "b"]);
        assert_eq!(values(&object).unwrap(), vec![&json!(3), &json!(1), &json!(2)]);
    }

    #[test]
    fn test_sort_by_numbers_and_strings() {
        let numbers = json!([3, 1.5, -2, 10]);
        let sorted = sort_by(&numbers, |v| v.clone()).unwrap();
        assert_eq!(sorted, vec![json!(-2), json!(1.5), json!(3), json!(10)]);

        let words = json!(["pear", "Apple", "fig"]);
        let sorted = sort_by(&words, |v| v.clone()).unwrap();
        assert_eq!(sorted, vec![json!("Apple"), json!("fig"), json!("pear")]);
    }

    #[test]
    fn test_sort_by_large_integers_compare_exactly() {
        let big = json!([9007199254740993u64, 9007199254740992u64]);
        let sorted = sort_by(&big, |v| v.clone()).unwrap();
        assert_eq!(
            sorted,
            vec![json!(9007199254740992u64), json!(9007199254740993u64)]
        );

        let wide = json!([u64::MAX, -1, i64::MIN]);
        let sorted = sort_by(&wide, |v| v.clone()).unwrap();
        assert_eq!(sorted, vec![json!(i64::MIN), json!(-1), json!(u64::MAX)]);
    }

    #[test]
    fn test_sort_by_signed_zero_is_a_tie() {
        let zeros = json!([0, -0.0]);
        let sorted = sort_by(&zeros, |v| v.clone()).unwrap();
        assert!(sorted[0].is_u64());
        assert!(sorted[1].is_f64());

        let reversed = json!([-0.0, 0]);
        let sorted = sort_by(&reversed, |v| v.clone()).unwrap();
        assert!(sorted[0].is_f64());
        assert!(sorted[1].is_u64());
    }

    #[test]
    fn test_sort_by_mixes_integers_and_floats() {
        let numbers = json!([2, 1.5, -3, 0.25]);
        let sorted = sort_by(&numbers, |v| v.clone()).unwrap();
        assert_eq!(sorted, vec![json!(-3), json!(0.25), json!(1.5), json!(2)]);
    }

    #[test]
    fn test_sort_by_rejects_unorderable_keys() {
        let mixed = json!([1, "a"]);
        assert!(sort_by(&mixed, |v| v.clone()).unwrap_err().is_invalid_argument());

        let nulls = json!([null, null]);
        assert!(sort_by(&nulls, |v| v.clone()).unwrap_err().is_invalid_argument());

        assert_eq!(sort_by(&json!([]), |v| v.clone()).unwrap(), Vec::<Value>::new());
    }

    #[test]
    fn test_flatten() {
        let input = json!([1, [2, [3, [4]], 5]]);
        let deep = flatten(&input, false).unwrap();
        assert_eq!(Value::Array(deep.clone()), json!([1, 2, 3, 4, 5]));
        assert_eq!(
            Value::Array(flatten(&Value::Array(deep), false).unwrap()),
            json!([1, 2, 3, 4, 5])
        );

        let shallow = flatten(&input, true).unwrap();
        assert_eq!(Value::Array(shallow), json!([1, 2, [3, [4]], 5]));

        let with_objects = json!([{"a": [1]}, [[{"b": 2}]]]);
        assert_eq!(
            Value::Array(flatten(&with_objects, false).unwrap()),
            json!([{"a": [1]}, {"b": 2}])
        );

        assert!(flatten(&json!({"a": 1}), false).is_err());
    }
}
