//!
//! Utility functions
//!

use std::collections::BTreeMap;

/// Performs a full outer join on two `BTreeMap` instances.
///
/// # Arguments
///
/// * `map1` - The first `BTreeMap` containing keys of type `K` and values of
///   type `V1`.
/// * `map2` - The second `BTreeMap` containing keys of type `K` and values of
///   type `V2`. This map is consumed during the join.
///
/// # Returns
///
/// An iterator over tuples `(K, Option<V1>, Option<V2>)`, one per key present
/// in either map, in ascending key order. A value is `None` if its map does
/// not contain the key.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
///
/// use benchmark_comparator::util::btreemap::outer_join;
///
/// let first: BTreeMap<_, _> = [(1, "a"), (2, "b")].into();
/// let second: BTreeMap<_, _> = [(2, "x"), (3, "y")].into();
/// let expected = vec![
///     (1, Some("a"), None),
///     (2, Some("b"), Some("x")),
///     (3, None, Some("y")),
/// ];
/// assert_eq!(outer_join(first, second).collect::<Vec<_>>(), expected);
/// ```
pub fn outer_join<K, V1, V2>(
    map1: BTreeMap<K, V1>,
    mut map2: BTreeMap<K, V2>,
) -> impl Iterator<Item = (K, Option<V1>, Option<V2>)>
where
    K: Ord,
{
    let mut joined: Vec<(K, Option<V1>, Option<V2>)> = map1
        .into_iter()
        .map(|(key, value1)| {
            let value2 = map2.remove(&key);
            (key, Some(value1), value2)
        })
        .collect();
    joined.extend(
        map2.into_iter()
            .map(|(key, value2)| (key, None, Some(value2))),
    );
    joined.sort_by(|a, b| a.0.cmp(&b.0));
    joined.into_iter()
}
