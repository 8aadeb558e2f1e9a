//! Assertion functions for collection outputs.

use crate::{Collection, Key};
use std::fmt::Debug;

/// Assert that a collection's values equal `expected`, in order. Keys are ignored.
///
/// # Panics
///
/// Panics if the lengths or any value differ.
///
/// # Example
///
/// ```
/// use ironcollect::Collection;
/// use ironcollect::testing::assert_collections_equal;
///
/// let evens = Collection::of(1..=6).filter(|v, _| v % 2 == 0);
/// assert_collections_equal(&evens, &[2, 4, 6]);
/// ```
pub fn assert_collections_equal<V: Debug + PartialEq>(actual: &Collection<V>, expected: &[V]) {
    let values: Vec<&V> = actual.iter().map(|(_, v)| v).collect();
    assert_eq!(
        values.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        values.len()
    );

    for (i, (a, e)) in values.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            *a, e,
            "Collection mismatch at position {i}:\n  Expected: {e:?}\n  Actual: {a:?}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that a collection holds the same values as `expected`, ignoring order and
/// keys. Duplicates must appear the same number of times.
///
/// # Panics
///
/// Panics if the values differ after sorting.
///
/// # Example
///
/// ```
/// use ironcollect::Collection;
/// use ironcollect::testing::assert_collections_unordered_equal;
///
/// let reversed = Collection::of([1, 2, 2, 3]).reverse();
/// assert_collections_unordered_equal(&reversed, &[2, 1, 3, 2]);
/// ```
pub fn assert_collections_unordered_equal<V: Debug + Ord>(actual: &Collection<V>, expected: &[V]) {
    let mut a: Vec<&V> = actual.iter().map(|(_, v)| v).collect();
    let mut e: Vec<&V> = expected.iter().collect();
    a.sort();
    e.sort();

    assert_eq!(
        a.len(),
        e.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        e.len(),
        a.len()
    );

    assert!(
        a == e,
        "Collection content mismatch (order ignored):\n  Expected (sorted): {e:?}\n  Actual (sorted): {a:?}"
    );
}

/// Assert that a collection's `(key, value)` pairs equal `expected`, in order.
///
/// # Panics
///
/// Panics if any key or value differs, or the lengths differ.
///
/// # Example
///
/// ```
/// use ironcollect::{Collection, Key};
/// use ironcollect::testing::assert_pairs_equal;
///
/// let c = Collection::from_pairs([("a", 1), ("b", 2)]);
/// assert_pairs_equal(&c, &[(Key::from("a"), 1), (Key::from("b"), 2)]);
/// ```
pub fn assert_pairs_equal<V: Debug + PartialEq>(actual: &Collection<V>, expected: &[(Key, V)]) {
    let pairs = actual.all();
    assert_eq!(
        pairs.len(),
        expected.len(),
        "Collection length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {pairs:?}",
        expected.len(),
        pairs.len()
    );

    for (i, ((ak, av), (ek, ev))) in pairs.iter().zip(expected.iter()).enumerate() {
        assert!(
            ak == ek && av == ev,
            "Collection mismatch at position {i}:\n  Expected: ({ek:?}, {ev:?})\n  Actual: ({ak:?}, {av:?})\n  Full expected: {expected:?}\n  Full actual: {pairs:?}"
        );
    }
}

/// Assert that grouped output has the expected group keys, in order, and that each
/// bucket holds the expected values, in order.
///
/// # Panics
///
/// Panics if a group key, bucket length or bucket value differs.
///
/// # Example
///
/// ```
/// use ironcollect::{Collection, Key};
/// use ironcollect::testing::assert_grouped_equal;
///
/// let parity = Collection::of(1..=5).group_by(|v, _| if v % 2 == 0 { "even" } else { "odd" });
/// assert_grouped_equal(
///     &parity,
///     &[(Key::from("odd"), vec![1, 3, 5]), (Key::from("even"), vec![2, 4])],
/// );
/// ```
pub fn assert_grouped_equal<V: Debug + PartialEq>(
    actual: &Collection<Collection<V>>,
    expected: &[(Key, Vec<V>)],
) {
    let groups = actual.all();
    assert_eq!(
        groups.len(),
        expected.len(),
        "Group count mismatch:\n  Expected: {}\n  Actual: {}\n  Actual groups: {actual:?}",
        expected.len(),
        groups.len()
    );

    for (i, ((ak, bucket), (ek, ev))) in groups.iter().zip(expected.iter()).enumerate() {
        assert_eq!(
            ak, ek,
            "Group key mismatch at position {i}:\n  Expected: {ek:?}\n  Actual: {ak:?}"
        );
        assert_collections_equal(bucket, ev);
    }
}

/// Assert that every element satisfies `predicate`.
///
/// # Panics
///
/// Panics on the first element that fails the predicate.
pub fn assert_all<V: Debug>(collection: &Collection<V>, predicate: impl Fn(&V, &Key) -> bool) {
    for (k, v) in collection {
        assert!(
            predicate(v, k),
            "Predicate failed for element [{k}]:\n  Element: {v:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that at least one element satisfies `predicate`.
///
/// # Panics
///
/// Panics if no element satisfies the predicate.
pub fn assert_any<V: Debug>(collection: &Collection<V>, predicate: impl Fn(&V, &Key) -> bool) {
    assert!(
        collection.contains_where(|v, k| predicate(v, k)),
        "No elements satisfied the predicate:\n  Collection: {collection:?}"
    );
}

/// Assert that no element satisfies `predicate`.
///
/// # Panics
///
/// Panics on the first element that satisfies the predicate.
pub fn assert_none<V: Debug>(collection: &Collection<V>, predicate: impl Fn(&V, &Key) -> bool) {
    for (k, v) in collection {
        assert!(
            !predicate(v, k),
            "Predicate unexpectedly succeeded for element [{k}]:\n  Element: {v:?}\n  Collection: {collection:?}"
        );
    }
}

/// Assert that a collection has the expected number of elements.
///
/// # Panics
///
/// Panics if the size doesn't match.
pub fn assert_collection_size<V: Debug>(collection: &Collection<V>, expected_size: usize) {
    assert_eq!(
        collection.len(),
        expected_size,
        "Collection size mismatch:\n  Expected: {expected_size}\n  Actual: {}\n  Collection: {collection:?}",
        collection.len()
    );
}
