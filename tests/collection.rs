use ironcollect::testing::*;
use ironcollect::{Collection, CollectionError, Key};

#[test]
fn of_round_trips_values_and_keys() {
    let arr = vec![1, 2, 3];
    let c = Collection::of(arr.clone());

    assert_eq!(c.to_vec(), arr);
    assert_pairs_equal(&c, &[(Key::Int(0), 1), (Key::Int(1), 2), (Key::Int(2), 3)]);
    assert_eq!(c.clone().into_values(), arr);
}

#[test]
fn iteration_yields_index_and_value() {
    let c = Collection::of([1, 2, 3, 4, 5, 6, 7]);
    for (index, value) in &c {
        assert_eq!(index.as_int().map(|i| i + 1), Some(i64::from(*value)));
    }
    let mut seen = Vec::new();
    c.each(|v, _| {
        seen.push(*v);
        *v < 3
    });
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn from_pairs_keeps_explicit_keys() {
    let c = Collection::from_pairs([
        (Key::Int(0), "1"),
        (Key::Int(1), "2"),
        (Key::Int(2), "3"),
        (Key::Int(4), "empat"),
    ]);
    assert_eq!(c.get(4), Some(&"empat"));
    assert_eq!(c.get(3), None);

    let mut c = c;
    c.push("lima");
    assert_eq!(c.get(5), Some(&"lima"));
}

#[test]
fn from_pairs_later_duplicate_overwrites_in_place() {
    let c = Collection::from_pairs([("a", 1), ("b", 2), ("a", 3)]);
    assert_pairs_equal(&c, &[(Key::from("a"), 3), (Key::from("b"), 2)]);
}

#[test]
fn manipulate_collection_in_place() -> anyhow::Result<()> {
    let mut c: Collection<i32> = Collection::new();

    c.push_all([1, 2, 3]);
    assert_collections_equal(&c, &[1, 2, 3]);

    assert_eq!(c.pop()?, 3);
    assert_collections_equal(&c, &[1, 2]);

    c.prepend(4);
    assert_pairs_equal(&c, &[(Key::Int(0), 4), (Key::Int(1), 1), (Key::Int(2), 2)]);

    assert_eq!(c.pull(0)?, 4);
    assert_pairs_equal(&c, &[(Key::Int(1), 1), (Key::Int(2), 2)]);

    c.put(1, 5);
    assert_pairs_equal(&c, &[(Key::Int(1), 5), (Key::Int(2), 2)]);
    assert_collections_unordered_equal(&c, &[2, 5]);
    Ok(())
}

#[test]
fn push_continues_after_largest_integer_key() {
    let mut c = Collection::from_pairs([(Key::Int(7), 'a'), (Key::from("x"), 'b')]);
    c.push('c').push('d');
    assert_eq!(
        c.keys().to_vec(),
        vec![Key::Int(7), Key::from("x"), Key::Int(8), Key::Int(9)]
    );
}

#[test]
fn push_reuses_lowest_free_key_once_max_is_taken() {
    let mut c = Collection::from_pairs([(Key::Int(i64::MAX), 'a'), (Key::Int(1), 'b')]);
    c.push('c').push('d');
    assert_eq!(
        c.keys().to_vec(),
        vec![Key::Int(i64::MAX), Key::Int(1), Key::Int(0), Key::Int(2)]
    );

    let mut near_max = Collection::from_pairs([(Key::Int(i64::MAX - 1), 0)]);
    near_max.push_all([1, 2, 3]);
    assert_pairs_equal(
        &near_max,
        &[
            (Key::Int(i64::MAX - 1), 0),
            (Key::Int(i64::MAX), 1),
            (Key::Int(0), 2),
            (Key::Int(1), 3),
        ],
    );
}

#[test]
fn pop_takes_the_last_pair_by_position() -> anyhow::Result<()> {
    let mut c = Collection::from_pairs([(Key::Int(9), "high")]);
    c.put(2, "low");
    assert_eq!(c.pop()?, "low");
    assert_eq!(c.pop()?, "high");
    Ok(())
}

#[test]
fn prepend_reindexes_only_integer_keys() {
    let mut c = Collection::from_pairs([(Key::Int(5), 1), (Key::from("name"), 2), (Key::Int(9), 3)]);
    c.prepend(0);
    assert_eq!(
        c.keys().to_vec(),
        vec![Key::Int(0), Key::Int(1), Key::from("name"), Key::Int(2)]
    );
}

#[test]
fn prepend_with_key_replaces_existing_pair() {
    let mut c = Collection::from_pairs([("a", 1), ("b", 2)]);
    c.prepend_with_key("b", 20);
    assert_pairs_equal(&c, &[(Key::from("b"), 20), (Key::from("a"), 1)]);
}

#[test]
fn pop_and_pull_report_errors() {
    let mut empty: Collection<u8> = Collection::new();
    assert!(matches!(
        empty.pop(),
        Err(CollectionError::EmptyCollection { operation: "pop" })
    ));

    let mut c = Collection::of([1, 2]);
    match c.pull("missing") {
        Err(CollectionError::KeyNotFound { key }) => assert_eq!(key, Key::from("missing")),
        other => panic!("expected KeyNotFound, got {other:?}"),
    }
    assert_collection_size(&c, 2);
}

#[test]
fn forget_removes_without_reindexing() {
    let mut c = Collection::of(['a', 'b', 'c']);
    assert!(c.forget(1));
    assert!(!c.forget(1));
    assert_eq!(c.keys().to_vec(), vec![Key::Int(0), Key::Int(2)]);
}

#[test]
fn existence_checks() {
    let empty: Collection<i32> = Collection::of([]);
    assert!(empty.is_empty());

    let c = Collection::of([1, 2, 3]);
    assert!(c.is_not_empty());
    assert!(c.contains(&1));
    assert!(c.contains_where(|v, _| *v == 3));
    assert!(c.has(2));
    assert!(!c.has(3));

    assert!(Collection::of([1]).contains_one_item());
    assert!(!c.contains_one_item());
}

#[test]
fn extend_and_from_iterator() {
    let mut c: Collection<i32> = (1..=3).collect();
    c.extend([4, 5]);
    assert_collections_equal(&c, &[1, 2, 3, 4, 5]);
    assert_eq!(c.keys().to_vec().last(), Some(&Key::Int(4)));
}

#[test]
fn error_messages_name_the_failure() {
    let err = CollectionError::InvalidShape {
        key: Key::Int(1),
        expected: 2,
        found: 1,
    };
    assert_eq!(
        err.to_string(),
        "element [1] has 1 member(s), but 2 are required"
    );
    let err = CollectionError::LengthMismatch {
        expected: 2,
        found: 3,
    };
    assert_eq!(
        err.to_string(),
        "length mismatch: expected 2 element(s), found 3"
    );
}
