use ironcollect::testing::*;
use ironcollect::{Collection, CollectionError, Key};

fn scores() -> Collection<i32> {
    Collection::from_pairs([("Rizki", 100), ("Adi", 95), ("Asep", 90), ("Joko", 85)])
}

#[test]
fn filter_keeps_matching_pairs_with_keys() {
    let passed = scores().filter(|v, _| *v >= 90);
    assert_pairs_equal(
        &passed,
        &[
            (Key::from("Rizki"), 100),
            (Key::from("Adi"), 95),
            (Key::from("Asep"), 90),
        ],
    );
}

#[test]
fn filter_on_sequential_collection_leaves_gaps() {
    let evens = Collection::of(1..=10).filter(|v, _| v % 2 == 0);
    assert_collections_equal(&evens, &[2, 4, 6, 8, 10]);
    assert_eq!(
        evens.keys().to_vec(),
        vec![Key::Int(1), Key::Int(3), Key::Int(5), Key::Int(7), Key::Int(9)]
    );
}

#[test]
fn filter_predicate_receives_keys() {
    let short_names = scores().filter(|_, k| k.as_str().is_some_and(|s| s.len() <= 3));
    assert_pairs_equal(&short_names, &[(Key::from("Adi"), 95)]);
}

#[test]
fn reject_is_the_complement_of_filter() {
    let failed = scores().reject(|v, _| *v >= 90);
    assert_pairs_equal(&failed, &[(Key::from("Joko"), 85)]);
}

#[test]
fn partition_splits_every_element_exactly_once() {
    let all = scores();
    let (passed, failed) = all.partition(|v, _| *v >= 90);

    assert_pairs_equal(
        &passed,
        &[
            (Key::from("Rizki"), 100),
            (Key::from("Adi"), 95),
            (Key::from("Asep"), 90),
        ],
    );
    assert_pairs_equal(&failed, &[(Key::from("Joko"), 85)]);
    assert_eq!(passed.len() + failed.len(), all.len());
    assert_all(&all, |v, k| passed.get(k) == Some(v) || failed.get(k) == Some(v));
}

#[test]
fn contains_by_value_or_predicate() {
    let names = Collection::of(["Rizki", "Adi", "Nugroho"]);
    assert!(names.contains(&"Rizki"));
    assert!(!names.contains(&"Budi"));
    assert!(names.contains_where(|v, _| *v == "Adi"));
    assert!(!names.contains_where(|v, _| v.is_empty()));
}

#[test]
fn search_returns_the_matching_key() {
    assert_eq!(scores().search(|v, _| *v < 95), Some(Key::from("Asep")));
    assert_eq!(scores().search(|v, _| *v > 100), None);
}

#[test]
fn first_and_last() -> anyhow::Result<()> {
    let c = Collection::of([1, 2, 3, 4, 5]);
    assert_eq!(*c.first()?, 1);
    assert_eq!(*c.first_where(|v, _| *v > 3)?, 4);
    assert_eq!(*c.last()?, 5);
    assert_eq!(*c.last_where(|v, _| *v < 3)?, 2);
    Ok(())
}

#[test]
fn first_and_last_fail_or_fall_back_when_nothing_matches() {
    let c = Collection::of([1, 2, 3]);
    assert!(matches!(
        c.first_where(|v, _| *v > 10),
        Err(CollectionError::NotFound { .. })
    ));
    assert!(matches!(
        c.last_where(|v, _| *v > 10),
        Err(CollectionError::NotFound { .. })
    ));
    assert_eq!(c.first_where_or(|v, _| *v > 10, -1), -1);
    assert_eq!(c.last_where_or(|v, _| *v < 3, -1), 2);

    let empty: Collection<i32> = Collection::new();
    assert!(empty.first().is_err());
    assert!(empty.last().is_err());
}

#[test]
fn take_until_and_take_while_stop_at_first_change() {
    let c = Collection::of(1..=9);
    assert_collections_equal(&c.take_until(|v, _| *v == 4), &[1, 2, 3]);
    assert_collections_equal(&c.take_while(|v, _| *v <= 6), &[1, 2, 3, 4, 5, 6]);

    let zigzag = Collection::of([1, 2, 9, 1, 2]);
    assert_collections_equal(&zigzag.take_while(|v, _| *v < 5), &[1, 2]);
}

#[test]
fn skip_until_and_skip_while_keep_the_rest() {
    let c = Collection::of(1..=9);
    let from_four = c.skip_until(|v, _| *v == 4);
    assert_collections_equal(&from_four, &[4, 5, 6, 7, 8, 9]);
    assert_eq!(from_four.first_where(|_, k| *k == Key::Int(3)).ok(), Some(&4));

    assert_collections_equal(&c.skip_while(|v, _| *v <= 6), &[7, 8, 9]);
    assert!(c.skip_while(|_, _| true).is_empty());
}
