use ironcollect::testing::*;
use ironcollect::{Collection, CollectionError, Key};

#[test]
fn zip_pairs_by_position() {
    let a = Collection::of([1, 2, 3]);
    let b = Collection::of([4, 5, 6]);
    let zipped = a.zip(b);

    assert_collections_equal(
        &zipped,
        &[
            Collection::of([1, 4]),
            Collection::of([2, 5]),
            Collection::of([3, 6]),
        ],
    );
}

#[test]
fn zip_truncates_to_shorter_side() {
    let a = Collection::of(1..=5);
    assert_eq!(a.zip(vec![10, 20]).len(), 2);
    assert_eq!(a.zip(&Collection::of(1..=9)).len(), 5);
    assert!(a.zip(Vec::new()).is_empty());
}

#[test]
fn concat_appends_and_reindexes() {
    let a = Collection::from_pairs([("x", 1), ("y", 2), ("z", 3)]);
    let b = Collection::of([4, 5, 6]);
    let joined = a.concat(&b);

    assert_eq!(joined.len(), a.len() + b.len());
    assert_pairs_equal(
        &joined,
        &[
            (Key::Int(0), 1),
            (Key::Int(1), 2),
            (Key::Int(2), 3),
            (Key::Int(3), 4),
            (Key::Int(4), 5),
            (Key::Int(5), 6),
        ],
    );
}

#[test]
fn combine_uses_values_as_keys() -> anyhow::Result<()> {
    let keys = Collection::of(["name", "country"]);
    let values = Collection::of(["Rizki", "Indonesia"]);
    let person = keys.combine(values)?;

    assert_pairs_equal(
        &person,
        &[
            (Key::from("name"), "Rizki"),
            (Key::from("country"), "Indonesia"),
        ],
    );
    Ok(())
}

#[test]
fn combine_with_integer_values_as_keys() -> anyhow::Result<()> {
    let ids = Collection::of([10u32, 20]);
    let named = ids.combine(["ten", "twenty"])?;
    assert_eq!(named.get(20), Some(&"twenty"));
    Ok(())
}

#[test]
fn wide_integers_become_keys_only_when_they_fit() -> anyhow::Result<()> {
    let ids: Vec<Key> = [3u64, 5]
        .into_iter()
        .map(Key::try_from)
        .collect::<Result<_, _>>()?;
    let named = Collection::of(ids).combine(["three", "five"])?;
    assert_eq!(named.get(5), Some(&"five"));

    assert!(matches!(
        Key::try_from(u64::MAX),
        Err(CollectionError::InvalidKey { .. })
    ));
    assert!(Key::try_from(usize::MAX).is_err());
    assert_eq!(Key::try_from(-4isize)?, Key::Int(-4));
    Ok(())
}

#[test]
fn combine_rejects_length_mismatch() {
    let keys = Collection::of(["a", "b", "c"]);
    let err = keys.combine([1, 2]).unwrap_err();
    assert!(matches!(
        err,
        CollectionError::LengthMismatch {
            expected: 3,
            found: 2
        }
    ));
}

#[test]
fn merge_overwrites_strings_and_appends_integers() {
    let base = Collection::from_pairs([(Key::from("a"), 1), (Key::Int(0), 2)]);
    let other = Collection::from_pairs([(Key::from("a"), 10), (Key::Int(0), 20), (Key::from("b"), 30)]);
    let merged = base.merge(&other);

    assert_pairs_equal(
        &merged,
        &[
            (Key::from("a"), 10),
            (Key::Int(0), 2),
            (Key::Int(1), 20),
            (Key::from("b"), 30),
        ],
    );
}
