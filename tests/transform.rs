use ironcollect::testing::*;
use ironcollect::{Collection, CollectionError, Key};

#[derive(Clone, Debug, PartialEq)]
struct Person {
    name: String,
}

impl Person {
    fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[test]
fn map_preserves_keys_and_length() {
    let c = Collection::from_pairs([(Key::Int(3), 1), (Key::from("x"), 2), (Key::Int(0), 3)]);
    let doubled = c.map(|v| v * 2);

    assert_eq!(doubled.len(), c.len());
    assert_eq!(doubled.keys(), c.keys());
    assert_collections_equal(&doubled, &[2, 4, 6]);
}

#[test]
fn map_with_key_sees_each_key() {
    let c = Collection::from_pairs([("a", 1), ("b", 2)]);
    let labelled = c.map_with_key(|v, k| format!("{k}={v}"));
    assert_collections_equal(&labelled, &["a=1".to_string(), "b=2".to_string()]);
}

#[test]
fn map_into_builds_values_with_a_factory() {
    let names = Collection::of(["Rizki", "Adi"]);
    let people = names.map_into(Person::new);
    assert_eq!(people.into_values(), vec![Person::new("Rizki"), Person::new("Adi")]);
}

#[test]
fn map_spread_binds_members_positionally() -> anyhow::Result<()> {
    let c = Collection::of([vec!["Rizki", "Adi"], vec!["Asep", "AC"]]);
    let people = c.map_spread(|[first, last]: [&str; 2]| Person::new(format!("{first} {last}")))?;
    assert_collections_equal(&people, &[Person::new("Rizki Adi"), Person::new("Asep AC")]);
    Ok(())
}

#[test]
fn map_spread_ignores_extra_members() -> anyhow::Result<()> {
    let c = Collection::of([[1, 2, 3], [4, 5, 6]]);
    let sums = c.map_spread(|[a, b]: [i32; 2]| a + b)?;
    assert_collections_equal(&sums, &[3, 9]);
    Ok(())
}

#[test]
fn map_spread_rejects_short_elements() {
    let c = Collection::of([vec![1, 2], vec![3]]);
    let err = c.map_spread(|[a, b]: [i32; 2]| a * b).unwrap_err();
    match err {
        CollectionError::InvalidShape {
            key,
            expected,
            found,
        } => {
            assert_eq!(key, Key::Int(1));
            assert_eq!(expected, 2);
            assert_eq!(found, 1);
        }
        other => panic!("expected InvalidShape, got {other:?}"),
    }
}

#[derive(Clone, Debug)]
struct Staff {
    name: &'static str,
    dept: &'static str,
}

#[test]
fn map_to_groups_collects_values_per_key() {
    let staff = Collection::of([
        Staff { name: "Rizki", dept: "IT" },
        Staff { name: "Adi", dept: "IT" },
        Staff { name: "Nug", dept: "HR" },
    ]);
    let result = staff.map_to_groups(|s| (s.dept, s.name));

    assert_eq!(
        result,
        Collection::from_pairs([
            ("IT", Collection::of(["Rizki", "Adi"])),
            ("HR", Collection::of(["Nug"])),
        ])
    );
}

#[test]
fn collapse_flattens_one_level() {
    let c = Collection::of([vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    let flat = c.collapse();
    assert_collections_equal(&flat, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(flat.keys().to_vec().last(), Some(&Key::Int(8)));

    let nested = Collection::of([vec![vec![1], vec![2]], vec![vec![3]]]);
    assert_collections_equal(&nested.collapse(), &[vec![1], vec![2], vec![3]]);
}

#[test]
fn collapse_accepts_collections() {
    let c = Collection::of([
        Collection::from_pairs([("a", 1)]),
        Collection::from_pairs([("b", 2), ("c", 3)]),
    ]);
    let flat = c.collapse();
    assert_pairs_equal(&flat, &[(Key::Int(0), 1), (Key::Int(1), 2), (Key::Int(2), 3)]);
}

#[derive(Clone, Debug)]
struct Profile {
    name: &'static str,
    hobbies: Vec<&'static str>,
}

#[test]
fn flat_map_concatenates_results() {
    let profiles = Collection::of([
        Profile {
            name: "Rizki",
            hobbies: vec!["Coding", "Writing"],
        },
        Profile {
            name: "Adi",
            hobbies: vec!["Riding", "Hiking"],
        },
    ]);
    let hobbies = profiles.flat_map(|p| p.hobbies.clone());
    assert_collections_equal(&hobbies, &["Coding", "Writing", "Riding", "Hiking"]);

    let tagged = profiles.flat_map(|p| [p.name, "!"]);
    assert_collections_equal(&tagged, &["Rizki", "!", "Adi", "!"]);
}

#[test]
fn values_reindexes_after_filter() {
    let c = Collection::of(1..=6).filter(|v, _| v % 3 == 0);
    assert_eq!(c.keys().to_vec(), vec![Key::Int(2), Key::Int(5)]);
    assert_pairs_equal(&c.values(), &[(Key::Int(0), 3), (Key::Int(1), 6)]);
}
