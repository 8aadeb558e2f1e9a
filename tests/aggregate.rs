use ironcollect::{assert_approx_eq, Collection, CollectionError};

#[test]
fn aggregates_over_one_to_nine() -> anyhow::Result<()> {
    let c = Collection::of(1..=9);
    assert_eq!(*c.min()?, 1);
    assert_eq!(*c.max()?, 9);
    assert_approx_eq!(c.avg()?, 5.0);
    assert_eq!(c.sum(), 45);
    assert_eq!(c.count(), 9);
    Ok(())
}

#[test]
fn reduce_and_fold() -> anyhow::Result<()> {
    let c = Collection::of(1..=9);
    assert_eq!(c.reduce(|carry, item| carry + item)?, 45);
    assert_eq!(c.fold(100, |carry, item| carry + item), 145);

    let words = Collection::of(["a", "b", "c"]);
    assert_eq!(words.fold(String::new(), |acc, w| acc + *w), "abc");
    Ok(())
}

#[test]
fn reduce_seeds_with_first_element() -> anyhow::Result<()> {
    let c = Collection::of([10, 3, 2]);
    assert_eq!(c.reduce(|carry, item| carry - item)?, 5);
    assert_eq!(Collection::of([7]).reduce(|_, _| 0)?, 7);
    Ok(())
}

#[test]
fn empty_collections_fail_or_return_identity() {
    let empty: Collection<i32> = Collection::new();
    assert_eq!(empty.sum(), 0);
    assert_eq!(empty.count(), 0);
    assert!(matches!(
        empty.min(),
        Err(CollectionError::EmptyCollection { operation: "min" })
    ));
    assert!(matches!(
        empty.max(),
        Err(CollectionError::EmptyCollection { operation: "max" })
    ));
    assert!(matches!(
        empty.avg(),
        Err(CollectionError::EmptyCollection { operation: "avg" })
    ));
    assert!(empty.median().is_err());
    assert!(empty.reduce(|a, b| a + b).is_err());
    assert_eq!(empty.fold(1, |a, b| a + b), 1);
}

#[test]
fn avg_and_median_of_floats() -> anyhow::Result<()> {
    let c = Collection::of([1.5f64, 2.5, 10.0, 0.0]);
    assert_approx_eq!(c.avg()?, 3.5);
    assert_approx_eq!(c.median()?, 2.0);
    assert_approx_eq!(Collection::of([3u8, 1, 2]).median()?, 2.0);
    assert_approx_eq!(c.sum(), 14.0);
    Ok(())
}

#[test]
fn avg_and_median_of_wide_integers() -> anyhow::Result<()> {
    assert_approx_eq!(Collection::of([1i64, 2, 3, 10]).avg()?, 4.0);
    assert_approx_eq!(Collection::of([1u64, 2, 3, 10]).median()?, 2.5);
    assert_approx_eq!(Collection::of([4usize, 8]).avg()?, 6.0);

    let counts = Collection::of(["a", "b", "a"]).count_by(|s| *s);
    assert_approx_eq!(counts.avg()?, 1.5);
    assert_approx_eq!(counts.median()?, 1.5);
    Ok(())
}

#[test]
fn min_and_max_work_on_strings() -> anyhow::Result<()> {
    let names = Collection::of(["Rizki", "Adi", "Budi"]);
    assert_eq!(*names.min()?, "Adi");
    assert_eq!(*names.max()?, "Rizki");
    Ok(())
}

#[test]
fn join_with_separators() {
    let names = Collection::of(["Rizki", "Adi", "Budi", "Asep", "Mamat"]);
    assert_eq!(names.join(""), "RizkiAdiBudiAsepMamat");
    assert_eq!(names.join("-"), "Rizki-Adi-Budi-Asep-Mamat");
    assert_eq!(names.join_with_final(",", "_"), "Rizki,Adi,Budi,Asep_Mamat");
    assert_eq!(
        names.join_with_final(", ", " & "),
        "Rizki, Adi, Budi, Asep & Mamat"
    );
}

#[test]
fn join_edge_cases() {
    let empty: Collection<&str> = Collection::new();
    assert_eq!(empty.join_with_final(", ", " and "), "");
    assert_eq!(Collection::of([1, 2]).join_with_final(", ", " and "), "1 and 2");
    assert_eq!(Collection::of([42]).join("-"), "42");
    assert_eq!(Collection::of([4.5, -1.0]).join("; "), "4.5; -1");
    assert_eq!(Collection::of(['x']).join_with_final(", ", " and "), "x");
}
