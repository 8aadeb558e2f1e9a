//! Testing utilities for code built on ironcollect.
//!
//! Assertion helpers that compare a [`Collection`](crate::Collection) against plain
//! expectations and print the whole collection when they fail:
//!
//! - [`assert_collections_equal`]: values in order
//! - [`assert_collections_unordered_equal`]: values ignoring order (duplicates count)
//! - [`assert_pairs_equal`]: keys and values in order
//! - [`assert_grouped_equal`]: group keys and bucket contents in order
//! - [`assert_all`] / [`assert_any`] / [`assert_none`]: predicates over `(value, key)`
//! - [`assert_collection_size`]: element count
//! - [`assert_approx_eq!`](crate::assert_approx_eq): float comparison with tolerance
//!
//! # Quick Start
//!
//! ```
//! use ironcollect::Collection;
//! use ironcollect::testing::*;
//!
//! let doubled = Collection::of([1, 2, 3]).map(|x| x * 2);
//! assert_collections_equal(&doubled, &[2, 4, 6]);
//! assert_all(&doubled, |v, _| v % 2 == 0);
//! ```

pub mod assertions;

pub use assertions::*;

/// Check that a floating-point value is within a tolerance of the expected value.
///
/// ```
/// use ironcollect::assert_approx_eq;
///
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(5.01, 5.0, 0.1);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($actual:expr, $expected:expr) => {
        $crate::assert_approx_eq!($actual, $expected, 1e-10)
    };
    ($actual:expr, $expected:expr, $epsilon:expr) => {{
        let actual: f64 = $actual;
        let expected: f64 = $expected;
        let epsilon: f64 = $epsilon;
        let diff = (actual - expected).abs();
        assert!(
            diff <= epsilon,
            "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n   eps: `{:?}`",
            actual,
            expected,
            diff,
            epsilon
        );
    }};
}
