//! # Ironcollect
//!
//! **Ordered key-value collections** for Rust with a fluent, functional API.
//! A [`Collection<V>`] is an ordered sequence of `(Key, V)` pairs; a
//! [`LazyCollection<V>`] is its deferred counterpart for sources that may never end.
//!
//! ## Key Features
//!
//! - **Ordered and keyed** - elements keep insertion order under integer or string [`Key`]s
//! - **Copy-on-transform** - every operation except the mutating handful returns a new collection
//! - **Transforms** - map, map_into, map_spread, map_to_groups, flat_map, collapse
//! - **Combination** - zip, concat, combine, merge
//! - **Searching** - filter, partition, contains, first/last, take/skip while/until
//! - **Reshaping** - group_by, slice, take, chunk, sort, reverse, unique
//! - **Aggregation** - min, max, avg, median, sum, count, reduce, join
//! - **Lazy sequences** - pull-based evaluation that never drives a producer further than asked
//! - **JSON** - serde support (feature `serde`, on by default)
//!
//! ## Quick Start
//!
//! ```
//! use ironcollect::Collection;
//!
//! let scores = Collection::from_pairs([("Rizki", 100), ("Adi", 95), ("Asep", 90), ("Joko", 85)]);
//!
//! let (passed, failed) = scores.partition(|score, _| *score >= 90);
//! assert_eq!(passed.len(), 3);
//! assert_eq!(failed.get("Joko"), Some(&85));
//!
//! let names = passed.keys().map(ToString::to_string);
//! assert_eq!(names.join_with_final(", ", " & "), "Rizki, Adi & Asep");
//! ```
//!
//! ## Core Concepts
//!
//! ### Keys
//!
//! [`Collection::of`] keys elements `0..n`. [`Collection::from_pairs`] keeps the keys
//! it is given. Operations that *select* elements (filter, slice, sort, ...) keep the
//! original keys; operations that *build a new flat sequence* (concat, collapse,
//! flat_map, prepend, values) re-index from zero.
//!
//! ### Mutation
//!
//! Only `push`, `push_all`, `pop`, `prepend`, `prepend_with_key`, `pull`, `put` and
//! `forget` change a collection in place, and they need `&mut self`.
//!
//! ### Errors
//!
//! Fallible operations return [`Result<T, CollectionError>`](CollectionError): popping or
//! averaging an empty collection, pulling a missing key, spreading an element that is
//! too short, combining sequences of different lengths.
//!
//! ### Lazy collections
//!
//! ```
//! use ironcollect::LazyCollection;
//!
//! let squares = LazyCollection::range(1, i64::MAX)
//!     .map(|n| n * n)
//!     .filter(|n| n % 2 == 1)
//!     .take(3);
//! assert_eq!(squares.all(), vec![1, 9, 25]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default) - `Serialize`/`Deserialize` for collections, `to_json`/`from_json`,
//!   and [`group_by_field`](Collection::group_by_field)
//!
//! ## Module Overview
//!
//! - [`collection`] - core `Collection` type, construction and in-place mutation
//! - [`helpers`] - transform, combine, search, group, ordering, aggregate, sampling
//! - [`lazy`] - `LazyCollection`
//! - [`key`] - the `Key` type
//! - [`sequence`] - the `Sequence` trait accepted by flattening and combining operations
//! - [`testing`] - assertion helpers for tests

pub mod collection;
pub mod error;
pub mod helpers;
pub mod key;
pub mod lazy;
pub mod sequence;
pub mod testing;

#[cfg(feature = "serde")]
pub mod json;

// General re-exports
pub use collection::{Collection, Iter};
pub use error::{CollectionError, Result};
pub use helpers::aggregate::AsF64;
pub use key::Key;
pub use lazy::LazyCollection;
pub use sequence::Sequence;
