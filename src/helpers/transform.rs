//! Element-wise transforms for [`Collection`].
//!
//! - [`Collection::map`] / [`Collection::map_with_key`] -- replace each value, keep keys
//! - [`Collection::map_into`] -- build a new value from an owned copy of each value
//! - [`Collection::map_spread`] -- destructure sequence elements into positional arguments
//! - [`Collection::map_to_groups`] -- emit `(group, value)` pairs and bucket them
//! - [`Collection::flat_map`] / [`Collection::collapse`] -- flatten one level, re-keyed
//! - [`Collection::keys`] / [`Collection::values`] -- project keys, or re-key values
//!
//! ## Example
//! ```
//! use ironcollect::Collection;
//!
//! let c = Collection::of([vec![1, 2], vec![3], vec![]]);
//! let flat = c.collapse();
//! assert_eq!(flat.to_vec(), vec![1, 2, 3]);
//!
//! let doubled = flat.map(|v| v * 2);
//! assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
//! ```

use crate::error::{CollectionError, Result};
use crate::{Collection, Key, Sequence};

impl<V> Collection<V> {
    /// Apply `f` to every value, keeping keys and order.
    pub fn map<U, F>(&self, mut f: F) -> Collection<U>
    where
        F: FnMut(&V) -> U,
    {
        Collection::from_unique(self.items.iter().map(|(k, v)| (k.clone(), f(v))).collect())
    }

    /// Like [`map`](Collection::map), but `f` also receives the key.
    pub fn map_with_key<U, F>(&self, mut f: F) -> Collection<U>
    where
        F: FnMut(&V, &Key) -> U,
    {
        Collection::from_unique(
            self.items
                .iter()
                .map(|(k, v)| (k.clone(), f(v, k)))
                .collect(),
        )
    }

    /// Flatten the results of `f` into one sequentially keyed collection.
    ///
    /// `f` may return any [`Sequence`]: a `Vec`, an array or another collection.
    pub fn flat_map<S, F>(&self, mut f: F) -> Collection<S::Item>
    where
        S: Sequence,
        F: FnMut(&V) -> S,
    {
        let mut out = Vec::new();
        for (_, v) in &self.items {
            out.extend(f(v).into_items());
        }
        Collection::sequential(out)
    }

    /// Bucket the `(group, value)` pairs produced by `f`.
    ///
    /// Buckets appear in first-encounter order and hold values in encounter order,
    /// keyed `0..n`.
    pub fn map_to_groups<G, U, F>(&self, mut f: F) -> Collection<Collection<U>>
    where
        G: Into<Key>,
        F: FnMut(&V) -> (G, U),
    {
        let mut groups: Collection<Collection<U>> = Collection::new();
        for (_, v) in &self.items {
            let (g, u) = f(v);
            bucket_push(&mut groups, g.into(), u);
        }
        groups
    }

    /// The keys, in order, as a sequentially keyed collection.
    pub fn keys(&self) -> Collection<Key> {
        Collection::sequential(self.items.iter().map(|(k, _)| k.clone()).collect())
    }
}

impl<V: Clone> Collection<V> {
    /// Apply a factory to an owned copy of every value, keeping keys.
    ///
    /// ```
    /// use ironcollect::Collection;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Tag(String);
    ///
    /// let tags = Collection::of(["a".to_string(), "b".to_string()]).map_into(Tag);
    /// assert_eq!(tags.into_values(), vec![Tag("a".into()), Tag("b".into())]);
    /// ```
    pub fn map_into<U, F>(&self, mut factory: F) -> Collection<U>
    where
        F: FnMut(V) -> U,
    {
        self.map(|v| factory(v.clone()))
    }

    /// Call `f` with the first `N` members of each sequence element, keeping keys.
    ///
    /// Extra members are ignored.
    ///
    /// # Errors
    /// [`CollectionError::InvalidShape`] if an element has fewer than `N` members.
    ///
    /// ```
    /// use ironcollect::Collection;
    ///
    /// let names = Collection::of([vec!["Rizki", "Adi"], vec!["Asep", "AC"]]);
    /// let full = names.map_spread(|[first, last]| format!("{first} {last}"))?;
    /// assert_eq!(full.to_vec(), vec!["Rizki Adi", "Asep AC"]);
    /// # Ok::<(), ironcollect::CollectionError>(())
    /// ```
    pub fn map_spread<T, U, F, const N: usize>(&self, mut f: F) -> Result<Collection<U>>
    where
        V: Sequence<Item = T>,
        F: FnMut([T; N]) -> U,
    {
        let mut out = Vec::with_capacity(self.items.len());
        for (k, v) in &self.items {
            let mut members = v.clone().into_items();
            let found = members.len();
            if found < N {
                return Err(CollectionError::invalid_shape(k.clone(), N, found));
            }
            members.truncate(N);
            let args: [T; N] = members
                .try_into()
                .map_err(|_| CollectionError::invalid_shape(k.clone(), N, found))?;
            out.push((k.clone(), f(args)));
        }
        Ok(Collection::from_unique(out))
    }

    /// Concatenate sequence elements into one sequentially keyed collection.
    pub fn collapse<T>(&self) -> Collection<T>
    where
        V: Sequence<Item = T>,
    {
        self.flat_map(Clone::clone)
    }

    /// The values, in order, re-keyed `0..n`.
    pub fn values(&self) -> Collection<V> {
        Collection::sequential(self.to_vec())
    }
}

/// Push `value` onto the bucket under `group`, creating the bucket on first sight.
pub(crate) fn bucket_push<U>(groups: &mut Collection<Collection<U>>, group: Key, value: U) {
    match groups.get_mut(group.clone()) {
        Some(bucket) => {
            bucket.push(value);
        }
        None => {
            groups.items.push((group, Collection::sequential(vec![value])));
        }
    }
}
