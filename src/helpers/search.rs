//! Predicate-driven filtering, partitioning and searching.
//!
//! Predicates receive `(&value, &key)`. Every operation here keeps the original keys
//! of the elements it returns, so a filtered sequential collection may have gaps in
//! its keys; call [`values`](Collection::values) to re-key it.

use crate::error::{CollectionError, Result};
use crate::{Collection, Key};

impl<V> Collection<V> {
    /// True if any value equals `needle`.
    pub fn contains(&self, needle: &V) -> bool
    where
        V: PartialEq,
    {
        self.items.iter().any(|(_, v)| v == needle)
    }

    /// True if any element satisfies `pred`.
    pub fn contains_where<P>(&self, mut pred: P) -> bool
    where
        P: FnMut(&V, &Key) -> bool,
    {
        self.items.iter().any(|(k, v)| pred(v, k))
    }

    /// Key of the first element satisfying `pred`.
    pub fn search<P>(&self, mut pred: P) -> Option<Key>
    where
        P: FnMut(&V, &Key) -> bool,
    {
        self.items
            .iter()
            .find(|(k, v)| pred(v, k))
            .map(|(k, _)| k.clone())
    }

    /// The first value.
    ///
    /// # Errors
    /// [`CollectionError::NotFound`] on an empty collection.
    pub fn first(&self) -> Result<&V> {
        self.items
            .first()
            .map(|(_, v)| v)
            .ok_or_else(|| CollectionError::not_found("first"))
    }

    /// The first value satisfying `pred`.
    ///
    /// # Errors
    /// [`CollectionError::NotFound`] if nothing matches.
    pub fn first_where<P>(&self, mut pred: P) -> Result<&V>
    where
        P: FnMut(&V, &Key) -> bool,
    {
        self.items
            .iter()
            .find(|(k, v)| pred(v, k))
            .map(|(_, v)| v)
            .ok_or_else(|| CollectionError::not_found("first_where"))
    }

    /// The last value.
    ///
    /// # Errors
    /// [`CollectionError::NotFound`] on an empty collection.
    pub fn last(&self) -> Result<&V> {
        self.items
            .last()
            .map(|(_, v)| v)
            .ok_or_else(|| CollectionError::not_found("last"))
    }

    /// The last value satisfying `pred`.
    ///
    /// # Errors
    /// [`CollectionError::NotFound`] if nothing matches.
    pub fn last_where<P>(&self, mut pred: P) -> Result<&V>
    where
        P: FnMut(&V, &Key) -> bool,
    {
        self.items
            .iter()
            .rev()
            .find(|(k, v)| pred(v, k))
            .map(|(_, v)| v)
            .ok_or_else(|| CollectionError::not_found("last_where"))
    }
}

impl<V: Clone> Collection<V> {
    /// Keep the elements satisfying `pred`, with their original keys.
    ///
    /// ```
    /// use ironcollect::{Collection, Key};
    ///
    /// let evens = Collection::of(1..=6).filter(|v, _| v % 2 == 0);
    /// assert_eq!(evens.to_vec(), vec![2, 4, 6]);
    /// assert_eq!(evens.keys().to_vec(), vec![Key::Int(1), Key::Int(3), Key::Int(5)]);
    /// ```
    pub fn filter<P>(&self, mut pred: P) -> Collection<V>
    where
        P: FnMut(&V, &Key) -> bool,
    {
        Collection::from_unique(
            self.items
                .iter()
                .filter(|(k, v)| pred(v, k))
                .cloned()
                .collect(),
        )
    }

    /// Drop the elements satisfying `pred`, keeping original keys.
    pub fn reject<P>(&self, mut pred: P) -> Collection<V>
    where
        P: FnMut(&V, &Key) -> bool,
    {
        self.filter(|v, k| !pred(v, k))
    }

    /// Split into `(matching, non_matching)`, both in original order with original keys.
    pub fn partition<P>(&self, mut pred: P) -> (Collection<V>, Collection<V>)
    where
        P: FnMut(&V, &Key) -> bool,
    {
        let (yes, no): (Vec<_>, Vec<_>) = self
            .items
            .iter()
            .cloned()
            .partition(|(k, v)| pred(v, k));
        (Collection::from_unique(yes), Collection::from_unique(no))
    }

    /// The first value satisfying `pred`, or `default`.
    pub fn first_where_or<P>(&self, pred: P, default: V) -> V
    where
        P: FnMut(&V, &Key) -> bool,
    {
        self.first_where(pred).cloned().unwrap_or(default)
    }

    /// The last value satisfying `pred`, or `default`.
    pub fn last_where_or<P>(&self, pred: P, default: V) -> V
    where
        P: FnMut(&V, &Key) -> bool,
    {
        self.last_where(pred).cloned().unwrap_or(default)
    }

    /// The leading elements for which `pred` holds, stopping at the first failure.
    pub fn take_while<P>(&self, mut pred: P) -> Collection<V>
    where
        P: FnMut(&V, &Key) -> bool,
    {
        let end = self.prefix_len(|v, k| pred(v, k));
        Collection::from_unique(self.items[..end].to_vec())
    }

    /// Everything after the leading elements for which `pred` holds.
    pub fn skip_while<P>(&self, mut pred: P) -> Collection<V>
    where
        P: FnMut(&V, &Key) -> bool,
    {
        let start = self.prefix_len(|v, k| pred(v, k));
        Collection::from_unique(self.items[start..].to_vec())
    }

    /// The leading elements before `pred` first holds.
    pub fn take_until<P>(&self, mut pred: P) -> Collection<V>
    where
        P: FnMut(&V, &Key) -> bool,
    {
        self.take_while(|v, k| !pred(v, k))
    }

    /// Everything from the first element for which `pred` holds.
    pub fn skip_until<P>(&self, mut pred: P) -> Collection<V>
    where
        P: FnMut(&V, &Key) -> bool,
    {
        self.skip_while(|v, k| !pred(v, k))
    }

    /// Length of the leading run satisfying `pred`.
    fn prefix_len<P>(&self, mut pred: P) -> usize
    where
        P: FnMut(&V, &Key) -> bool,
    {
        self.items
            .iter()
            .position(|(k, v)| !pred(v, k))
            .unwrap_or(self.items.len())
    }
}
