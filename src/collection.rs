//! The [`Collection`] type: construction, access, in-place mutation and iteration.
//!
//! Transformations, searching, grouping, ordering and aggregation are added by the
//! `impl` blocks under [`helpers`](crate::helpers).

use crate::error::{CollectionError, Result};
use crate::Key;
use std::slice;
use std::vec;

/// An ordered sequence of `(Key, V)` pairs with unique keys.
///
/// Pairs keep their insertion order. Collections built with [`Collection::of`] use
/// the keys `0..n`; [`Collection::from_pairs`] keeps whatever keys it is given.
///
/// Only `push`, `push_all`, `pop`, `prepend`, `prepend_with_key`, `pull`, `put` and
/// `forget` change a collection in place. Every other operation borrows the receiver
/// and returns a new, independently owned collection.
///
/// ```
/// use ironcollect::{Collection, Key};
///
/// let mut c = Collection::of([1, 2, 3]);
/// c.push(4);
/// assert_eq!(c.to_vec(), vec![1, 2, 3, 4]);
/// assert_eq!(c.get(3), Some(&4));
///
/// let scores = Collection::from_pairs([("Rizki", 100), ("Adi", 95)]);
/// assert_eq!(scores.get("Adi"), Some(&95));
/// assert_eq!(scores.keys().to_vec(), vec![Key::from("Rizki"), Key::from("Adi")]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Collection<V> {
    pub(crate) items: Vec<(Key, V)>,
}

impl<V> Default for Collection<V> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<V> Collection<V> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an ordered sequence, keyed `0..n`.
    pub fn of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        values.into_iter().collect()
    }

    /// Build a keyed collection from `(key, value)` pairs.
    ///
    /// Keys are kept verbatim. A repeated key overwrites the earlier value in the
    /// earlier value's position.
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut c = Self::new();
        for (k, v) in pairs {
            c.put(k, v);
        }
        c
    }

    /// Sequentially keyed collection from already-ordered values.
    pub(crate) fn sequential(values: Vec<V>) -> Self {
        Self {
            items: (0i64..).zip(values).map(|(i, v)| (Key::Int(i), v)).collect(),
        }
    }

    /// Wrap pairs whose keys are already known to be unique.
    pub(crate) fn from_unique(items: Vec<(Key, V)>) -> Self {
        Self { items }
    }

    /// Borrow the pairs in key order.
    pub fn all(&self) -> &[(Key, V)] {
        &self.items
    }

    /// Consume the collection, returning its values in key order.
    pub fn into_values(self) -> Vec<V> {
        self.items.into_iter().map(|(_, v)| v).collect()
    }

    /// Consume the collection, returning its pairs in key order.
    pub fn into_pairs(self) -> Vec<(Key, V)> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_not_empty(&self) -> bool {
        !self.items.is_empty()
    }

    /// True when the collection holds exactly one element.
    pub fn contains_one_item(&self) -> bool {
        self.items.len() == 1
    }

    pub fn get(&self, key: impl Into<Key>) -> Option<&V> {
        let key = key.into();
        self.items.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut V> {
        let key = key.into();
        self.items.iter_mut().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn has(&self, key: impl Into<Key>) -> bool {
        self.position(&key.into()).is_some()
    }

    /// Iterate `(key, value)` pairs in key order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.items.iter(),
        }
    }

    /// Call `f` for each element in key order, stopping early when it returns `false`.
    pub fn each<F>(&self, mut f: F)
    where
        F: FnMut(&V, &Key) -> bool,
    {
        for (k, v) in &self.items {
            if !f(v, k) {
                break;
            }
        }
    }

    pub(crate) fn position(&self, key: &Key) -> Option<usize> {
        self.items.iter().position(|(k, _)| k == key)
    }

    /// Next free integer key: one past the largest integer key, or `0`.
    ///
    /// Once `i64::MAX` is taken there is no key above it, so the lowest unused
    /// non-negative key is handed out instead.
    fn next_index(&self) -> i64 {
        match self.max_int_key() {
            None => 0,
            Some(max) => max.checked_add(1).unwrap_or_else(|| self.lowest_free_index()),
        }
    }

    fn max_int_key(&self) -> Option<i64> {
        self.items.iter().filter_map(|(k, _)| k.as_int()).max()
    }

    fn lowest_free_index(&self) -> i64 {
        let mut taken: Vec<i64> = self
            .items
            .iter()
            .filter_map(|(k, _)| k.as_int())
            .filter(|i| *i >= 0)
            .collect();
        taken.sort_unstable();
        let mut free = 0i64;
        for i in taken {
            if i != free {
                break;
            }
            free += 1;
        }
        tracing::debug!(key = free, "integer keys saturated at i64::MAX, reusing lowest free key");
        free
    }

    /* ---------- in-place mutation ---------- */

    /// Append `value` under the next free integer key.
    ///
    /// The next key is one past the largest integer key. If `i64::MAX` is already
    /// in use, the lowest unused non-negative key is used instead.
    pub fn push(&mut self, value: V) -> &mut Self {
        let key = Key::Int(self.next_index());
        self.items.push((key, value));
        self
    }

    /// Append every value of `values`, each under the next free integer key.
    pub fn push_all<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut values = values.into_iter();
        if self.max_int_key() != Some(i64::MAX) {
            let mut next = self.next_index();
            for v in values.by_ref() {
                self.items.push((Key::Int(next), v));
                match next.checked_add(1) {
                    Some(n) => next = n,
                    None => break,
                }
            }
        }
        // Past i64::MAX every key comes from the lowest free slot.
        for v in values {
            self.push(v);
        }
        self
    }

    /// Remove and return the value of the last pair by position.
    ///
    /// This is not necessarily the pair with the highest key: `put` and
    /// `prepend_with_key` can place low keys at the end or high keys at the front.
    ///
    /// # Errors
    /// [`CollectionError::EmptyCollection`] when there is nothing to pop.
    pub fn pop(&mut self) -> Result<V> {
        self.items
            .pop()
            .map(|(_, v)| v)
            .ok_or_else(|| CollectionError::empty("pop"))
    }

    /// Insert `value` at the front and re-index integer keys from zero.
    ///
    /// String keys are left as they are.
    pub fn prepend(&mut self, value: V) -> &mut Self {
        self.items.insert(0, (Key::Int(0), value));
        let mut next = 0i64;
        for (k, _) in &mut self.items {
            if k.is_int() {
                *k = Key::Int(next);
                next += 1;
            }
        }
        tracing::debug!(reindexed = next, "prepend re-indexed integer keys");
        self
    }

    /// Insert `value` at the front under `key`, replacing any pair with that key.
    pub fn prepend_with_key(&mut self, key: impl Into<Key>, value: V) -> &mut Self {
        let key = key.into();
        if let Some(pos) = self.position(&key) {
            self.items.remove(pos);
        }
        self.items.insert(0, (key, value));
        self
    }

    /// Remove and return the value stored under `key`. Other keys are untouched.
    ///
    /// # Errors
    /// [`CollectionError::KeyNotFound`] when `key` is absent.
    pub fn pull(&mut self, key: impl Into<Key>) -> Result<V> {
        let key = key.into();
        match self.position(&key) {
            Some(pos) => Ok(self.items.remove(pos).1),
            None => Err(CollectionError::key_not_found(key)),
        }
    }

    /// Replace the value under `key` in place, or append a new pair.
    pub fn put(&mut self, key: impl Into<Key>, value: V) -> &mut Self {
        let key = key.into();
        match self.position(&key) {
            Some(pos) => self.items[pos].1 = value,
            None => self.items.push((key, value)),
        }
        self
    }

    /// Remove the pair under `key`, returning whether it existed.
    pub fn forget(&mut self, key: impl Into<Key>) -> bool {
        let key = key.into();
        match self.position(&key) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl<V: Clone> Collection<V> {
    /// Copy the values out in key order.
    pub fn to_vec(&self) -> Vec<V> {
        self.items.iter().map(|(_, v)| v.clone()).collect()
    }

    /// Copy the pairs out in key order.
    pub fn to_pairs(&self) -> Vec<(Key, V)> {
        self.items.clone()
    }
}

/* ---------- iteration & std conversions ---------- */

/// Borrowing iterator over `(key, value)` pairs, see [`Collection::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, V> {
    inner: slice::Iter<'a, (Key, V)>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a Key, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a Collection<V> {
    type Item = (&'a Key, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for Collection<V> {
    type Item = (Key, V);
    type IntoIter = vec::IntoIter<(Key, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<V> FromIterator<V> for Collection<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::sequential(iter.into_iter().collect())
    }
}

/// Extending pushes each value under the next free integer key.
impl<V> Extend<V> for Collection<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.push_all(iter);
    }
}

impl<V> From<Vec<V>> for Collection<V> {
    fn from(values: Vec<V>) -> Self {
        Self::sequential(values)
    }
}

impl<V, const N: usize> From<[V; N]> for Collection<V> {
    fn from(values: [V; N]) -> Self {
        Self::of(values)
    }
}
