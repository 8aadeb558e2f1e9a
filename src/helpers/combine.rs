//! Combining a [`Collection`] with another sequence.
//!
//! - [`Collection::zip`] -- positional pairs, truncated to the shorter input
//! - [`Collection::concat`] -- one after the other, re-keyed `0..n`
//! - [`Collection::combine`] -- this collection's values become keys
//! - [`Collection::merge`] -- string keys overwrite, integer keys append

use crate::error::{CollectionError, Result};
use crate::{Collection, Key, Sequence};

impl<V: Clone> Collection<V> {
    /// Pair elements by position into two-element collections `[a_i, b_i]`.
    ///
    /// The result has `min(self.len(), other.len())` elements.
    ///
    /// ```
    /// use ironcollect::Collection;
    ///
    /// let zipped = Collection::of([1, 2, 3]).zip([4, 5]);
    /// assert_eq!(zipped.len(), 2);
    /// assert_eq!(zipped.to_vec(), vec![Collection::of([1, 4]), Collection::of([2, 5])]);
    /// ```
    pub fn zip<S>(&self, other: S) -> Collection<Collection<V>>
    where
        S: Sequence<Item = V>,
    {
        let pairs = self
            .items
            .iter()
            .zip(other.into_items())
            .map(|((_, a), b)| Collection::sequential(vec![a.clone(), b]))
            .collect::<Vec<_>>();
        Collection::sequential(pairs)
    }

    /// This collection's values followed by `other`'s, keyed `0..n`.
    ///
    /// Both inputs' keys are discarded.
    pub fn concat<S>(&self, other: S) -> Collection<V>
    where
        S: Sequence<Item = V>,
    {
        let mut out = self.to_vec();
        out.extend(other.into_items());
        Collection::sequential(out)
    }

    /// Use this collection's values as keys for `values`, paired by position.
    ///
    /// # Errors
    /// [`CollectionError::LengthMismatch`] unless both sides have the same length.
    ///
    /// ```
    /// use ironcollect::Collection;
    ///
    /// let person = Collection::of(["name", "country"]).combine(["Rizki", "Indonesia"])?;
    /// assert_eq!(person.get("country"), Some(&"Indonesia"));
    /// # Ok::<(), ironcollect::CollectionError>(())
    /// ```
    pub fn combine<W, S>(&self, values: S) -> Result<Collection<W>>
    where
        V: Into<Key>,
        S: Sequence<Item = W>,
    {
        if values.item_count() != self.len() {
            return Err(CollectionError::length_mismatch(
                self.len(),
                values.item_count(),
            ));
        }
        Ok(Collection::from_pairs(
            self.items
                .iter()
                .map(|(_, k)| k.clone())
                .zip(values.into_items()),
        ))
    }

    /// Merge `other` into a copy of this collection.
    ///
    /// Values under string keys replace the value under the same key (or are
    /// appended); values under integer keys are always appended with fresh keys.
    pub fn merge(&self, other: &Collection<V>) -> Collection<V> {
        let mut out = self.clone();
        for (k, v) in &other.items {
            match k {
                Key::Str(_) => {
                    out.put(k.clone(), v.clone());
                }
                Key::Int(_) => {
                    out.push(v.clone());
                }
            }
        }
        out
    }
}
