//! Slicing, chunking and ordering.
//!
//! All of these keep each element's original key; only the position changes.
//! Sorting is stable, so equal values keep their relative order.

use crate::{Collection, Key};
use std::cmp::Ordering;

impl<V: Clone> Collection<V> {
    /// Elements from `offset` on, for `length` elements if given.
    ///
    /// A negative `offset` counts from the end. A negative `length` stops that many
    /// elements before the end. Out-of-range bounds are clamped.
    ///
    /// ```
    /// use ironcollect::Collection;
    ///
    /// let c = Collection::of(1..=9);
    /// assert_eq!(c.slice(3, None).to_vec(), vec![4, 5, 6, 7, 8, 9]);
    /// assert_eq!(c.slice(3, Some(4)).to_vec(), vec![4, 5, 6, 7]);
    /// assert_eq!(c.slice(-2, None).to_vec(), vec![8, 9]);
    /// assert_eq!(c.slice(1, Some(-6)).to_vec(), vec![2, 3]);
    /// ```
    pub fn slice(&self, offset: isize, length: Option<isize>) -> Collection<V> {
        match slice_bounds(self.items.len(), offset, length) {
            Some((start, end)) => Collection::from_unique(self.items[start..end].to_vec()),
            None => Collection::new(),
        }
    }

    /// The first `n` elements, or the last `|n|` elements when `n` is negative.
    pub fn take(&self, n: isize) -> Collection<V> {
        if n < 0 {
            self.slice(n, None)
        } else {
            self.slice(0, Some(n))
        }
    }

    /// Everything after the first `n` elements.
    pub fn skip(&self, n: usize) -> Collection<V> {
        let start = n.min(self.items.len());
        Collection::from_unique(self.items[start..].to_vec())
    }

    /// Split into consecutive chunks of at most `size` elements.
    ///
    /// Chunks are keyed `0..n`; elements inside a chunk keep their original keys.
    /// A `size` of zero yields an empty collection.
    pub fn chunk(&self, size: usize) -> Collection<Collection<V>> {
        if size == 0 {
            return Collection::new();
        }
        Collection::sequential(
            self.items
                .chunks(size)
                .map(|c| Collection::from_unique(c.to_vec()))
                .collect(),
        )
    }

    /// Reverse the element order.
    pub fn reverse(&self) -> Collection<V> {
        let mut items = self.items.clone();
        items.reverse();
        Collection::from_unique(items)
    }

    /// Stable sort with a custom comparator.
    pub fn sort_by<F>(&self, mut cmp: F) -> Collection<V>
    where
        F: FnMut(&V, &V) -> Ordering,
    {
        let mut items = self.items.clone();
        items.sort_by(|(_, a), (_, b)| cmp(a, b));
        Collection::from_unique(items)
    }

    /// Stable sort by a derived key.
    pub fn sort_by_key<T, F>(&self, mut f: F) -> Collection<V>
    where
        T: Ord,
        F: FnMut(&V) -> T,
    {
        self.sort_by(|a, b| f(a).cmp(&f(b)))
    }

    /// Keep the first occurrence of every value.
    pub fn unique(&self) -> Collection<V>
    where
        V: PartialEq,
    {
        let mut seen: Vec<(Key, V)> = Vec::new();
        for (k, v) in &self.items {
            if !seen.iter().any(|(_, s)| s == v) {
                seen.push((k.clone(), v.clone()));
            }
        }
        Collection::from_unique(seen)
    }
}

impl<V: Clone + Ord> Collection<V> {
    /// Stable ascending sort by natural order.
    pub fn sort(&self) -> Collection<V> {
        self.sort_by(Ord::cmp)
    }

    /// Stable descending sort; equal values keep their original relative order.
    pub fn sort_desc(&self) -> Collection<V> {
        self.sort_by(|a, b| b.cmp(a))
    }
}

/// Resolve `slice` arguments against a length into a non-empty `start..end`.
pub(crate) fn slice_bounds(len: usize, offset: isize, length: Option<isize>) -> Option<(usize, usize)> {
    let start = resolve_index(offset, len);
    let end = match length {
        None => len,
        Some(n) if n >= 0 => start.saturating_add(n.unsigned_abs()).min(len),
        Some(n) => len.saturating_sub(n.unsigned_abs()),
    };
    (start < end).then_some((start, end))
}

/// Map a possibly negative offset onto `0..=len`.
fn resolve_index(offset: isize, len: usize) -> usize {
    if offset >= 0 {
        offset.unsigned_abs().min(len)
    } else {
        len.saturating_sub(offset.unsigned_abs())
    }
}
