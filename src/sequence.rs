//! The [`Sequence`] trait: values that are themselves ordered lists.
//!
//! Flattening (`collapse`, `flat_map`), spreading (`map_spread`) and positional
//! combination (`zip`, `concat`, `combine`) accept any `Sequence`, so callers can
//! pass a `Vec<T>`, an array, a slice or another [`Collection`].

use crate::Collection;

/// An ordered list of items that can be materialized by value.
pub trait Sequence {
    /// Element type.
    type Item;

    /// Number of items.
    fn item_count(&self) -> usize;

    /// Consume the sequence, yielding its items in order.
    fn into_items(self) -> Vec<Self::Item>;
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn item_count(&self) -> usize {
        self.len()
    }

    fn into_items(self) -> Vec<T> {
        self
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn item_count(&self) -> usize {
        N
    }

    fn into_items(self) -> Vec<T> {
        Vec::from(self)
    }
}

impl<T: Clone> Sequence for &[T] {
    type Item = T;

    fn item_count(&self) -> usize {
        self.len()
    }

    fn into_items(self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T: Clone> Sequence for &Vec<T> {
    type Item = T;

    fn item_count(&self) -> usize {
        self.len()
    }

    fn into_items(self) -> Vec<T> {
        self.clone()
    }
}

/// Collections spread their values in key order; keys are dropped.
impl<T> Sequence for Collection<T> {
    type Item = T;

    fn item_count(&self) -> usize {
        self.len()
    }

    fn into_items(self) -> Vec<T> {
        self.into_values()
    }
}

impl<T: Clone> Sequence for &Collection<T> {
    type Item = T;

    fn item_count(&self) -> usize {
        self.len()
    }

    fn into_items(self) -> Vec<T> {
        self.to_vec()
    }
}
