//! Aggregations over the values of a [`Collection`]: min, max, avg, median, sum,
//! count, reduce, fold and join.
//!
//! `sum` and `count` return their identity on an empty collection; the others fail
//! with [`CollectionError::EmptyCollection`].

use crate::error::{CollectionError, Result};
use crate::Collection;
use std::fmt::Display;
use std::iter::Sum;

/// Numeric values that can be averaged.
///
/// Implemented for every primitive integer and float type. Conversions from
/// 64-bit and wider integers may round.
pub trait AsF64 {
    fn as_f64(&self) -> f64;
}

macro_rules! impl_as_f64 {
    ($($t:ty),* $(,)?) => {
        $(
            impl AsF64 for $t {
                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn as_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_as_f64!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl<T: AsF64 + ?Sized> AsF64 for &T {
    fn as_f64(&self) -> f64 {
        (**self).as_f64()
    }
}

/// Mean of already converted values; `None` when empty.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median of already converted values; `None` when empty.
pub(crate) fn median_of(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

/// `separator` between all values except the last pair, which gets `final_separator`.
pub(crate) fn join_values<V, I>(values: I, separator: &str, final_separator: &str) -> String
where
    V: Display,
    I: IntoIterator<Item = V>,
{
    let mut values = values.into_iter().peekable();
    let mut out = String::new();
    let mut first = true;
    while let Some(v) = values.next() {
        if !first {
            out.push_str(if values.peek().is_none() {
                final_separator
            } else {
                separator
            });
        }
        out.push_str(&v.to_string());
        first = false;
    }
    out
}

impl<V> Collection<V> {
    /// Number of elements.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Smallest value; the first one wins on ties.
    ///
    /// # Errors
    /// [`CollectionError::EmptyCollection`] on an empty collection.
    pub fn min(&self) -> Result<&V>
    where
        V: Ord,
    {
        self.items
            .iter()
            .map(|(_, v)| v)
            .reduce(|best, v| if v < best { v } else { best })
            .ok_or_else(|| CollectionError::empty("min"))
    }

    /// Largest value; the first one wins on ties.
    ///
    /// # Errors
    /// [`CollectionError::EmptyCollection`] on an empty collection.
    pub fn max(&self) -> Result<&V>
    where
        V: Ord,
    {
        self.items
            .iter()
            .map(|(_, v)| v)
            .reduce(|best, v| if v > best { v } else { best })
            .ok_or_else(|| CollectionError::empty("max"))
    }

    /// Left fold starting from `initial`.
    pub fn fold<A, F>(&self, initial: A, mut f: F) -> A
    where
        F: FnMut(A, &V) -> A,
    {
        self.items.iter().fold(initial, |acc, (_, v)| f(acc, v))
    }

    /// Concatenate the values, separated by `separator`.
    pub fn join(&self, separator: &str) -> String
    where
        V: Display,
    {
        self.join_with_final(separator, separator)
    }

    /// Concatenate the values with `separator` between all pairs except the last,
    /// which uses `final_separator`.
    ///
    /// ```
    /// use ironcollect::Collection;
    ///
    /// let names = Collection::of(["Rizki", "Adi", "Budi"]);
    /// assert_eq!(names.join_with_final(", ", " & "), "Rizki, Adi & Budi");
    /// assert_eq!(Collection::of(["solo"]).join_with_final(", ", " & "), "solo");
    /// ```
    pub fn join_with_final(&self, separator: &str, final_separator: &str) -> String
    where
        V: Display,
    {
        join_values(self.items.iter().map(|(_, v)| v), separator, final_separator)
    }

    /// Arithmetic mean as `f64`.
    ///
    /// # Errors
    /// [`CollectionError::EmptyCollection`] on an empty collection.
    ///
    /// ```
    /// use ironcollect::Collection;
    ///
    /// let tallies = Collection::of(["a", "b", "a"]).count_by(|s| *s);
    /// assert_eq!(tallies.avg()?, 1.5);
    /// # Ok::<(), ironcollect::CollectionError>(())
    /// ```
    pub fn avg(&self) -> Result<f64>
    where
        V: AsF64,
    {
        mean(&self.as_f64_values()).ok_or_else(|| CollectionError::empty("avg"))
    }

    /// Middle value, or the mean of the two middle values for even lengths.
    ///
    /// # Errors
    /// [`CollectionError::EmptyCollection`] on an empty collection.
    pub fn median(&self) -> Result<f64>
    where
        V: AsF64,
    {
        median_of(self.as_f64_values()).ok_or_else(|| CollectionError::empty("median"))
    }

    fn as_f64_values(&self) -> Vec<f64>
    where
        V: AsF64,
    {
        self.items.iter().map(|(_, v)| v.as_f64()).collect()
    }
}

impl<V: Clone> Collection<V> {
    /// Sum of the values; zero for an empty collection.
    pub fn sum(&self) -> V
    where
        V: Sum<V>,
    {
        self.items.iter().map(|(_, v)| v.clone()).sum()
    }

    /// Left fold seeded with the first value.
    ///
    /// # Errors
    /// [`CollectionError::EmptyCollection`] on an empty collection.
    ///
    /// ```
    /// use ironcollect::Collection;
    ///
    /// let total = Collection::of(1..=9).reduce(|carry, item| carry + item)?;
    /// assert_eq!(total, 45);
    /// # Ok::<(), ironcollect::CollectionError>(())
    /// ```
    pub fn reduce<F>(&self, mut f: F) -> Result<V>
    where
        F: FnMut(V, &V) -> V,
    {
        let mut iter = self.items.iter().map(|(_, v)| v);
        let seed = iter
            .next()
            .cloned()
            .ok_or_else(|| CollectionError::empty("reduce"))?;
        Ok(iter.fold(seed, |acc, v| f(acc, v)))
    }
}
