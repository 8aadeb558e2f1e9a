//! Random element selection.
//!
//! Uses a small SplitMix64 generator so that draws are reproducible given a seed.
//! [`Collection::random`] seeds it from the system clock.

use crate::error::{CollectionError, Result};
use crate::Collection;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug)]
pub(crate) struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub(crate) const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed from the wall clock; falls back to a fixed seed if the clock is before 1970.
    fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        #[allow(clippy::cast_possible_truncation)]
        let seed = nanos as u64;
        Self::new(seed)
    }

    #[inline]
    pub(crate) const fn next_u64(&mut self) -> u64 {
        let mut z = {
            self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            self.state
        };
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn next_index(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

impl<V> Collection<V> {
    /// One element picked at random.
    ///
    /// # Errors
    /// [`CollectionError::EmptyCollection`] on an empty collection.
    pub fn random(&self) -> Result<&V> {
        self.pick(&mut SplitMix64::from_clock())
    }

    /// One element picked with a deterministic generator seeded by `seed`.
    ///
    /// # Errors
    /// [`CollectionError::EmptyCollection`] on an empty collection.
    pub fn random_seeded(&self, seed: u64) -> Result<&V> {
        self.pick(&mut SplitMix64::new(seed))
    }

    fn pick(&self, rng: &mut SplitMix64) -> Result<&V> {
        if self.items.is_empty() {
            return Err(CollectionError::empty("random"));
        }
        Ok(&self.items[rng.next_index(self.items.len())].1)
    }
}

impl<V: Clone> Collection<V> {
    /// `n` distinct elements drawn with a generator seeded by `seed`.
    ///
    /// The sample keeps the elements' keys and their original relative order.
    ///
    /// # Errors
    /// - [`CollectionError::EmptyCollection`] if the collection is empty and `n > 0`.
    /// - [`CollectionError::LengthMismatch`] if `n` exceeds the collection length.
    pub fn random_many(&self, n: usize, seed: u64) -> Result<Collection<V>> {
        let len = self.items.len();
        if n > 0 && len == 0 {
            return Err(CollectionError::empty("random_many"));
        }
        if n > len {
            return Err(CollectionError::length_mismatch(n, len));
        }
        // Partial Fisher-Yates over positions.
        let mut rng = SplitMix64::new(seed);
        let mut positions: Vec<usize> = (0..len).collect();
        for i in 0..n {
            let j = i + rng.next_index(len - i);
            positions.swap(i, j);
        }
        let mut chosen = positions[..n].to_vec();
        chosen.sort_unstable();
        Ok(Collection::from_unique(
            chosen.into_iter().map(|p| self.items[p].clone()).collect(),
        ))
    }
}
