//! Deferred, possibly infinite sequences.
//!
//! A [`LazyCollection`] wraps a pull-based source. Nothing is produced until a
//! consumer asks for it, and each consuming call advances the same cursor. Bounding
//! adapters such as [`take`](LazyCollection::take) stop pulling as soon as they have
//! enough, so an infinite producer is safe as long as something bounds it.
//!
//! Every non-mutating operation of [`Collection`] has a lazy counterpart:
//!
//! - streaming adapters (`map`, `filter`, `concat`, `zip`, `chunk`, `unique`, ...)
//!   pull one element at a time;
//! - reordering adapters (`sort`, `reverse`, `take_last`, negative `slice`) need the
//!   whole input, so they drain the source on the first pull and not before;
//! - consumers (`collect`, `first`, `min`, `avg`, `group_by`, `partition`, ...) return
//!   plain values and stop pulling as soon as the answer is known.
//!
//! Elements of a lazy collection are implicitly keyed by their position; collecting
//! it yields a collection keyed `0..n`.
//!
//! ```
//! use ironcollect::LazyCollection;
//!
//! let mut next = 0;
//! let naturals = LazyCollection::make(move || {
//!     let v = next;
//!     next += 1;
//!     Some(v)
//! });
//! assert_eq!(naturals.take(5).all(), vec![0, 1, 2, 3, 4]);
//! ```

use crate::error::{CollectionError, Result};
use crate::helpers::aggregate::{join_values, median_of, AsF64};
use crate::helpers::ordering::slice_bounds;
use crate::helpers::transform::bucket_push;
use crate::{Collection, Key, Sequence};
use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt::{self, Display};
use std::iter::Sum;

/// A lazily evaluated sequence of values.
pub struct LazyCollection<V> {
    source: Box<dyn Iterator<Item = V>>,
}

impl<V> fmt::Debug for LazyCollection<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyCollection").finish_non_exhaustive()
    }
}

impl<V> Iterator for LazyCollection<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.source.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl LazyCollection<i64> {
    /// The integers `start..=end`.
    pub fn range(start: i64, end: i64) -> Self {
        Self::from_source(start..=end)
    }
}

impl LazyCollection<usize> {
    /// The integers `1..=n`.
    pub fn times(n: usize) -> Self {
        Self::from_source(1..=n)
    }
}

impl<V: 'static> LazyCollection<V> {
    /// Build from a producer that yields `Some(value)` until it is exhausted.
    ///
    /// The producer is only called when a consumer pulls the next element.
    pub fn make<F>(mut producer: F) -> Self
    where
        F: FnMut() -> Option<V> + 'static,
    {
        let mut produced = 0usize;
        Self::from_source(std::iter::from_fn(move || {
            let next = producer();
            match next {
                Some(_) => produced += 1,
                None => tracing::trace!(produced, "lazy producer exhausted"),
            }
            next
        }))
    }

    /// Wrap any iterable source.
    pub fn from_source<I>(source: I) -> Self
    where
        I: IntoIterator<Item = V>,
        I::IntoIter: 'static,
    {
        Self {
            source: Box::new(source.into_iter()),
        }
    }

    /// Defer `f` over the whole input until the first element is pulled.
    fn buffered<U, F>(self, f: F) -> LazyCollection<U>
    where
        U: 'static,
        F: FnOnce(Vec<V>) -> Vec<U> + 'static,
    {
        let source = self.source;
        LazyCollection::from_source(std::iter::once_with(move || f(source.collect())).flatten())
    }

    /* ---------- bounding & slicing ---------- */

    /// At most the first `n` elements. The source is never pulled more than `n` times.
    pub fn take(self, n: usize) -> Self {
        let mut remaining = n;
        let mut source = self.source;
        Self::from_source(std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            let next = source.next();
            if remaining == 0 && next.is_some() {
                tracing::trace!(bound = n, "lazy take bound reached");
            }
            next
        }))
    }

    /// The last `n` elements. Holds at most `n` elements while draining the source.
    pub fn take_last(self, n: usize) -> Self {
        let source = self.source;
        Self::from_source(
            std::iter::once_with(move || {
                let mut tail = VecDeque::with_capacity(n.min(1024));
                if n > 0 {
                    for v in source {
                        if tail.len() == n {
                            tail.pop_front();
                        }
                        tail.push_back(v);
                    }
                }
                tail
            })
            .flatten(),
        )
    }

    /// Drop the first `n` elements (pulled on first use).
    pub fn skip(self, n: usize) -> Self {
        Self::from_source(self.source.skip(n))
    }

    /// Elements from `offset` on, for `length` elements if given.
    ///
    /// Non-negative arguments stream. A negative `offset` or `length` is measured
    /// from the end, so the source is drained on first pull.
    pub fn slice(self, offset: isize, length: Option<isize>) -> Self {
        match (offset, length) {
            (o, None) if o >= 0 => self.skip(o.unsigned_abs()),
            (o, Some(n)) if o >= 0 && n >= 0 => self.skip(o.unsigned_abs()).take(n.unsigned_abs()),
            _ => self.buffered(move |values| match slice_bounds(values.len(), offset, length) {
                Some((start, end)) => values.into_iter().skip(start).take(end - start).collect(),
                None => Vec::new(),
            }),
        }
    }

    /* ---------- transforms ---------- */

    pub fn map<U, F>(self, f: F) -> LazyCollection<U>
    where
        U: 'static,
        F: FnMut(V) -> U + 'static,
    {
        LazyCollection::from_source(self.source.map(f))
    }

    /// Like [`map`](LazyCollection::map), but `f` also receives the element's position.
    pub fn map_with_key<U, F>(self, mut f: F) -> LazyCollection<U>
    where
        U: 'static,
        F: FnMut(V, &Key) -> U + 'static,
    {
        LazyCollection::from_source((0i64..).zip(self.source).map(move |(i, v)| f(v, &Key::Int(i))))
    }

    /// Build each output with a factory such as a constructor.
    pub fn map_into<U, F>(self, factory: F) -> LazyCollection<U>
    where
        U: 'static,
        F: FnMut(V) -> U + 'static,
    {
        self.map(factory)
    }

    /// Call `f` with the first `N` members of each sequence element.
    ///
    /// An element with fewer than `N` members yields
    /// [`CollectionError::InvalidShape`] keyed by its position; the stream goes on.
    pub fn map_spread<T, U, F, const N: usize>(self, mut f: F) -> LazyCollection<Result<U>>
    where
        V: Sequence<Item = T>,
        T: 'static,
        U: 'static,
        F: FnMut([T; N]) -> U + 'static,
    {
        LazyCollection::from_source((0i64..).zip(self.source).map(move |(i, v)| {
            let mut members = v.into_items();
            let found = members.len();
            if found < N {
                return Err(CollectionError::invalid_shape(Key::Int(i), N, found));
            }
            members.truncate(N);
            let args: [T; N] = members
                .try_into()
                .map_err(|_| CollectionError::invalid_shape(Key::Int(i), N, found))?;
            Ok(f(args))
        }))
    }

    /// Flatten the sequence `f` returns for each element.
    pub fn flat_map<U, I, F>(self, f: F) -> LazyCollection<U>
    where
        U: 'static,
        I: IntoIterator<Item = U> + 'static,
        F: FnMut(V) -> I + 'static,
    {
        LazyCollection::from_source(self.source.flat_map(f))
    }

    /// Flatten sequence elements one level.
    pub fn collapse<T>(self) -> LazyCollection<T>
    where
        T: 'static,
        V: Sequence<Item = T>,
    {
        self.flat_map(|v: V| v.into_items())
    }

    /// Observe each element as it passes through.
    pub fn tap<F>(self, f: F) -> Self
    where
        F: FnMut(&V) + 'static,
    {
        Self::from_source(self.source.inspect(f))
    }

    /* ---------- combination ---------- */

    /// This sequence followed by `other`. `other` is not touched until this one ends.
    pub fn concat<I>(self, other: I) -> Self
    where
        I: IntoIterator<Item = V>,
        I::IntoIter: 'static,
    {
        Self::from_source(self.source.chain(other))
    }

    /// Positional pairs `[a_i, b_i]`, ending with the shorter side.
    pub fn zip<I>(self, other: I) -> LazyCollection<Collection<V>>
    where
        I: IntoIterator<Item = V> + 'static,
        I::IntoIter: 'static,
    {
        LazyCollection::from_source(
            self.source
                .zip(other)
                .map(|(a, b)| Collection::sequential(vec![a, b])),
        )
    }

    /* ---------- filtering ---------- */

    pub fn filter<P>(self, pred: P) -> Self
    where
        P: FnMut(&V) -> bool + 'static,
    {
        Self::from_source(self.source.filter(pred))
    }

    pub fn reject<P>(self, mut pred: P) -> Self
    where
        P: FnMut(&V) -> bool + 'static,
    {
        self.filter(move |v| !pred(v))
    }

    /// Drop values equal to one already yielded.
    ///
    /// Remembers every distinct value seen so far.
    pub fn unique(self) -> Self
    where
        V: Clone + PartialEq,
    {
        let mut seen: Vec<V> = Vec::new();
        self.filter(move |v| {
            if seen.contains(v) {
                false
            } else {
                seen.push(v.clone());
                true
            }
        })
    }

    pub fn take_while<P>(self, pred: P) -> Self
    where
        P: FnMut(&V) -> bool + 'static,
    {
        Self::from_source(self.source.take_while(pred))
    }

    pub fn skip_while<P>(self, pred: P) -> Self
    where
        P: FnMut(&V) -> bool + 'static,
    {
        Self::from_source(self.source.skip_while(pred))
    }

    pub fn take_until<P>(self, mut pred: P) -> Self
    where
        P: FnMut(&V) -> bool + 'static,
    {
        self.take_while(move |v| !pred(v))
    }

    pub fn skip_until<P>(self, mut pred: P) -> Self
    where
        P: FnMut(&V) -> bool + 'static,
    {
        self.skip_while(move |v| !pred(v))
    }

    /* ---------- grouping & ordering ---------- */

    /// Group consecutive elements into collections of at most `size`.
    ///
    /// Each chunk keys its elements by their position in the whole sequence.
    pub fn chunk(self, size: usize) -> LazyCollection<Collection<V>> {
        if size == 0 {
            return LazyCollection::from_source(std::iter::empty());
        }
        LazyCollection::from_source(Chunks {
            inner: self.source,
            size,
            offset: 0,
        })
    }

    /// Stable ascending sort, performed on first pull.
    pub fn sort(self) -> Self
    where
        V: Ord,
    {
        self.sort_by(Ord::cmp)
    }

    /// Stable descending sort, performed on first pull.
    pub fn sort_desc(self) -> Self
    where
        V: Ord,
    {
        self.sort_by(|a, b| b.cmp(a))
    }

    pub fn sort_by<F>(self, cmp: F) -> Self
    where
        F: FnMut(&V, &V) -> Ordering + 'static,
    {
        self.buffered(move |mut values| {
            values.sort_by(cmp);
            values
        })
    }

    /// Reversed order, performed on first pull.
    pub fn reverse(self) -> Self {
        self.buffered(|mut values| {
            values.reverse();
            values
        })
    }

    /* ---------- consumers ---------- */

    /// Drain into a collection keyed `0..n`.
    pub fn collect(self) -> Collection<V> {
        Collection::of(self.source)
    }

    /// Drain into a `Vec`.
    pub fn all(self) -> Vec<V> {
        self.source.collect()
    }

    /// Call `f` for each element with its position, stopping when it returns `false`.
    pub fn each<F>(self, mut f: F)
    where
        F: FnMut(&V, &Key) -> bool,
    {
        for (i, v) in (0i64..).zip(self.source) {
            if !f(&v, &Key::Int(i)) {
                break;
            }
        }
    }

    /// The first element, pulling exactly one.
    ///
    /// # Errors
    /// [`CollectionError::NotFound`] if the source is empty.
    pub fn first(mut self) -> Result<V> {
        self.source
            .next()
            .ok_or_else(|| CollectionError::not_found("first"))
    }

    /// The first element satisfying `pred`, pulling no further than it.
    ///
    /// # Errors
    /// [`CollectionError::NotFound`] if the source runs out first.
    pub fn first_where<P>(mut self, pred: P) -> Result<V>
    where
        P: FnMut(&V) -> bool,
    {
        self.source
            .find(pred)
            .ok_or_else(|| CollectionError::not_found("first_where"))
    }

    /// The last element. Drains the source.
    ///
    /// # Errors
    /// [`CollectionError::NotFound`] if the source is empty.
    pub fn last(self) -> Result<V> {
        self.source
            .last()
            .ok_or_else(|| CollectionError::not_found("last"))
    }

    /// The last element satisfying `pred`. Drains the source.
    ///
    /// # Errors
    /// [`CollectionError::NotFound`] if nothing matches.
    pub fn last_where<P>(self, pred: P) -> Result<V>
    where
        P: FnMut(&V) -> bool,
    {
        self.source
            .filter(pred)
            .last()
            .ok_or_else(|| CollectionError::not_found("last_where"))
    }

    /// True once an element equals `needle`; stops pulling at that element.
    pub fn contains(self, needle: &V) -> bool
    where
        V: PartialEq,
    {
        self.contains_where(|v| v == needle)
    }

    /// True once some element satisfies `pred`; stops pulling at that element.
    pub fn contains_where<P>(mut self, mut pred: P) -> bool
    where
        P: FnMut(&V) -> bool,
    {
        self.source.any(|v| pred(&v))
    }

    /// Split into `(matching, non_matching)`, each keyed by stream position.
    pub fn partition<P>(self, mut pred: P) -> (Collection<V>, Collection<V>)
    where
        P: FnMut(&V) -> bool,
    {
        let (yes, no): (Vec<_>, Vec<_>) = (0i64..)
            .zip(self.source)
            .map(|(i, v)| (Key::Int(i), v))
            .partition(|(_, v)| pred(v));
        (Collection::from_unique(yes), Collection::from_unique(no))
    }

    /// Bucket elements by the key `f` derives from each `(value, position)`.
    pub fn group_by<G, F>(self, mut f: F) -> Collection<Collection<V>>
    where
        G: Into<Key>,
        F: FnMut(&V, &Key) -> G,
    {
        let mut groups = Collection::new();
        for (i, v) in (0i64..).zip(self.source) {
            let group = f(&v, &Key::Int(i)).into();
            bucket_push(&mut groups, group, v);
        }
        groups
    }

    /// Bucket the `(group, value)` pairs produced by `f`.
    pub fn map_to_groups<G, U, F>(self, mut f: F) -> Collection<Collection<U>>
    where
        G: Into<Key>,
        F: FnMut(V) -> (G, U),
    {
        let mut groups = Collection::new();
        for v in self.source {
            let (g, u) = f(v);
            bucket_push(&mut groups, g.into(), u);
        }
        groups
    }

    /// Use this sequence's values as keys for `values`, paired by position.
    ///
    /// # Errors
    /// [`CollectionError::LengthMismatch`] unless both sides have the same length.
    pub fn combine<W, I>(self, values: I) -> Result<Collection<W>>
    where
        V: Into<Key>,
        I: IntoIterator<Item = W>,
    {
        let keys: Vec<V> = self.source.collect();
        let values: Vec<W> = values.into_iter().collect();
        if keys.len() != values.len() {
            return Err(CollectionError::length_mismatch(keys.len(), values.len()));
        }
        Ok(Collection::from_pairs(keys.into_iter().zip(values)))
    }

    /// Number of elements. Drains the source.
    pub fn count(self) -> usize {
        self.source.count()
    }

    /// Smallest element; the first one wins on ties.
    ///
    /// # Errors
    /// [`CollectionError::EmptyCollection`] if the source is empty.
    pub fn min(self) -> Result<V>
    where
        V: Ord,
    {
        self.source
            .reduce(|best, v| if v < best { v } else { best })
            .ok_or_else(|| CollectionError::empty("min"))
    }

    /// Largest element; the first one wins on ties.
    ///
    /// # Errors
    /// [`CollectionError::EmptyCollection`] if the source is empty.
    pub fn max(self) -> Result<V>
    where
        V: Ord,
    {
        self.source
            .reduce(|best, v| if v > best { v } else { best })
            .ok_or_else(|| CollectionError::empty("max"))
    }

    pub fn sum(self) -> V
    where
        V: Sum<V>,
    {
        self.source.sum()
    }

    /// Arithmetic mean, computed in one pass without buffering.
    ///
    /// # Errors
    /// [`CollectionError::EmptyCollection`] if the source is empty.
    #[allow(clippy::cast_precision_loss)]
    pub fn avg(self) -> Result<f64>
    where
        V: AsF64,
    {
        let (total, n) = self
            .source
            .fold((0.0f64, 0usize), |(total, n), v| (total + v.as_f64(), n + 1));
        if n == 0 {
            return Err(CollectionError::empty("avg"));
        }
        Ok(total / n as f64)
    }

    /// Middle value, or the mean of the two middle values for even lengths.
    ///
    /// # Errors
    /// [`CollectionError::EmptyCollection`] if the source is empty.
    pub fn median(self) -> Result<f64>
    where
        V: AsF64,
    {
        median_of(self.source.map(|v| v.as_f64()).collect())
            .ok_or_else(|| CollectionError::empty("median"))
    }

    pub fn fold<A, F>(self, initial: A, f: F) -> A
    where
        F: FnMut(A, V) -> A,
    {
        self.source.fold(initial, f)
    }

    /// Left fold seeded with the first element.
    ///
    /// # Errors
    /// [`CollectionError::EmptyCollection`] if the source is empty.
    pub fn reduce<F>(self, f: F) -> Result<V>
    where
        F: FnMut(V, V) -> V,
    {
        self.source
            .reduce(f)
            .ok_or_else(|| CollectionError::empty("reduce"))
    }

    pub fn join(self, separator: &str) -> String
    where
        V: Display,
    {
        join_values(self.source, separator, separator)
    }

    /// Like [`join`](LazyCollection::join), with `final_separator` before the last element.
    pub fn join_with_final(self, separator: &str, final_separator: &str) -> String
    where
        V: Display,
    {
        join_values(self.source, separator, final_separator)
    }
}

struct Chunks<I> {
    inner: I,
    size: usize,
    offset: i64,
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Collection<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut items = Vec::with_capacity(self.size.min(self.inner.size_hint().0));
        while items.len() < self.size {
            let Some(v) = self.inner.next() else { break };
            items.push((Key::Int(self.offset), v));
            self.offset += 1;
        }
        if items.is_empty() {
            None
        } else {
            Some(Collection::from_unique(items))
        }
    }
}
