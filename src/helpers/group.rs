//! Grouping and re-keying.
//!
//! Groups are collections of collections: the outer collection is keyed by group
//! value in first-encounter order, and each bucket holds its members in encounter
//! order keyed `0..n`.

use crate::helpers::transform::bucket_push;
use crate::{Collection, Key};

impl<V: Clone> Collection<V> {
    /// Bucket elements by the key `f` derives from each `(value, key)`.
    ///
    /// ```
    /// use ironcollect::Collection;
    ///
    /// let words = Collection::of(["apple", "avocado", "banana"]);
    /// let by_letter = words.group_by(|w, _| w[..1].to_string());
    /// assert_eq!(by_letter.get("a").map(Collection::len), Some(2));
    /// assert_eq!(by_letter.get("b").map(Collection::len), Some(1));
    /// ```
    pub fn group_by<G, F>(&self, mut f: F) -> Collection<Collection<V>>
    where
        G: Into<Key>,
        F: FnMut(&V, &Key) -> G,
    {
        let mut groups = Collection::new();
        for (k, v) in &self.items {
            bucket_push(&mut groups, f(v, k).into(), v.clone());
        }
        groups
    }

    /// Re-key every element by `f(value)`. Later elements win on duplicate keys.
    pub fn key_by<G, F>(&self, mut f: F) -> Collection<V>
    where
        G: Into<Key>,
        F: FnMut(&V) -> G,
    {
        Collection::from_pairs(self.items.iter().map(|(_, v)| (f(v), v.clone())))
    }
}

impl<V> Collection<V> {
    /// Count elements per derived key, in first-encounter order.
    pub fn count_by<G, F>(&self, mut f: F) -> Collection<usize>
    where
        G: Into<Key>,
        F: FnMut(&V) -> G,
    {
        let mut counts: Collection<usize> = Collection::new();
        for (_, v) in &self.items {
            let g = f(v).into();
            match counts.get_mut(g.clone()) {
                Some(n) => *n += 1,
                None => {
                    counts.items.push((g, 1));
                }
            }
        }
        counts
    }
}

#[cfg(feature = "serde")]
mod by_field {
    use crate::error::{CollectionError, Result};
    use crate::helpers::transform::bucket_push;
    use crate::{Collection, Key};
    use serde::Serialize;
    use serde_json::Value;

    impl<V: Clone + Serialize> Collection<V> {
        /// Bucket serializable records by the named field.
        ///
        /// Strings and integers become keys directly, booleans become `0`/`1`, and
        /// missing or `null` fields group under `""`.
        ///
        /// # Errors
        /// - [`CollectionError::Json`] if a record cannot be serialized.
        /// - [`CollectionError::InvalidKey`] if the field holds a float, array or object.
        ///
        /// ```
        /// use ironcollect::Collection;
        /// use serde_json::json;
        ///
        /// let staff = Collection::of([
        ///     json!({"name": "Rizki", "dept": "IT"}),
        ///     json!({"name": "Budi", "dept": "Finance"}),
        ///     json!({"name": "Adi", "dept": "IT"}),
        /// ]);
        /// let by_dept = staff.group_by_field("dept")?;
        /// assert_eq!(by_dept.len(), 2);
        /// assert_eq!(by_dept.get("IT").map(Collection::len), Some(2));
        /// # Ok::<(), ironcollect::CollectionError>(())
        /// ```
        pub fn group_by_field(&self, field: &str) -> Result<Collection<Collection<V>>> {
            let mut groups = Collection::new();
            for (_, v) in &self.items {
                let record = serde_json::to_value(v)?;
                let group = field_key(&record, field)?;
                bucket_push(&mut groups, group, v.clone());
            }
            Ok(groups)
        }
    }

    fn field_key(record: &Value, field: &str) -> Result<Key> {
        match record.get(field) {
            None | Some(Value::Null) => Ok(Key::Str(String::new())),
            Some(Value::String(s)) => Ok(Key::Str(s.clone())),
            Some(Value::Bool(b)) => Ok(Key::from(*b)),
            Some(Value::Number(n)) => n.as_i64().map(Key::Int).ok_or_else(|| {
                CollectionError::InvalidKey {
                    reason: format!("field `{field}` holds non-integer number {n}"),
                }
            }),
            Some(other) => Err(CollectionError::InvalidKey {
                reason: format!("field `{field}` holds a non-scalar value: {other}"),
            }),
        }
    }
}
