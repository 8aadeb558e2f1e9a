//! JSON conversion for [`Collection`] (feature `serde`).
//!
//! A collection whose keys are exactly `0..n` in order serializes as a JSON array;
//! any other collection serializes as an object keyed by the stringified keys.
//! Deserialization accepts both shapes: arrays become sequential collections and
//! objects become keyed collections, with canonical integer strings (`"4"`) turned
//! back into integer keys.
//!
//! JSON object keys are always strings, so `Key::Int(4)` and `Key::Str("4")` are
//! indistinguishable once written. Decoding always picks `Key::Int(4)`, and a
//! collection that holds both fails to serialize instead of writing a duplicate key.
//!
//! ```
//! use ironcollect::Collection;
//!
//! let list = Collection::of([1, 2, 3]);
//! assert_eq!(list.to_json()?, "[1,2,3]");
//!
//! let evens = list.filter(|v, _| v % 2 == 1);
//! assert_eq!(evens.to_json()?, r#"{"0":1,"2":3}"#);
//!
//! let back: Collection<i32> = Collection::from_json(r#"{"0":1,"2":3}"#)?;
//! assert_eq!(back, evens);
//! # Ok::<(), ironcollect::CollectionError>(())
//! ```

use crate::error::Result;
use crate::{Collection, Key};
use serde::de::{self, DeserializeOwned, MapAccess, SeqAccess, Visitor};
use serde::ser::{self, SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

impl<V> Collection<V> {
    /// True when the keys are exactly `0..n` in order.
    pub fn is_list(&self) -> bool {
        self.items
            .iter()
            .enumerate()
            .all(|(i, (k, _))| k.as_int().and_then(|k| usize::try_from(k).ok()) == Some(i))
    }
}

impl<V: Serialize> Collection<V> {
    /// Compact JSON encoding.
    ///
    /// # Errors
    /// [`CollectionError::Json`](crate::CollectionError::Json) if a value fails to serialize,
    /// or if an integer key and a string key render as the same JSON object key.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON encoding.
    ///
    /// # Errors
    /// [`CollectionError::Json`](crate::CollectionError::Json) if a value fails to serialize,
    /// or if an integer key and a string key render as the same JSON object key.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<V: DeserializeOwned> Collection<V> {
    /// Decode a JSON array or object.
    ///
    /// # Errors
    /// [`CollectionError::Json`](crate::CollectionError::Json) on malformed input or a
    /// value of the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<V> Collection<V> {
    /// A string key that reads as an integer key also present in the collection.
    fn colliding_key(&self) -> Option<&str> {
        self.items.iter().find_map(|(k, _)| {
            let text = k.as_str()?;
            let parsed = Key::parse(text);
            (parsed.is_int() && self.position(&parsed).is_some()).then_some(text)
        })
    }
}

impl<V: Serialize> Serialize for Collection<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_list() {
            let mut seq = serializer.serialize_seq(Some(self.items.len()))?;
            for (_, v) in &self.items {
                seq.serialize_element(v)?;
            }
            seq.end()
        } else {
            if let Some(text) = self.colliding_key() {
                return Err(ser::Error::custom(format!(
                    "integer key [{text}] and string key \"{text}\" map to the same JSON object key"
                )));
            }
            let mut map = serializer.serialize_map(Some(self.items.len()))?;
            for (k, v) in &self.items {
                map.serialize_entry(&k.to_string(), v)?;
            }
            map.end()
        }
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Key::Int(i) => serializer.serialize_i64(*i),
            Key::Str(s) => serializer.serialize_str(s),
        }
    }
}

struct CollectionVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for CollectionVisitor<V> {
    type Value = Collection<V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON array or object")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(v) = seq.next_element()? {
            values.push(v);
        }
        Ok(Collection::sequential(values))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut out = Collection::new();
        while let Some((k, v)) = map.next_entry::<String, V>()? {
            let key = Key::parse(&k);
            if out.has(key.clone()) {
                return Err(de::Error::custom(format!("duplicate key [{key}]")));
            }
            out.items.push((key, v));
        }
        Ok(out)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Collection<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(CollectionVisitor(PhantomData))
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer or string key")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Key, E> {
                Ok(Key::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Key, E> {
                i64::try_from(v)
                    .map(Key::Int)
                    .map_err(|_| E::custom(format!("integer key {v} out of range")))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Key, E> {
                Ok(Key::Str(v.to_string()))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}
