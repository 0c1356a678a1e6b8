//! Insertion-ordered field map.

use crate::value::SpaceValue;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ordered mapping from field name to [`SpaceValue`].
///
/// Iteration follows insertion order; inserting an existing key replaces its
/// value in place. Deserialization is stricter and rejects repeated keys. Equality compares key sets and values and ignores order,
/// so a map built in any order equals the one a space produces.
///
/// Lookups are linear; spaces have a handful of fields.
///
/// # Example
///
/// ```rust
/// use tractgym_spaces::{SpaceMap, SpaceValue};
///
/// let a = SpaceMap::new().with("x", 1.0f32).with("y", vec![2.0f32]);
/// let b = SpaceMap::new().with("y", vec![2.0f32]).with("x", 1.0f32);
///
/// assert_eq!(a.keys().collect::<Vec<_>>(), ["x", "y"]);
/// assert_eq!(a, b);
/// assert_eq!(a.get("x"), Some(&SpaceValue::Scalar(1.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpaceMap {
    entries: Vec<(String, SpaceValue)>,
}

impl SpaceMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert a value, returning the previous value for `key` if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<SpaceValue>,
    ) -> Option<SpaceValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Add a value, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<SpaceValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Get the value for `key`.
    pub fn get(&self, key: &str) -> Option<&SpaceValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Remove and return the value for `key`, keeping the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<SpaceValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Values in key order.
    pub fn values(&self) -> impl Iterator<Item = &SpaceValue> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpaceValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for SpaceMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Into<String>, V: Into<SpaceValue>> FromIterator<(K, V)> for SpaceMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SpaceMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl IntoIterator for SpaceMap {
    type Item = (String, SpaceValue);
    type IntoIter = std::vec::IntoIter<(String, SpaceValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for SpaceMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SpaceMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpaceMapVisitor;

        impl<'de> Visitor<'de> for SpaceMapVisitor {
            type Value = SpaceMap;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to space values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SpaceMap, A::Error> {
                let mut map = SpaceMap::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, SpaceValue>()? {
                    if map.contains_key(&key) {
                        return Err(de::Error::custom(format_args!("duplicate field `{key}`")));
                    }
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(SpaceMapVisitor)
    }
}
