//! Map serialized as a list of entries.

use std::fmt;
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

use super::Map;

/// A [`Map`] whose serialized form is a list of `{"key": k, "value": v}`
/// entries instead of an object.
///
/// Use it when the keys are structured values (tuples, arrays, structs)
/// that formats such as JSON cannot use as object keys. Every [`Map`]
/// operation is available through `Deref`.
///
/// # Examples
///
/// ```rust
/// use satchel::containers::ComplexKeyMap;
/// use satchel::optional::Optional;
///
/// let mut routes: ComplexKeyMap<(String, u16), &str> = ComplexKeyMap::new();
/// routes.put(("localhost".to_string(), 80), "web");
///
/// assert_eq!(routes.get(&("localhost".to_string(), 80)), Optional::some("web"));
/// ```
#[derive(Clone)]
pub struct ComplexKeyMap<K, V> {
    inner: Map<K, V>,
}

impl<K: Eq + Hash, V> ComplexKeyMap<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self { inner: Map::new() }
    }

    /// Upserts every entry of `other` into this map.
    pub fn add<F>(&mut self, other: Self, on_conflict: F)
    where
        F: FnMut(V, V) -> V,
    {
        self.inner.add(other.inner, on_conflict);
    }

    /// Returns the underlying [`Map`].
    pub fn into_inner(self) -> Map<K, V> {
        self.inner
    }
}

impl<K: Eq + Hash, V> Default for ComplexKeyMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> Deref for ComplexKeyMap<K, V> {
    type Target = Map<K, V>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<K: Eq + Hash, V> DerefMut for ComplexKeyMap<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<K: Eq + Hash, V> From<Map<K, V>> for ComplexKeyMap<K, V> {
    fn from(inner: Map<K, V>) -> Self {
        Self { inner }
    }
}

impl<K: Eq + Hash, V, const N: usize> From<[(K, V); N]> for ComplexKeyMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        Self {
            inner: Map::from(entries),
        }
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for ComplexKeyMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K: Eq + Hash, V: Eq> Eq for ComplexKeyMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ComplexKeyMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, formatter)
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
mod serialization {
    use std::hash::Hash;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::ComplexKeyMap;

    #[derive(Serialize)]
    struct EntryRef<'a, K, V> {
        key: &'a K,
        value: &'a V,
    }

    #[derive(Deserialize)]
    struct Entry<K, V> {
        key: K,
        value: V,
    }

    impl<K, V> Serialize for ComplexKeyMap<K, V>
    where
        K: Serialize + Eq + Hash,
        V: Serialize,
    {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_seq(self.inner.iter().map(|(key, value)| EntryRef { key, value }))
        }
    }

    impl<'de, K, V> Deserialize<'de> for ComplexKeyMap<K, V>
    where
        K: Deserialize<'de> + Eq + Hash,
        V: Deserialize<'de>,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let entries = Vec::<Entry<K, V>>::deserialize(deserializer)?;
            Ok(entries
                .into_iter()
                .map(|entry| (entry.key, entry.value))
                .collect::<super::Map<K, V>>()
                .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::add;
    use crate::optional::Optional;
    use rstest::rstest;

    type PairKey = [&'static str; 2];

    const FOO: PairKey = ["foo", "bar"];
    const BAR: PairKey = ["bar", "baz"];
    const BAZ: PairKey = ["baz", "qux"];

    #[rstest]
    fn test_map_operations_through_deref() {
        let mut map: ComplexKeyMap<PairKey, i32> = ComplexKeyMap::new();
        assert!(map.is_empty());

        map.upsert(FOO, 1, add);
        map.add(ComplexKeyMap::from([(FOO, 2), (BAR, 1)]), add);
        assert_eq!(map, ComplexKeyMap::from([(FOO, 3), (BAR, 1)]));

        map.put(FOO, 42);
        assert_eq!(map.get(&FOO), Optional::some(42));
        assert_eq!(*map.get_or_value(BAZ, 19), 19);
        assert!(map.contains_key(&BAZ));

        map.delete(&BAZ);
        assert_eq!(map.size(), 2);
    }

    #[cfg(feature = "json")]
    #[rstest]
    fn test_json_is_entry_list() {
        let map: ComplexKeyMap<(String, u16), i32> =
            ComplexKeyMap::from([(("host".to_string(), 80), 1)]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"[{"key":["host",80],"value":1}]"#);
    }

    #[cfg(feature = "json")]
    #[rstest]
    fn test_json_roundtrip_with_structured_keys() {
        let map: ComplexKeyMap<[String; 2], i32> = ComplexKeyMap::from([
            (["foo".to_string(), "bar".to_string()], 3),
            (["bar".to_string(), "baz".to_string()], 2),
            (["baz".to_string(), "qux".to_string()], 1),
        ]);
        let json = serde_json::to_string(&map).unwrap();
        let restored: ComplexKeyMap<[String; 2], i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, map);

        // The same keys cannot be JSON object keys.
        assert!(serde_json::to_string(&map.clone().into_inner()).is_err());
    }
}
