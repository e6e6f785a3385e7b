//! Hash map wrapper with conflict-resolving inserts.

use std::collections::HashMap;
use std::collections::hash_map::{self, Entry};
use std::fmt;
use std::hash::Hash;

use crate::optional::Optional;

/// A mutable hash map.
///
/// Lookups report absence through [`Optional`]. Inserts that may collide
/// with an existing key take an `on_conflict(old, new)` function that
/// decides the stored value.
///
/// # Examples
///
/// ```rust
/// use satchel::containers::Map;
/// use satchel::math::add;
///
/// let mut totals = Map::from([("foo", 1)]);
/// totals.add(Map::from([("foo", 2), ("bar", 1)]), add);
///
/// assert_eq!(totals, Map::from([("foo", 3), ("bar", 1)]));
/// ```
#[derive(Clone)]
pub struct Map<K, V> {
    entries: HashMap<K, V>,
}

impl<K: Eq + Hash, V> Map<K, V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Associates `value` with `key`, replacing any previous value.
    pub fn put(&mut self, key: K, value: V) {
        self.entries.insert(key, value);
    }

    /// Associates `value` with `key`. If `key` is already present, the
    /// stored value becomes `on_conflict(old, value)` instead.
    ///
    /// `on_conflict` is not called for a fresh key.
    pub fn upsert<F>(&mut self, key: K, value: V, on_conflict: F)
    where
        F: FnOnce(V, V) -> V,
    {
        let merged = match self.entries.remove(&key) {
            Some(old) => on_conflict(old, value),
            None => value,
        };
        self.entries.insert(key, merged);
    }

    /// Associates `value` with `key` only if `key` is absent. Returns `true`
    /// if the value was stored.
    pub fn put_if_absent(&mut self, key: K, value: V) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(value);
                true
            }
        }
    }

    /// Stores the result of `compute_value` under `key` if `key` is absent.
    ///
    /// `compute_value` is not called when `key` is present.
    ///
    /// # Errors
    ///
    /// Returns the error from `compute_value`; the map is left unchanged.
    pub fn compute_if_absent<E, F>(&mut self, key: K, compute_value: F) -> Result<(), E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        self.get_or_compute(key, compute_value).map(|_| ())
    }

    /// Infallible form of [`compute_if_absent`](Self::compute_if_absent).
    pub fn compute_if_absent_no_error<F>(&mut self, key: K, compute_value: F)
    where
        F: FnOnce() -> V,
    {
        self.get_or_compute_no_error(key, compute_value);
    }

    /// Upserts every entry of `other` into this map.
    pub fn add<F>(&mut self, other: Self, mut on_conflict: F)
    where
        F: FnMut(V, V) -> V,
    {
        for (key, value) in other.entries {
            self.upsert(key, value, &mut on_conflict);
        }
    }

    /// Returns a copy of the value stored under `key`.
    pub fn get(&self, key: &K) -> Optional<V>
    where
        V: Clone,
    {
        Optional::from_ref(self.entries.get(key))
    }

    /// Returns a reference to the value stored under `key`.
    pub fn get_ref(&self, key: &K) -> Optional<&V> {
        self.entries.get(key).into()
    }

    /// Returns the value under `key`, first storing the result of
    /// `compute_value` if `key` is absent.
    ///
    /// # Errors
    ///
    /// Returns the error from `compute_value`; nothing is stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use satchel::containers::Map;
    ///
    /// let mut cache: Map<u32, String> = Map::new();
    /// let failed = cache.get_or_compute(7, || Err("offline"));
    /// assert!(failed.is_err());
    /// assert!(!cache.contains_key(&7));
    ///
    /// let value = cache.get_or_compute(7, || Ok::<_, &str>("seven".to_string()));
    /// assert_eq!(value.map(|text| text.as_str()), Ok("seven"));
    /// ```
    pub fn get_or_compute<E, F>(&mut self, key: K, compute_value: F) -> Result<&mut V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        match self.entries.entry(key) {
            Entry::Occupied(occupied) => Ok(occupied.into_mut()),
            Entry::Vacant(vacant) => compute_value().map(|value| vacant.insert(value)),
        }
    }

    /// Infallible form of [`get_or_compute`](Self::get_or_compute).
    pub fn get_or_compute_no_error<F>(&mut self, key: K, compute_value: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.entries.entry(key).or_insert_with(compute_value)
    }

    /// Returns the value under `key`, first storing `V::default()` if `key`
    /// is absent.
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.entries.entry(key).or_default()
    }

    /// Returns the value under `key`, first storing `value` if `key` is
    /// absent.
    pub fn get_or_value(&mut self, key: K, value: V) -> &mut V {
        self.entries.entry(key).or_insert(value)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key`, returning the value it held.
    pub fn delete(&mut self, key: &K) -> Optional<V> {
        self.entries.remove(key).into()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns the keys, in unspecified order.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.entries.keys().cloned().collect()
    }

    /// Returns the values, in unspecified order.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.entries.values().cloned().collect()
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }
}

impl<K: Eq + Hash, V> Default for Map<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Map<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq + Hash, V: Eq> Eq for Map<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Map<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for Map<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash, V, const N: usize> From<[(K, V); N]> for Map<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> IntoIterator for Map<K, V> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Map<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize> serde::Serialize for Map<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_map(self.entries.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Map<K, V>
where
    K: serde::Deserialize<'de> + Eq + Hash,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        HashMap::<K, V>::deserialize(deserializer).map(|entries| Self { entries })
    }
}
