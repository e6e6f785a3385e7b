//! Map keyed by points in time, at one-second resolution.

use std::fmt;

use chrono::{DateTime, Utc};

use super::{Map, Set};
use crate::optional::Optional;

fn second_of(time: &DateTime<Utc>) -> i64 {
    time.timestamp()
}

fn time_of(second: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(second, 0)
}

/// A [`Map`] whose keys are UTC times truncated to the whole second.
///
/// Two times within the same second address the same entry, and keys read
/// back from the map carry no sub-second part.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeDelta, Utc};
/// use satchel::containers::TimeKeyMap;
/// use satchel::optional::Optional;
///
/// let now = Utc::now();
/// let mut events = TimeKeyMap::new();
/// events.put(now, "started");
///
/// assert_eq!(events.get(&now), Optional::some("started"));
/// assert_eq!(events.get(&(now + TimeDelta::hours(1))), Optional::none());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct TimeKeyMap<V> {
    inner: Map<i64, V>,
}

impl<V> TimeKeyMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self { inner: Map::new() }
    }

    /// Associates `value` with the second containing `key`.
    pub fn put(&mut self, key: DateTime<Utc>, value: V) {
        self.inner.put(second_of(&key), value);
    }

    /// See [`Map::upsert`].
    pub fn upsert<F>(&mut self, key: DateTime<Utc>, value: V, on_conflict: F)
    where
        F: FnOnce(V, V) -> V,
    {
        self.inner.upsert(second_of(&key), value, on_conflict);
    }

    /// Stores `value` only if the key's second is absent. Returns `true` if
    /// the value was stored.
    pub fn put_if_absent(&mut self, key: DateTime<Utc>, value: V) -> bool {
        self.inner.put_if_absent(second_of(&key), value)
    }

    /// See [`Map::compute_if_absent`].
    ///
    /// # Errors
    ///
    /// Returns the error from `compute_value`; the map is left unchanged.
    pub fn compute_if_absent<E, F>(
        &mut self,
        key: DateTime<Utc>,
        compute_value: F,
    ) -> Result<(), E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        self.inner.compute_if_absent(second_of(&key), compute_value)
    }

    /// Infallible form of [`compute_if_absent`](Self::compute_if_absent).
    pub fn compute_if_absent_no_error<F>(&mut self, key: DateTime<Utc>, compute_value: F)
    where
        F: FnOnce() -> V,
    {
        self.inner.compute_if_absent_no_error(second_of(&key), compute_value);
    }

    /// Upserts every entry of `other` into this map.
    pub fn add<F>(&mut self, other: Self, on_conflict: F)
    where
        F: FnMut(V, V) -> V,
    {
        self.inner.add(other.inner, on_conflict);
    }

    /// Returns a copy of the value stored under the key's second.
    pub fn get(&self, key: &DateTime<Utc>) -> Optional<V>
    where
        V: Clone,
    {
        self.inner.get(&second_of(key))
    }

    /// Returns a reference to the value stored under the key's second.
    pub fn get_ref(&self, key: &DateTime<Utc>) -> Optional<&V> {
        self.inner.get_ref(&second_of(key))
    }

    /// See [`Map::get_or_compute`].
    ///
    /// # Errors
    ///
    /// Returns the error from `compute_value`; nothing is stored.
    pub fn get_or_compute<E, F>(
        &mut self,
        key: DateTime<Utc>,
        compute_value: F,
    ) -> Result<&mut V, E>
    where
        F: FnOnce() -> Result<V, E>,
    {
        self.inner.get_or_compute(second_of(&key), compute_value)
    }

    /// Infallible form of [`get_or_compute`](Self::get_or_compute).
    pub fn get_or_compute_no_error<F>(&mut self, key: DateTime<Utc>, compute_value: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.inner.get_or_compute_no_error(second_of(&key), compute_value)
    }

    /// See [`Map::get_or_default`].
    pub fn get_or_default(&mut self, key: DateTime<Utc>) -> &mut V
    where
        V: Default,
    {
        self.inner.get_or_default(second_of(&key))
    }

    /// See [`Map::get_or_value`].
    pub fn get_or_value(&mut self, key: DateTime<Utc>, value: V) -> &mut V {
        self.inner.get_or_value(second_of(&key), value)
    }

    /// Returns `true` if the key's second is present.
    pub fn contains_key(&self, key: &DateTime<Utc>) -> bool {
        self.inner.contains_key(&second_of(key))
    }

    /// Removes the key's second, returning the value it held.
    pub fn delete(&mut self, key: &DateTime<Utc>) -> Optional<V> {
        self.inner.delete(&second_of(key))
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of distinct seconds stored.
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// Returns the keys, in unspecified order.
    pub fn keys(&self) -> Vec<DateTime<Utc>> {
        self.inner
            .iter()
            .filter_map(|(second, _)| time_of(*second))
            .collect()
    }

    /// Returns the keys as a set.
    pub fn key_set(&self) -> Set<DateTime<Utc>> {
        self.inner
            .iter()
            .filter_map(|(second, _)| time_of(*second))
            .collect()
    }

    /// Returns the values, in unspecified order.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.inner.values()
    }
}

impl<V> Default for TimeKeyMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for TimeKeyMap<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_map()
            .entries(self.inner.iter().map(|(second, value)| (time_of(*second), value)))
            .finish()
    }
}
