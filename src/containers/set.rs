//! Hash set wrapper.

use std::collections::HashSet;
use std::collections::hash_set;
use std::fmt;
use std::hash::Hash;

use crate::optional::Optional;

/// A mutable hash set.
///
/// Iteration order is unspecified.
///
/// # Examples
///
/// ```rust
/// use satchel::containers::Set;
///
/// let mut set = Set::from([1, 2]);
/// set.intersect(&Set::from([2, 3]));
/// assert_eq!(set, Set::from([2]));
///
/// set.union(&Set::from([4]));
/// assert!(set.contains_all(&[2, 4]));
/// ```
#[derive(Clone)]
pub struct Set<T> {
    elements: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: HashSet::new(),
        }
    }

    /// Builds a set from `function` applied to every item.
    pub fn from_slice<S, F>(items: &[S], function: F) -> Self
    where
        F: FnMut(&S) -> T,
    {
        items.iter().map(function).collect()
    }

    /// Builds a set from the present results of `function` over `items`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use satchel::containers::Set;
    /// use satchel::optional::Optional;
    ///
    /// let digits = Set::from_filtered_slice(&["1", "x", "2"], |text| {
    ///     Optional::from(text.parse::<u8>().ok())
    /// });
    /// assert_eq!(digits, Set::from([1, 2]));
    /// ```
    pub fn from_filtered_slice<S, F>(items: &[S], mut function: F) -> Self
    where
        F: FnMut(&S) -> Optional<T>,
    {
        items
            .iter()
            .filter_map(|item| function(item).into_option())
            .collect()
    }

    /// Returns the number of elements.
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a copy of `value` if it is a member.
    pub fn get(&self, value: &T) -> Optional<T>
    where
        T: Clone,
    {
        Optional::from_ref(self.elements.get(value))
    }

    /// Returns `true` if `value` is a member.
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    /// Returns `true` if any of `values` is a member.
    pub fn contains_any<'a>(&self, values: impl IntoIterator<Item = &'a T>) -> bool
    where
        T: 'a,
    {
        values.into_iter().any(|value| self.elements.contains(value))
    }

    /// Returns `true` if all of `values` are members.
    pub fn contains_all<'a>(&self, values: impl IntoIterator<Item = &'a T>) -> bool
    where
        T: 'a,
    {
        values.into_iter().all(|value| self.elements.contains(value))
    }

    /// Adds `value`, returning `true` if it was not already present.
    pub fn insert(&mut self, value: T) -> bool {
        self.elements.insert(value)
    }

    /// Adds every element of `values`.
    pub fn insert_all(&mut self, values: impl IntoIterator<Item = T>) {
        self.elements.extend(values);
    }

    /// Removes `value`, returning `true` if it was present.
    pub fn delete(&mut self, value: &T) -> bool {
        self.elements.remove(value)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Adds every element of `other` to this set.
    pub fn union(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.elements.extend(other.elements.iter().cloned());
    }

    /// Keeps only the elements also present in `other`.
    pub fn intersect(&mut self, other: &Self) {
        self.elements.retain(|value| other.elements.contains(value));
    }

    /// Returns the intersection of all `sets`; empty when `sets` is empty.
    ///
    /// Starts from the smallest set so the work is bounded by its size.
    pub fn intersect_all(sets: &[Self]) -> Self
    where
        T: Clone,
    {
        let Some(smallest) = sets.iter().min_by_key(|set| set.size()) else {
            return Self::new();
        };
        let mut result = smallest.clone();
        for set in sets {
            result.intersect(set);
        }
        result
    }

    /// Returns the elements as a vector, in unspecified order.
    pub fn as_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.iter().cloned().collect()
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.elements.iter()
    }

    /// Applies `function` to every element, collecting into a new set.
    pub fn map<U, F>(&self, mut function: F) -> Set<U>
    where
        U: Eq + Hash,
        F: FnMut(&T) -> U,
    {
        self.filter_map(|value| Optional::Some(function(value)))
    }

    /// Applies `function` to every element, keeping the present results.
    pub fn filter_map<U, F>(&self, mut function: F) -> Set<U>
    where
        U: Eq + Hash,
        F: FnMut(&T) -> Optional<U>,
    {
        self.elements
            .iter()
            .filter_map(|value| function(value).into_option())
            .collect()
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.elements.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Set<T>
where
    T: serde::Deserialize<'de> + Eq + Hash,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(|elements| elements.into_iter().collect())
    }
}
