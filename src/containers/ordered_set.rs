//! Ordered set wrapper.

use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;

use crate::optional::Optional;

/// A mutable set over a totally ordered element type.
///
/// Elements are always listed in ascending order.
///
/// # Examples
///
/// ```rust
/// use satchel::containers::OrderedSet;
///
/// let mut set = OrderedSet::from([3, 1, 2]);
/// set.delete(&2);
/// assert_eq!(set.as_vec(), vec![1, 3]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct OrderedSet<T> {
    elements: BTreeSet<T>,
}

impl<T: Ord> OrderedSet<T> {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: BTreeSet::new(),
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

    /// Returns the smallest element.
    pub fn first(&self) -> Optional<&T> {
        self.elements.first().into()
    }

    /// Returns the largest element.
    pub fn last(&self) -> Optional<&T> {
        self.elements.last().into()
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

    /// Returns the elements in ascending order.
    pub fn as_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.iter().cloned().collect()
    }

    /// Returns an iterator over the elements in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, T> {
        self.elements.iter()
    }

    /// Applies `function` to every element, collecting into a new set.
    pub fn map<U, F>(&self, mut function: F) -> OrderedSet<U>
    where
        U: Ord,
        F: FnMut(&T) -> U,
    {
        self.filter_map(|value| Optional::Some(function(value)))
    }

    /// Applies `function` to every element in ascending order, keeping the
    /// present results.
    pub fn filter_map<U, F>(&self, mut function: F) -> OrderedSet<U>
    where
        U: Ord,
        F: FnMut(&T) -> Optional<U>,
    {
        self.elements
            .iter()
            .filter_map(|value| function(value).into_option())
            .collect()
    }
}

impl<T: Ord> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: Ord> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OrderedSet<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Ord + std::hash::Hash> From<super::Set<T>> for OrderedSet<T> {
    fn from(set: super::Set<T>) -> Self {
        set.into_iter().collect()
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = btree_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for OrderedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.elements.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for OrderedSet<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(|elements| elements.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::Set;
    use rstest::rstest;

    #[rstest]
    fn test_as_vec_is_sorted() {
        let set = OrderedSet::from(["pear", "apple", "fig"]);
        assert_eq!(set.as_vec(), vec!["apple", "fig", "pear"]);
        assert_eq!(set.first(), Optional::some(&"apple"));
        assert_eq!(set.last(), Optional::some(&"pear"));
    }

    #[rstest]
    fn test_empty_first_is_none() {
        let set: OrderedSet<i32> = OrderedSet::new();
        assert_eq!(set.first(), Optional::none());
    }

    #[rstest]
    fn test_intersect_all() {
        let sets = [
            OrderedSet::from([1, 2, 3, 4]),
            OrderedSet::from([2, 4]),
            OrderedSet::from([4, 2, 8]),
        ];
        assert_eq!(OrderedSet::intersect_all(&sets).as_vec(), vec![2, 4]);
        assert!(OrderedSet::<i32>::intersect_all(&[]).is_empty());
    }

    #[rstest]
    fn test_from_filtered_slice_and_map() {
        let set = OrderedSet::from_filtered_slice(&["10", "x", "3", "10"], |text| {
            Optional::from(text.parse::<i32>().ok())
        });
        assert_eq!(set.as_vec(), vec![3, 10]);
        assert_eq!(set.map(|value| -value).as_vec(), vec![-10, -3]);
        assert_eq!(
            OrderedSet::from_slice(&["bb", "a", "ccc"], |text| text.len()).as_vec(),
            vec![1, 2, 3]
        );
    }

    #[rstest]
    fn test_from_hash_set() {
        let ordered = OrderedSet::from(Set::from([5, 1, 3]));
        assert_eq!(ordered.as_vec(), vec![1, 3, 5]);
    }

    #[cfg(feature = "json")]
    #[rstest]
    fn test_json_is_sorted_sequence() {
        let set = OrderedSet::from([3, 1, 2]);
        assert_eq!(serde_json::to_string(&set).unwrap(), "[1,2,3]");
        let restored: OrderedSet<i32> = serde_json::from_str("[2,3,1,3]").unwrap();
        assert_eq!(restored, set);
    }
}
