//! Filtering over optional sequences, built on the filter-map core.

use super::filter_map::try_filter_map_indexed;
use super::into_ok;
use crate::optional::Optional;

/// Keeps the elements that satisfy `predicate`, in order.
///
/// # Examples
///
/// ```rust
/// use satchel::optional::Optional;
/// use satchel::slices::filter;
///
/// assert_eq!(filter(vec![1, 2, 3, 4], |value| value % 2 == 0), Optional::some(vec![2, 4]));
/// assert_eq!(filter(None::<Vec<i32>>, |_| true), Optional::none());
/// ```
pub fn filter<T, F>(sequence: impl Into<Optional<Vec<T>>>, mut predicate: F) -> Optional<Vec<T>>
where
    F: FnMut(&T) -> bool,
{
    into_ok(try_filter_indexed(sequence, |_, element| Ok(predicate(element))))
}

/// Like [`filter`], for a fallible `predicate`.
///
/// # Errors
///
/// Returns the first error produced by `predicate`; no partial result is
/// returned.
pub fn try_filter<T, E, F>(
    sequence: impl Into<Optional<Vec<T>>>,
    mut predicate: F,
) -> Result<Optional<Vec<T>>, E>
where
    F: FnMut(&T) -> Result<bool, E>,
{
    try_filter_indexed(sequence, |_, element| predicate(element))
}

/// Like [`filter`], but `predicate` also receives the element's index.
pub fn filter_indexed<T, F>(
    sequence: impl Into<Optional<Vec<T>>>,
    mut predicate: F,
) -> Optional<Vec<T>>
where
    F: FnMut(usize, &T) -> bool,
{
    into_ok(try_filter_indexed(sequence, |index, element| {
        Ok(predicate(index, element))
    }))
}

/// Like [`try_filter`], but `predicate` also receives the element's index.
///
/// # Errors
///
/// Returns the first error produced by `predicate`; no partial result is
/// returned.
pub fn try_filter_indexed<T, E, F>(
    sequence: impl Into<Optional<Vec<T>>>,
    mut predicate: F,
) -> Result<Optional<Vec<T>>, E>
where
    F: FnMut(usize, &T) -> Result<bool, E>,
{
    try_filter_map_indexed(sequence, |index, element| {
        if predicate(index, &element)? {
            Ok(Optional::Some(element))
        } else {
            Ok(Optional::None)
        }
    })
}
