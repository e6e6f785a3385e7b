//! Sequential map over optional sequences.

use super::into_ok;
use crate::optional::Optional;

/// Applies `function` to each element in order and returns the results.
///
/// An absent sequence maps to an absent sequence.
///
/// # Examples
///
/// ```rust
/// use satchel::optional::Optional;
/// use satchel::slices::map;
///
/// assert_eq!(map(vec![1, 2, 3], |value| value * 2), Optional::some(vec![2, 4, 6]));
/// assert_eq!(map(Vec::<i32>::new(), |value| value * 2), Optional::some(vec![]));
/// assert_eq!(map(None::<Vec<i32>>, |value| value * 2), Optional::none());
/// ```
pub fn map<T, U, F>(sequence: impl Into<Optional<Vec<T>>>, mut function: F) -> Optional<Vec<U>>
where
    F: FnMut(T) -> U,
{
    into_ok(try_map(sequence, |element| Ok(function(element))))
}

/// Applies a fallible `function` to each element in order.
///
/// Stops at the first error, which is returned as is; the elements mapped
/// so far are discarded.
///
/// # Errors
///
/// Returns the first error produced by `function`.
///
/// # Examples
///
/// ```rust
/// use satchel::optional::Optional;
/// use satchel::slices::try_map;
///
/// let parsed = try_map(vec!["1", "2"], |text| text.parse::<i32>());
/// assert_eq!(parsed, Ok(Optional::some(vec![1, 2])));
///
/// let failed = try_map(vec!["1", "x"], |text| text.parse::<i32>());
/// assert!(failed.is_err());
/// ```
pub fn try_map<T, U, E, F>(
    sequence: impl Into<Optional<Vec<T>>>,
    mut function: F,
) -> Result<Optional<Vec<U>>, E>
where
    F: FnMut(T) -> Result<U, E>,
{
    let Optional::Some(elements) = sequence.into() else {
        return Ok(Optional::None);
    };

    let mut results = Vec::with_capacity(elements.len());
    for element in elements {
        results.push(function(element)?);
    }
    Ok(Optional::Some(results))
}
