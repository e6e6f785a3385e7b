//! Filter-map over optional sequences.
//!
//! [`try_filter_map_indexed`] is the core the filter combinators build on.

use super::into_ok;
use crate::optional::Optional;

/// Applies `function` to each element in order, dropping `None` results.
///
/// # Examples
///
/// ```rust
/// use satchel::optional::Optional;
/// use satchel::slices::filter_map;
///
/// let small = filter_map(vec!["1", "x", "30", "4"], |text| match text.parse::<i32>() {
///     Ok(number) if number < 10 => Optional::some(number),
///     _ => Optional::none(),
/// });
/// assert_eq!(small, Optional::some(vec![1, 4]));
/// ```
pub fn filter_map<T, U, F>(
    sequence: impl Into<Optional<Vec<T>>>,
    mut function: F,
) -> Optional<Vec<U>>
where
    F: FnMut(T) -> Optional<U>,
{
    into_ok(try_filter_map_indexed(sequence, |_, element| {
        Ok(function(element))
    }))
}

/// Like [`filter_map`], for a fallible `function`.
///
/// # Errors
///
/// Returns the first error produced by `function`; no partial result is
/// returned.
pub fn try_filter_map<T, U, E, F>(
    sequence: impl Into<Optional<Vec<T>>>,
    mut function: F,
) -> Result<Optional<Vec<U>>, E>
where
    F: FnMut(T) -> Result<Optional<U>, E>,
{
    try_filter_map_indexed(sequence, |_, element| function(element))
}

/// Like [`filter_map`], but `function` also receives the element's index.
pub fn filter_map_indexed<T, U, F>(
    sequence: impl Into<Optional<Vec<T>>>,
    mut function: F,
) -> Optional<Vec<U>>
where
    F: FnMut(usize, T) -> Optional<U>,
{
    into_ok(try_filter_map_indexed(sequence, |index, element| {
        Ok(function(index, element))
    }))
}

/// Like [`try_filter_map`], but `function` also receives the element's index.
///
/// An absent sequence yields an absent sequence without calling `function`.
///
/// # Errors
///
/// Returns the first error produced by `function`; no partial result is
/// returned.
pub fn try_filter_map_indexed<T, U, E, F>(
    sequence: impl Into<Optional<Vec<T>>>,
    mut function: F,
) -> Result<Optional<Vec<U>>, E>
where
    F: FnMut(usize, T) -> Result<Optional<U>, E>,
{
    let Optional::Some(elements) = sequence.into() else {
        return Ok(Optional::None);
    };

    let mut results = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        if let Optional::Some(value) = function(index, element)? {
            results.push(value);
        }
    }
    Ok(Optional::Some(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse_hex(text: &str) -> Optional<i64> {
        match i64::from_str_radix(text.trim_start_matches("0x"), 16) {
            Ok(value) => Optional::some(value),
            Err(_) => Optional::none(),
        }
    }

    #[rstest]
    fn test_filter_map_drops_none() {
        let parsed = filter_map(vec!["0x1", "0x2", "xyz", "0xf"], parse_hex);
        assert_eq!(parsed, Optional::some(vec![1, 2, 15]));
    }

    #[rstest]
    fn test_filter_map_all_none_is_empty_not_absent() {
        let parsed = filter_map(vec!["xyz"], parse_hex);
        assert_eq!(parsed, Optional::some(Vec::new()));
    }

    #[rstest]
    fn test_filter_map_absent() {
        let parsed = filter_map(Optional::<Vec<&str>>::none(), parse_hex);
        assert_eq!(parsed, Optional::none());
    }

    #[rstest]
    fn test_filter_map_indexed_passes_index() {
        let every_other = filter_map_indexed(vec!['a', 'b', 'c', 'd'], |index, letter| {
            if index % 2 == 0 {
                Optional::some(letter)
            } else {
                Optional::none()
            }
        });
        assert_eq!(every_other, Optional::some(vec!['a', 'c']));
    }

    #[rstest]
    fn test_try_filter_map_stops_at_first_error() {
        let mut seen = Vec::new();
        let result: Result<Optional<Vec<i32>>, String> =
            try_filter_map(vec![1, 2, 3, 4], |value| {
                seen.push(value);
                if value == 3 {
                    Err(format!("failed on {value}"))
                } else {
                    Ok(Optional::some(value))
                }
            });
        assert_eq!(result, Err("failed on 3".to_string()));
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
