//! Left folds over optional sequences.
//!
//! An absent or empty sequence folds to the initial value without calling
//! the step function.

use crate::error::FoldError;
use crate::optional::Optional;

/// Folds the elements left to right into an accumulator.
///
/// # Examples
///
/// ```rust
/// use satchel::slices::fold;
///
/// let words = vec!["1", "123456", "123"];
/// assert_eq!(fold(words, 10, |total, word| total + word.len()), 20);
/// ```
pub fn fold<T, A, F>(sequence: impl Into<Optional<Vec<T>>>, init: A, mut function: F) -> A
where
    F: FnMut(A, T) -> A,
{
    fold_indexed(sequence, init, |accumulator, _, element| {
        function(accumulator, element)
    })
}

/// Like [`fold`], but `function` also receives the element's index.
pub fn fold_indexed<T, A, F>(sequence: impl Into<Optional<Vec<T>>>, init: A, mut function: F) -> A
where
    F: FnMut(A, usize, T) -> A,
{
    match sequence.into() {
        Optional::Some(elements) => elements
            .into_iter()
            .enumerate()
            .fold(init, |accumulator, (index, element)| {
                function(accumulator, index, element)
            }),
        Optional::None => init,
    }
}

/// Folds with a fallible step function, stopping at the first error.
///
/// The step borrows the accumulator and returns the next one, so the value
/// reached before a failing step is still available in the returned
/// [`FoldError`].
///
/// # Errors
///
/// Returns a [`FoldError`] holding the accumulator before the failing step
/// and the step's error.
pub fn try_fold<T, A, E, F>(
    sequence: impl Into<Optional<Vec<T>>>,
    init: A,
    mut function: F,
) -> Result<A, FoldError<A, E>>
where
    F: FnMut(&A, T) -> Result<A, E>,
{
    try_fold_indexed(sequence, init, |accumulator, _, element| {
        function(accumulator, element)
    })
}

/// Like [`try_fold`], but `function` also receives the element's index.
///
/// # Errors
///
/// Returns a [`FoldError`] holding the accumulator before the failing step
/// and the step's error.
pub fn try_fold_indexed<T, A, E, F>(
    sequence: impl Into<Optional<Vec<T>>>,
    init: A,
    mut function: F,
) -> Result<A, FoldError<A, E>>
where
    F: FnMut(&A, usize, T) -> Result<A, E>,
{
    let Optional::Some(elements) = sequence.into() else {
        return Ok(init);
    };

    let mut accumulator = init;
    for (index, element) in elements.into_iter().enumerate() {
        match function(&accumulator, index, element) {
            Ok(next) => accumulator = next,
            Err(error) => return Err(FoldError { accumulator, error }),
        }
    }
    Ok(accumulator)
}
