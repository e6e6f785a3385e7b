//! Order-preserving parallel map on the rayon thread pool.
//!
//! [`try_par_map`] applies a fallible function to every element of an
//! optional sequence concurrently and returns the results in input order.
//!
//! # Scheduling Model
//!
//! - One rayon task per element, tagged with the element's index
//! - Each task sends exactly one report (success, failure or panic) over a
//!   channel sized to the element count, so a task never blocks on sending
//! - A caller outside rayon blocks while draining reports. A caller that is
//!   itself a rayon worker (for example a nested `par_map`) keeps running
//!   pool jobs between reports instead, so nesting cannot starve the pool
//! - Successful values are written into a pre-sized slot vector at their
//!   index; each slot is written at most once and the vector is never resized
//!
//! # First Error Wins
//!
//! The first failure drained is returned verbatim and the call returns
//! immediately. Tasks still in flight are not cancelled: they run to
//! completion on the pool and their reports are dropped. Functions with
//! side effects must tolerate running after the caller has moved on.
//!
//! # Examples
//!
//! ```rust
//! use satchel::optional::Optional;
//! use satchel::slices::parallel::try_par_map;
//!
//! let quotients = try_par_map(vec![2, 5, 10], |divisor: i32| {
//!     100_i32.checked_div(divisor).ok_or("divide by zero")
//! });
//! assert_eq!(quotients, Ok(Optional::some(vec![50, 20, 10])));
//!
//! let failed = try_par_map(vec![2, 0, 3], |divisor: i32| {
//!     10_i32.checked_div(divisor).ok_or("divide by zero")
//! });
//! assert_eq!(failed, Err("divide by zero"));
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

use super::into_ok;
use crate::optional::Optional;

/// What a single unit of work sends back to the caller.
enum Report<U, E> {
    Completed {
        index: usize,
        value: U,
    },
    Failed {
        index: usize,
        error: E,
    },
    Panicked {
        index: usize,
        payload: Box<dyn Any + Send + 'static>,
    },
}

/// Applies `function` to every element concurrently, preserving order.
///
/// An absent sequence yields an absent sequence and an empty sequence an
/// empty one; no work is scheduled in either case.
///
/// # Panics
///
/// Resumes the panic of any unit whose `function` call panicked.
///
/// # Examples
///
/// ```rust
/// use satchel::optional::Optional;
/// use satchel::slices::parallel::par_map;
///
/// let words = vec!["a".to_string(), "bb".to_string(), "ccc".to_string()];
/// assert_eq!(par_map(words, |word| word.len()), Optional::some(vec![1, 2, 3]));
/// ```
pub fn par_map<T, U, F>(sequence: impl Into<Optional<Vec<T>>>, function: F) -> Optional<Vec<U>>
where
    T: Send + 'static,
    U: Send + 'static,
    F: Fn(T) -> U + Send + Sync + 'static,
{
    into_ok(try_par_map(sequence, move |element| Ok(function(element))))
}

/// Applies a fallible `function` to every element concurrently on rayon's
/// global thread pool.
///
/// On success the result has the same length as the input and position `i`
/// holds `function(input[i])`, whatever order the units finished in.
///
/// # Errors
///
/// Returns the first error drained from any unit, unchanged. If several
/// units fail, which of their errors is returned is not specified.
///
/// # Panics
///
/// Resumes the panic of any unit whose `function` call panicked, if that
/// report is drained before an error.
pub fn try_par_map<T, U, E, F>(
    sequence: impl Into<Optional<Vec<T>>>,
    function: F,
) -> Result<Optional<Vec<U>>, E>
where
    T: Send + 'static,
    U: Send + 'static,
    E: Send + 'static,
    F: Fn(T) -> Result<U, E> + Send + Sync + 'static,
{
    schedule(None, sequence.into(), function)
}

/// Like [`try_par_map`], but runs the units on `pool` instead of the global
/// pool.
///
/// # Errors
///
/// Returns the first error drained from any unit, unchanged.
///
/// # Panics
///
/// Resumes the panic of any unit whose `function` call panicked.
///
/// # Examples
///
/// ```rust
/// use satchel::optional::Optional;
/// use satchel::slices::parallel::try_par_map_in;
///
/// let pool = rayon::ThreadPoolBuilder::new().num_threads(2).build().unwrap();
/// let doubled = try_par_map_in(&pool, vec![1, 2, 3], |value: i32| Ok::<_, String>(value * 2));
/// assert_eq!(doubled, Ok(Optional::some(vec![2, 4, 6])));
/// ```
pub fn try_par_map_in<T, U, E, F>(
    pool: &rayon::ThreadPool,
    sequence: impl Into<Optional<Vec<T>>>,
    function: F,
) -> Result<Optional<Vec<U>>, E>
where
    T: Send + 'static,
    U: Send + 'static,
    E: Send + 'static,
    F: Fn(T) -> Result<U, E> + Send + Sync + 'static,
{
    schedule(Some(pool), sequence.into(), function)
}

fn schedule<T, U, E, F>(
    pool: Option<&rayon::ThreadPool>,
    sequence: Optional<Vec<T>>,
    function: F,
) -> Result<Optional<Vec<U>>, E>
where
    T: Send + 'static,
    U: Send + 'static,
    E: Send + 'static,
    F: Fn(T) -> Result<U, E> + Send + Sync + 'static,
{
    let elements = match sequence {
        Optional::Some(elements) if !elements.is_empty() => elements,
        absent_or_empty => return Ok(absent_or_empty.map(|_| Vec::new())),
    };

    let length = elements.len();
    tracing::debug!(length, "scheduling parallel transform");

    let function = Arc::new(function);
    let (sender, receiver) = mpsc::sync_channel::<Report<U, E>>(length);

    for (index, element) in elements.into_iter().enumerate() {
        let function = Arc::clone(&function);
        let sender = sender.clone();
        let unit = move || {
            let report = match panic::catch_unwind(AssertUnwindSafe(|| function(element))) {
                Ok(Ok(value)) => Report::Completed { index, value },
                Ok(Err(error)) => Report::Failed { index, error },
                Err(payload) => Report::Panicked { index, payload },
            };
            // The receiver is gone once the caller returned on an earlier failure.
            let _ = sender.send(report);
        };
        match pool {
            Some(pool) => pool.spawn(unit),
            None => rayon::spawn(unit),
        }
    }
    drop(sender);

    drain(&receiver, length).map(Optional::Some)
}

fn drain<U, E>(receiver: &mpsc::Receiver<Report<U, E>>, length: usize) -> Result<Vec<U>, E> {
    let mut slots: Vec<Option<U>> = std::iter::repeat_with(|| None).take(length).collect();
    let mut completed = 0;

    while completed < length {
        let Some(report) = next_report(receiver) else {
            panic!(
                "parallel transform lost {} of {length} unit reports",
                length - completed
            );
        };
        match report {
            Report::Completed { index, value } => {
                tracing::trace!(index, "parallel unit completed");
                debug_assert!(slots[index].is_none(), "slot {index} written twice");
                slots[index] = Some(value);
                completed += 1;
            }
            Report::Failed { index, error } => {
                tracing::debug!(
                    index,
                    completed,
                    length,
                    "parallel transform stopped at first error"
                );
                return Err(error);
            }
            Report::Panicked { index, payload } => {
                tracing::debug!(index, "parallel unit panicked");
                panic::resume_unwind(payload);
            }
        }
    }

    let results: Vec<U> = slots.into_iter().flatten().collect();
    debug_assert_eq!(results.len(), length);
    Ok(results)
}

/// Waits for the next report, or `None` once every sender is gone.
///
/// A rayon worker must not block here: the units it is waiting for may be
/// queued behind it on its own pool, so it keeps running pool jobs until a
/// report arrives.
fn next_report<U, E>(receiver: &mpsc::Receiver<Report<U, E>>) -> Option<Report<U, E>> {
    if rayon::current_thread_index().is_none() {
        return receiver.recv().ok();
    }
    loop {
        match receiver.try_recv() {
            Ok(report) => return Some(report),
            Err(mpsc::TryRecvError::Disconnected) => return None,
            Err(mpsc::TryRecvError::Empty) => {
                if !matches!(rayon::yield_now(), Some(rayon::Yield::Executed)) {
                    thread::yield_now();
                }
            }
        }
    }
}
