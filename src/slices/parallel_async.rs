//! Order-preserving parallel map on the tokio runtime.
//!
//! The async counterpart of [`parallel`](super::parallel): one tokio task per
//! element, reporting over two channels (successes and errors) that are
//! each sized to the element count. The caller drains both with
//! `tokio::select!` until every success has arrived or the first error does.
//!
//! As with the thread-pool variant, tasks still running after the first
//! error are not aborted; their results are dropped.

use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::into_ok;
use crate::optional::Optional;

/// Runs `function` for every element as concurrent tokio tasks and collects
/// the results in input order.
///
/// `function` is called on the caller's task to build each future; the
/// futures themselves run concurrently.
///
/// # Errors
///
/// Returns the first error received from any task, unchanged.
///
/// # Panics
///
/// Must be called from within a tokio runtime. Resumes the panic of a task
/// whose future panicked.
///
/// # Examples
///
/// ```rust
/// use satchel::optional::Optional;
/// use satchel::slices::parallel_async::try_par_map_async;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let lengths = try_par_map_async(vec!["a", "bb", "ccc"], |word: &'static str| async move {
///     Ok::<_, String>(word.len())
/// })
/// .await;
/// assert_eq!(lengths, Ok(Optional::some(vec![1, 2, 3])));
/// # });
/// ```
pub async fn try_par_map_async<T, U, E, F, Fut>(
    sequence: impl Into<Optional<Vec<T>>>,
    function: F,
) -> Result<Optional<Vec<U>>, E>
where
    U: Send + 'static,
    E: Send + 'static,
    F: Fn(T) -> Fut,
    Fut: Future<Output = Result<U, E>> + Send + 'static,
{
    let elements = match sequence.into() {
        Optional::Some(elements) if !elements.is_empty() => elements,
        absent_or_empty => return Ok(absent_or_empty.map(|_| Vec::new())),
    };

    let length = elements.len();
    tracing::debug!(length, "spawning async parallel transform");

    let (value_sender, mut value_receiver) = mpsc::channel::<(usize, U)>(length);
    let (error_sender, mut error_receiver) = mpsc::channel::<(usize, E)>(length);

    let handles: Vec<JoinHandle<()>> = elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| {
            let future = function(element);
            let value_sender = value_sender.clone();
            let error_sender = error_sender.clone();
            tokio::spawn(async move {
                // Sends fail only after the caller stopped listening.
                match future.await {
                    Ok(value) => {
                        let _ = value_sender.send((index, value)).await;
                    }
                    Err(error) => {
                        let _ = error_sender.send((index, error)).await;
                    }
                }
            })
        })
        .collect();
    drop(value_sender);
    drop(error_sender);

    let mut slots: Vec<Option<U>> = std::iter::repeat_with(|| None).take(length).collect();
    let mut completed = 0;

    while completed < length {
        tokio::select! {
            Some((index, value)) = value_receiver.recv() => {
                tracing::trace!(index, "async parallel unit completed");
                debug_assert!(slots[index].is_none(), "slot {index} written twice");
                slots[index] = Some(value);
                completed += 1;
            }
            Some((index, error)) = error_receiver.recv() => {
                tracing::debug!(
                    index,
                    completed,
                    length,
                    "async parallel transform stopped at first error"
                );
                return Err(error);
            }
            else => {
                resume_lost_units(handles).await;
                panic!(
                    "async parallel transform lost {} of {length} unit reports",
                    length - completed
                );
            }
        }
    }

    let results: Vec<U> = slots.into_iter().flatten().collect();
    debug_assert_eq!(results.len(), length);
    Ok(Optional::Some(results))
}

/// Infallible form of [`try_par_map_async`].
///
/// # Panics
///
/// Must be called from within a tokio runtime. Resumes the panic of a task
/// whose future panicked.
pub async fn par_map_async<T, U, F, Fut>(
    sequence: impl Into<Optional<Vec<T>>>,
    function: F,
) -> Optional<Vec<U>>
where
    U: Send + 'static,
    F: Fn(T) -> Fut,
    Fut: Future<Output = U> + Send + 'static,
{
    into_ok(
        try_par_map_async(sequence, |element| {
            let future = function(element);
            async move { Ok(future.await) }
        })
        .await,
    )
}

/// Both channels closed early, so some task ended without reporting.
async fn resume_lost_units(handles: Vec<JoinHandle<()>>) {
    for handle in handles {
        if let Err(join_error) = handle.await
            && join_error.is_panic()
        {
            tracing::debug!("async parallel unit panicked");
            std::panic::resume_unwind(join_error.into_panic());
        }
    }
}
