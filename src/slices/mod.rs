//! Combinators over optional sequences.
//!
//! Every combinator takes its input as an *optional sequence*,
//! `Optional<Vec<T>>`, where `Optional::None` is the absent sequence and
//! `Optional::Some(vec![])` is the empty one. The two are kept apart:
//! mapping or filtering an absent sequence yields an absent sequence, and
//! an empty sequence yields an empty one.
//!
//! Anything that converts into `Optional<Vec<T>>` is accepted, so a plain
//! `Vec<T>`, an `Option<Vec<T>>` or an `Optional<Vec<T>>` can be passed
//! directly.
//!
//! - [`map`] / [`try_map`]: transform each element, in order
//! - [`filter`] and friends: keep the elements matching a predicate
//! - [`filter_map`] and friends: transform and drop `None` results
//! - [`fold`] and friends: left-to-right accumulation
//! - [`parallel`]: concurrent, order-preserving map (feature `parallel`)
//! - [`parallel_async`]: the same on the tokio runtime (feature `async`)
//!
//! The `try_` variants stop at the first error. Map and filter variants
//! return no partial result; fold variants return the accumulator reached
//! before the failing step inside [`FoldError`](crate::error::FoldError).
//!
//! # Examples
//!
//! ```rust
//! use satchel::optional::Optional;
//! use satchel::slices::{filter, fold, map};
//!
//! let words = vec!["a".to_string(), "bb".to_string(), "ccc".to_string()];
//!
//! let lengths = map(words, |word| word.len());
//! assert_eq!(lengths, Optional::some(vec![1, 2, 3]));
//!
//! let absent = map(Optional::<Vec<String>>::none(), |word| word.len());
//! assert_eq!(absent, Optional::none());
//!
//! let odd = filter(vec![1, 2, 3, 4, 5], |value| value % 2 == 1);
//! assert_eq!(odd, Optional::some(vec![1, 3, 5]));
//!
//! let total = fold(vec![1, 2, 3], 10, |total, value| total + value);
//! assert_eq!(total, 16);
//! ```

use std::convert::Infallible;

mod filter;
mod filter_map;
mod fold;
mod map;

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(feature = "async")]
pub mod parallel_async;

pub use filter::{filter, filter_indexed, try_filter, try_filter_indexed};
pub use filter_map::{filter_map, filter_map_indexed, try_filter_map, try_filter_map_indexed};
pub use fold::{fold, fold_indexed, try_fold, try_fold_indexed};
pub use map::{map, try_map};

#[cfg(feature = "parallel")]
pub use parallel::{par_map, try_par_map, try_par_map_in};

#[cfg(feature = "async")]
pub use parallel_async::{par_map_async, try_par_map_async};

/// Unwraps the result of a combinator whose step function cannot fail.
#[inline]
pub(crate) fn into_ok<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
