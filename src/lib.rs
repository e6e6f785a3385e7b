//! # satchel
//!
//! Generic containers and functional combinators for Rust.
//!
//! ## Overview
//!
//! - **Optional**: [`Optional<T>`](optional::Optional), an explicit
//!   present-or-absent value that serializes exactly like a nullable `T`
//! - **Sequence Combinators**: map, filter, filter-map and fold over
//!   optional sequences, keeping the absent and empty sequences apart
//! - **Parallel Map**: order-preserving concurrent map with first-error-wins
//!   semantics, on rayon or on tokio
//! - **Containers**: sets, maps, queues and stacks that report absence
//!   through `Optional`
//! - **Math**: small numeric helpers and significant-figure rounding
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for `Optional` and the containers
//! - `json`: JSON codec helpers (implies `serde`)
//! - `yaml`: YAML codec helpers (implies `serde`)
//! - `parallel`: rayon-backed parallel map
//! - `async`: tokio-backed parallel map
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use satchel::prelude::*;
//!
//! let words = vec!["a".to_string(), "bb".to_string(), "ccc".to_string()];
//! assert_eq!(map(words, |word| word.len()), Optional::some(vec![1, 2, 3]));
//!
//! let total = try_fold(vec![1, 2, 3], 0, |total, value| {
//!     if value > 2 { Err("too big") } else { Ok(*total + value) }
//! });
//! assert_eq!(total.map_err(|failure| failure.accumulator), Err(3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use satchel::prelude::*;
/// ```
pub mod prelude {
    pub use crate::containers::*;
    pub use crate::error::{CodecError, FoldError};
    pub use crate::optional::Optional;
    pub use crate::slices::*;
}

pub mod optional;

pub mod error;

#[cfg(any(feature = "json", feature = "yaml"))]
pub mod codec;

pub mod containers;

pub mod slices;

pub mod math;
