//! Mutable in-memory containers.
//!
//! This module provides thin wrappers over the standard collections that
//! report absence through [`Optional`](crate::optional::Optional):
//!
//! - [`Set`]: Hash set with bulk membership queries and set algebra
//! - [`OrderedSet`]: Set over a total order, listed in sorted order
//! - [`Map`]: Hash map with conflict-resolving upserts and compute-if-absent
//! - [`ComplexKeyMap`]: [`Map`] serialized as a list of key/value entries,
//!   for keys that a format cannot use as object keys
//! - [`TimeKeyMap`]: [`Map`] keyed by UTC times at one-second resolution
//! - [`Queue`]: FIFO interface, implemented by [`SliceQueue`] and
//!   [`LinkedListQueue`]
//! - [`Stack`]: LIFO interface, implemented by [`SliceStack`]
//!
//! # Concurrency
//!
//! None of these containers are synchronized. Callers that share one
//! across threads must supply their own exclusion (for example a `Mutex`).
//!
//! # Examples
//!
//! ```rust
//! use satchel::containers::Map;
//! use satchel::optional::Optional;
//!
//! let mut counts: Map<&str, i32> = Map::new();
//! counts.upsert("apple", 1, |old, new| old + new);
//! counts.upsert("apple", 2, |old, new| old + new);
//!
//! assert_eq!(counts.get(&"apple"), Optional::some(3));
//! assert_eq!(counts.get(&"pear"), Optional::none());
//! ```

mod complex_key_map;
mod map;
mod ordered_set;
mod queue;
mod set;
mod stack;
mod time_key_map;

pub use complex_key_map::ComplexKeyMap;
pub use map::Map;
pub use ordered_set::OrderedSet;
pub use queue::{LinkedListQueue, Queue, SliceQueue};
pub use set::Set;
pub use stack::{SliceStack, Stack};
pub use time_key_map::TimeKeyMap;
