//! Optional type - a value that may or may not be present.
//!
//! This module provides the `Optional<T>` type, which represents either a
//! value of type `T` (`Some`) or nothing (`None`). It is the absence signal
//! used throughout the crate:
//!
//! - Containers return `Optional<V>` from every "possibly absent" lookup
//! - Sequence combinators use `Optional<Vec<T>>` to tell the absent sequence
//!   apart from the empty one
//! - `filter_map` style combinators use it to drop elements
//!
//! Absence is a normal outcome, never an error: no operation on `Optional`
//! panics because the value is missing.
//!
//! # Serialization
//!
//! With the `serde` feature, an `Optional<T>` serializes exactly like an
//! `Option<T>`: `None` becomes the format's null token and `Some(v)` becomes
//! the plain encoding of `v`, with no wrapper object around it.
//!
//! # Examples
//!
//! ```rust
//! use satchel::optional::Optional;
//!
//! let present = Optional::some(21);
//! let absent: Optional<i32> = Optional::none();
//!
//! assert_eq!(present.map(|value| value * 2), Optional::some(42));
//! assert_eq!(absent.map(|value| value * 2), Optional::none());
//!
//! assert_eq!(present.get_or_default(0), 21);
//! assert_eq!(absent.get_or_default(0), 0);
//! ```

#[cfg(feature = "serde")]
mod serialization;

use std::fmt;

/// A value of type `T`, or nothing.
///
/// `Optional<T>` is in exactly one of two states: `Some(value)`, owning a
/// single `T`, or `None`. It is immutable once constructed; operations that
/// "fill in" a value do so on the container that holds the `Optional`.
///
/// A `Some` holding a type's empty value (such as `Some(String::new())`) is
/// never equal to `None`.
///
/// # Examples
///
/// ```rust
/// use satchel::optional::Optional;
///
/// let name: Optional<String> = Optional::some(String::new());
/// assert!(name.is_some());
/// assert_ne!(name, Optional::none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an `Optional` holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use satchel::optional::Optional;
    ///
    /// assert!(Optional::some(1).is_some());
    /// ```
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an empty `Optional`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use satchel::optional::Optional;
    ///
    /// let absent: Optional<i32> = Optional::none();
    /// assert!(absent.is_none());
    /// ```
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Creates an `Optional` from a nullable reference, copying the referent.
    ///
    /// A missing reference maps to `None`; a present one maps to `Some` of a
    /// clone of the value it points to.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use satchel::optional::Optional;
    ///
    /// let value = 0;
    /// assert_eq!(Optional::from_ref(Some(&value)), Optional::some(0));
    /// assert_eq!(Optional::<i32>::from_ref(None), Optional::none());
    /// ```
    #[inline]
    pub fn from_ref(reference: Option<&T>) -> Self
    where
        T: Clone,
    {
        match reference {
            Some(value) => Self::Some(value.clone()),
            None => Self::None,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Reference Access (Non-consuming)
    // =========================================================================

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use satchel::optional::Optional;
    ///
    /// let text = Optional::some("hello".to_string());
    /// let length = text.as_ref().map(|value| value.len());
    /// assert_eq!(length, Optional::some(5));
    /// assert!(text.is_some());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Returns a reference to the contained value, as a standard `Option`.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Returns a copy of the contained value as a standard `Option`, leaving
    /// `self` untouched.
    #[inline]
    pub fn to_option(&self) -> Option<T>
    where
        T: Clone,
    {
        self.value().cloned()
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Returns the contained value and `true`, or `T::default()` and `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use satchel::optional::Optional;
    ///
    /// assert_eq!(Optional::some(7).get(), (7, true));
    /// assert_eq!(Optional::<i32>::none().get(), (0, false));
    /// ```
    #[inline]
    pub fn get(self) -> (T, bool)
    where
        T: Default,
    {
        match self {
            Self::Some(value) => (value, true),
            Self::None => (T::default(), false),
        }
    }

    /// Returns the contained value, or `default_value` if this is `None`.
    #[inline]
    pub fn get_or_default(self, default_value: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default_value,
        }
    }

    /// Returns the contained value, or the result of `compute_value` if this
    /// is `None`.
    ///
    /// `compute_value` runs at most once, and only when no value is present.
    /// Its error, if any, is returned as is.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `compute_value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use satchel::optional::Optional;
    ///
    /// let cached: Result<i32, String> =
    ///     Optional::some(1).get_or_compute(|| Err("unused".into()));
    /// assert_eq!(cached, Ok(1));
    ///
    /// let computed: Result<i32, String> =
    ///     Optional::none().get_or_compute(|| Err("failed".into()));
    /// assert_eq!(computed, Err("failed".to_string()));
    /// ```
    #[inline]
    pub fn get_or_compute<E, F>(self, compute_value: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => compute_value(),
        }
    }

    /// Like [`get_or_compute`](Self::get_or_compute), for a computation that
    /// cannot fail.
    #[inline]
    pub fn get_or_compute_no_error<F>(self, compute_value: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => compute_value(),
        }
    }

    /// Converts into a standard `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Chains a computation that may itself produce nothing.
    ///
    /// `None` propagates without calling `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use satchel::optional::Optional;
    ///
    /// let parse = |text: &str| match text.parse::<i32>() {
    ///     Ok(number) => Optional::some(number),
    ///     Err(_) => Optional::none(),
    /// };
    ///
    /// assert_eq!(Optional::some("12").bind(parse), Optional::some(12));
    /// assert_eq!(Optional::some("x").bind(parse), Optional::none());
    /// assert_eq!(Optional::none().bind(parse), Optional::none());
    /// ```
    #[inline]
    pub fn bind<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Optional::None,
        }
    }

    /// Applies `function` to the contained value, if any.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Optional::Some(function(value)),
            Self::None => Optional::None,
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Optional<T> {
    /// Returns `None`, without requiring `T: Default`.
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// Converts a nullable value: `Some(v)` becomes `Some(v)`, `None` becomes `None`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        match optional {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }
}

impl<T> From<Vec<T>> for Optional<Vec<T>> {
    /// A concrete vector is always a present sequence, even when empty.
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::Some(elements)
    }
}

static_assertions::assert_impl_all!(Optional<i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Optional<String>: Send, Sync, Clone);
