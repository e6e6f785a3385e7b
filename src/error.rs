//! Error types shared across the crate.
//!
//! - [`CodecError`]: a JSON or YAML encoding step failed.
//! - [`FoldError`]: a fallible fold stopped early; carries the partial result.
//!
//! Absence is never an error: lookups return
//! [`Optional`](crate::optional::Optional) instead. Errors raised by
//! caller-supplied functions in the sequence combinators are returned
//! unchanged.

use std::fmt;

use thiserror::Error;

/// Failure while encoding or decoding a value through [`crate::codec`].
///
/// `format` names the wire format (`"json"` or `"yaml"`); `source` is the
/// format's own error, which pinpoints the failing token or the inner value
/// that could not be parsed.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The value could not be encoded.
    #[error("failed to serialize value as {format}")]
    Serialize {
        /// The wire format.
        format: &'static str,
        /// The underlying format error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// The input was malformed for the requested type.
    #[error("failed to deserialize {format}: {source}")]
    Deserialize {
        /// The wire format.
        format: &'static str,
        /// The underlying format error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl CodecError {
    /// Returns the wire format that produced this error.
    pub const fn format(&self) -> &'static str {
        match self {
            Self::Serialize { format, .. } | Self::Deserialize { format, .. } => format,
        }
    }

    /// Returns `true` if decoding, rather than encoding, failed.
    pub const fn is_deserialize(&self) -> bool {
        matches!(self, Self::Deserialize { .. })
    }
}

/// Returned by the fallible folds when the step function fails.
///
/// `accumulator` holds the folded value as it was just before the failing
/// step, so callers can inspect how far the fold got.
///
/// # Examples
///
/// ```rust
/// use satchel::slices::try_fold;
///
/// let outcome = try_fold(vec![1, 2, -1, 4], 0, |total: &i32, value: i32| {
///     if value < 0 { Err("negative") } else { Ok(*total + value) }
/// });
///
/// let error = outcome.unwrap_err();
/// assert_eq!(error.accumulator, 3);
/// assert_eq!(error.error, "negative");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldError<A, E> {
    /// The accumulator before the failing step.
    pub accumulator: A,
    /// The error returned by the step function.
    pub error: E,
}

impl<A, E> FoldError<A, E> {
    /// Discards the partial accumulator and returns the error.
    pub fn into_error(self) -> E {
        self.error
    }
}

impl<A, E: fmt::Display> fmt::Display for FoldError<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "fold stopped early: {}", self.error)
    }
}

impl<A: fmt::Debug, E: std::error::Error + 'static> std::error::Error for FoldError<A, E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
