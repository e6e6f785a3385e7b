//! JSON and YAML encoding helpers.
//!
//! Thin wrappers over `serde_json` and `serde_yaml` that tag failures with
//! the format name. Every type in the crate that implements serde traits,
//! [`Optional`](crate::optional::Optional) included, goes through these
//! unchanged.
//!
//! # Examples
//!
//! ```rust
//! use satchel::codec;
//! use satchel::optional::Optional;
//!
//! let json = codec::to_json(&Optional::<i32>::none()).unwrap();
//! assert_eq!(json, "null");
//!
//! let restored: Optional<i32> = codec::from_json("5").unwrap();
//! assert_eq!(restored, Optional::some(5));
//! ```

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CodecError;

/// Encodes `value` as compact JSON.
///
/// # Errors
///
/// Returns [`CodecError::Serialize`] if `value` cannot be represented in JSON.
#[cfg(feature = "json")]
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CodecError> {
    tracing::trace!(format = "json", "serializing value");
    serde_json::to_string(value).map_err(|source| CodecError::Serialize {
        format: "json",
        source: Box::new(source),
    })
}

/// Decodes a `T` from JSON text.
///
/// # Errors
///
/// Returns [`CodecError::Deserialize`] if `text` is malformed or does not
/// match `T`.
#[cfg(feature = "json")]
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, CodecError> {
    tracing::trace!(format = "json", length = text.len(), "deserializing value");
    serde_json::from_str(text).map_err(|source| CodecError::Deserialize {
        format: "json",
        source: Box::new(source),
    })
}

/// Encodes `value` as a YAML document.
///
/// # Errors
///
/// Returns [`CodecError::Serialize`] if `value` cannot be represented in YAML.
#[cfg(feature = "yaml")]
pub fn to_yaml<T: Serialize + ?Sized>(value: &T) -> Result<String, CodecError> {
    tracing::trace!(format = "yaml", "serializing value");
    serde_yaml::to_string(value).map_err(|source| CodecError::Serialize {
        format: "yaml",
        source: Box::new(source),
    })
}

/// Decodes a `T` from a YAML document.
///
/// # Errors
///
/// Returns [`CodecError::Deserialize`] if `text` is malformed or does not
/// match `T`.
#[cfg(feature = "yaml")]
pub fn from_yaml<T: DeserializeOwned>(text: &str) -> Result<T, CodecError> {
    tracing::trace!(format = "yaml", length = text.len(), "deserializing value");
    serde_yaml::from_str(text).map_err(|source| CodecError::Deserialize {
        format: "yaml",
        source: Box::new(source),
    })
}
