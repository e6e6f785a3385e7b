//! Serde support for `Optional<T>`.
//!
//! The encoding is the one serde uses for `Option<T>`, so an `Optional<T>`
//! and a nullable `T` are interchangeable on the wire in every format.

use std::fmt;
use std::marker::PhantomData;

use super::Optional;

// =============================================================================
// Serialize
// =============================================================================

impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Some(value) => serializer.serialize_some(value),
            Self::None => serializer.serialize_none(),
        }
    }
}

// =============================================================================
// Deserialize
// =============================================================================

struct OptionalVisitor<T> {
    marker: PhantomData<T>,
}

impl<T> OptionalVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T> serde::de::Visitor<'de> for OptionalVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = Optional<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("null or a value")
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Optional::None)
    }

    // Formats without a dedicated null token report absence as unit.
    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Optional::None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Optional::Some)
    }
}

impl<'de, T> serde::Deserialize<'de> for Optional<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_option(OptionalVisitor::new())
    }
}
