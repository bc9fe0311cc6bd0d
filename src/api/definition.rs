//! Conversion of request bodies into typed definitions.
//!
//! Create and publish operations take typed definitions whose mandatory
//! fields are plain struct fields. They also accept a raw
//! [`serde_json::Value`]; converting one checks the mandatory keys first and
//! fails with [`Error::InvalidInput`] naming the first missing key.

use crate::error::Error;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Conversion into a typed request definition.
///
/// Implemented for every definition type itself (infallible) and for
/// [`serde_json::Value`] (validated).
pub trait IntoDefinition<T> {
    fn into_definition(self) -> Result<T, Error>;
}

impl<T> IntoDefinition<T> for T {
    fn into_definition(self) -> Result<T, Error> {
        Ok(self)
    }
}

/// Returns `true` when `key` is missing from `object` or set to `null`.
pub(crate) fn is_absent(object: &serde_json::Map<String, Value>, key: &str) -> bool {
    object.get(key).map_or(true, Value::is_null)
}

/// Deserializes `value` into `T` after checking that every key in `required`
/// is present and not null.
///
/// `context` prefixes error messages, e.g. `"Error creating exchange"`.
pub(crate) fn from_json<T: DeserializeOwned>(
    value: Value,
    context: &str,
    subject: &str,
    required: &[&str],
) -> Result<T, Error> {
    let object = value.as_object().ok_or_else(|| {
        Error::InvalidInput(format!("{}: {} must be a JSON object", context, subject))
    })?;

    if let Some(missing) = required.iter().find(|key| is_absent(object, key)) {
        return Err(Error::InvalidInput(format!(
            "{}: {} key '{}' is mandatory",
            context, subject, missing
        )));
    }

    serde_json::from_value(value).map_err(|e| Error::InvalidInput(format!("{}: {}", context, e)))
}

/// Implements [`IntoDefinition`] for `Value` with a fixed set of mandatory keys.
macro_rules! json_definition {
    ($ty:ty, $context:literal, $subject:literal, [$($key:literal),* $(,)?]) => {
        impl $crate::api::definition::IntoDefinition<$ty> for serde_json::Value {
            fn into_definition(self) -> Result<$ty, $crate::error::Error> {
                $crate::api::definition::from_json(self, $context, $subject, &[$($key),*])
            }
        }
    };
}

pub(crate) use json_definition;
