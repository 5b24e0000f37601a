//! Transfer objects decoded from request bodies.
//!
//! DTOs mirror the writable fields of an entity. Unknown JSON fields are ignored
//! and missing or `null` ones fall back to their zero value, so a partial body is always
//! accepted by the decoder and only rejected by [`ProductDto::validate`] /
//! [`RecipeDto::validate`].

pub mod product;
pub mod recipe;

pub use product::ProductDto;
pub use recipe::RecipeDto;

use crate::errors::{Error, Result};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// Decodes a raw request body into a transfer object.
///
/// # Errors
/// Returns [`Error::Validation`] carrying the decoder message when the body is not
/// JSON or its top-level value is not an object of the expected shape.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let invalid = |e: serde_json::Error| Error::Validation {
        message: e.to_string(),
    };

    let value: Value = serde_json::from_slice(body).map_err(invalid)?;
    if !value.is_object() {
        return Err(Error::Validation {
            message: "request body must be a JSON object".to_string(),
        });
    }
    serde_json::from_value(value).map_err(invalid)
}

/// Reads an explicit `null` as the field's zero value, like an omitted field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn require_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "name cannot be empty".to_string(),
        });
    }
    Ok(())
}
