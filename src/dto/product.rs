//! Product transfer object.

use super::require_name;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Body of `POST /products` and `PATCH /products/{id}`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDto {
    /// Product name
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    /// Optional description
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: String,
    /// Units in stock, 0 when omitted
    #[serde(deserialize_with = "super::null_as_default")]
    pub quantity: i32,
}

impl ProductDto {
    /// Checks the fields a product cannot be stored without.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] if the name is blank or the quantity is negative.
    pub fn validate(&self) -> Result<()> {
        require_name(&self.name)?;

        if self.quantity < 0 {
            return Err(Error::Validation {
                message: format!("quantity cannot be negative (got {})", self.quantity),
            });
        }

        Ok(())
    }
}
