//! Recipe transfer object.

use super::require_name;
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// Body of `POST /recipes` and `PATCH /recipes/{id}`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeDto {
    /// Recipe name
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    /// Optional description
    #[serde(deserialize_with = "super::null_as_default")]
    pub description: String,
}

impl RecipeDto {
    /// # Errors
    /// Returns [`crate::errors::Error::Validation`] if the name is blank.
    pub fn validate(&self) -> Result<()> {
        require_name(&self.name)
    }
}
