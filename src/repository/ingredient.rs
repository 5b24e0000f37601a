//! Ingredient repository - lookups of the recipe/product join table.
//!
//! There is no write path; rows are expected to be managed outside this service.

use crate::{
    entities::{Ingredient, ingredient},
    errors::{Error, Result},
};
use sea_orm::prelude::*;

/// Read-only storage access for the `ingredients` table.
#[derive(Clone, Debug)]
pub struct IngredientRepository {
    db: DatabaseConnection,
}

impl IngredientRepository {
    /// Creates a repository bound to the given connection pool.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds how much of a product a recipe uses.
    ///
    /// # Errors
    /// Returns [`Error::IngredientNotFound`] when the product is not part of the
    /// recipe, or [`Error::Database`] if the query fails.
    pub async fn find(&self, product_id: &str, recipe_id: &str) -> Result<ingredient::Model> {
        Ingredient::find_by_id((product_id.to_string(), recipe_id.to_string()))
            .one(&self.db)
            .await?
            .ok_or_else(|| Error::IngredientNotFound {
                product_id: product_id.to_string(),
                recipe_id: recipe_id.to_string(),
            })
    }
}
