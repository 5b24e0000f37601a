//! Ingredient entity - Join record between a recipe and a product.
//!
//! Only read access exists; rows are keyed by the `(product_id, recipe_id)` pair.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ingredient database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    /// Product used by the recipe
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: String,
    /// Recipe that uses the product
    #[sea_orm(primary_key, auto_increment = false)]
    pub recipe_id: String,
    /// Units of the product the recipe needs
    pub quantity: i32,
}

/// No declared relations, so no foreign keys are generated
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
