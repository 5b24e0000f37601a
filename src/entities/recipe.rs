//! Recipe entity - A named preparation with an optional description.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Recipe database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    /// UUID v4 assigned at creation
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Name of the recipe (e.g., "Pancakes")
    pub name: String,
    /// Free-form description, empty when not provided
    pub description: String,
}

/// Recipes have no declared relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Builds an in-memory recipe with a freshly generated identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: String::new(),
        }
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }
}
