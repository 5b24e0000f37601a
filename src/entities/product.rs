//! Product entity - Represents a stock item that recipes draw from.
//!
//! Each product has a generated identifier, a name, an optional description, and
//! a non-negative quantity on hand. Identifiers are generated here, in [`Model::new`],
//! and never by the storage layer.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// UUID v4 assigned at creation, never reassigned
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    /// Human-readable name (e.g., "Flour", "Eggs")
    pub name: String,
    /// Free-form description, empty when not provided
    pub description: String,
    /// Units currently in stock
    pub quantity: i32,
}

/// Products have no declared relations; the ingredients table carries no foreign keys
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Builds an in-memory product with a freshly generated identifier.
    ///
    /// The description starts empty; nothing is persisted until the repository saves it.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description: String::new(),
            quantity,
        }
    }

    /// Replaces the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Takes `quantity` units out of stock.
    ///
    /// Requests larger than the current stock (or negative ones) leave the
    /// quantity unchanged and report nothing.
    pub fn consume(&mut self, quantity: i32) {
        if quantity >= 0 && quantity <= self.quantity {
            self.quantity -= quantity;
        }
    }
}
