//! Entity module - Contains all SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod ingredient;
pub mod product;
pub mod recipe;

// Re-export specific types to avoid conflicts
pub use ingredient::{Column as IngredientColumn, Entity as Ingredient, Model as IngredientModel};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use recipe::{Column as RecipeColumn, Entity as Recipe, Model as RecipeModel};
