//! Repository layer - the only code allowed to issue storage queries.
//!
//! One repository per entity family. Each owns a clone of the pooled
//! [`sea_orm::DatabaseConnection`] handed to its constructor, and every storage
//! method runs a single autocommit statement.

/// Ingredient lookups (read-only)
pub mod ingredient;
/// Product CRUD
pub mod product;
/// Recipe CRUD
pub mod recipe;

pub use ingredient::IngredientRepository;
pub use product::ProductRepository;
pub use recipe::RecipeRepository;
