//! Unified error type for the Recipist API.
//!
//! Repositories and configuration code return [`Error`]; the HTTP layer maps each
//! variant to a status code in [`crate::api::response`].

use thiserror::Error;

/// Every failure the application can surface.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Connectivity, statement preparation, or execution failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Request body could not be decoded or failed field validation
    #[error("{message}")]
    Validation {
        /// Decoder or validation message shown to the client
        message: String,
    },

    /// No product row matched the identifier
    #[error("Product {id} does not exist")]
    ProductNotFound {
        /// Requested product identifier
        id: String,
    },

    /// No recipe row matched the identifier
    #[error("Recipe {id} does not exist")]
    RecipeNotFound {
        /// Requested recipe identifier
        id: String,
    },

    /// The product is not an ingredient of the recipe
    #[error("Ingredient {product_id} not included on recipe {recipe_id}")]
    IngredientNotFound {
        /// Product side of the association
        product_id: String,
        /// Recipe side of the association
        recipe_id: String,
    },

    /// I/O failure (config file, listener socket)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true for the variants that mean "no matching row".
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ProductNotFound { .. }
                | Self::RecipeNotFound { .. }
                | Self::IngredientNotFound { .. }
        )
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
