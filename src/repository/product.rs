//! Product repository - list, build, save, find, update, and delete products.
//!
//! Building a product ([`ProductRepository::create`]) and persisting it
//! ([`ProductRepository::save`]) are separate steps: the identifier is generated
//! in memory and the row only exists once `save` succeeds.

use crate::{
    dto::ProductDto,
    entities::{Product, product},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use tracing::{debug, info};

/// Storage access for the `products` table.
#[derive(Clone, Debug)]
pub struct ProductRepository {
    db: DatabaseConnection,
}

impl ProductRepository {
    /// Creates a repository bound to the given connection pool.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every stored product in the database's default order.
    ///
    /// A row that fails to decode fails the whole call; no partial list is returned.
    ///
    /// # Errors
    /// Returns [`Error::Database`] if the query or any row decode fails.
    pub async fn all(&self) -> Result<Vec<product::Model>> {
        Product::find().all(&self.db).await.map_err(Into::into)
    }

    /// Builds a new product from a transfer object without touching storage.
    ///
    /// The description is only applied when the DTO carries a non-empty one.
    #[must_use]
    #[allow(clippy::unused_self, reason = "building entities is a repository operation")]
    pub fn create(&self, dto: &ProductDto) -> product::Model {
        let mut product = product::Model::new(dto.name.clone(), dto.quantity);
        if !dto.description.is_empty() {
            product.set_description(dto.description.clone());
        }
        product
    }

    /// Inserts the product as a new row.
    ///
    /// # Errors
    /// Returns [`Error::Database`] if the identifier already exists or the
    /// statement cannot be executed.
    pub async fn save(&self, product: &product::Model) -> Result<()> {
        let active = product::ActiveModel {
            id: Set(product.id.clone()),
            name: Set(product.name.clone()),
            description: Set(product.description.clone()),
            quantity: Set(product.quantity),
        };
        Product::insert(active)
            .exec_without_returning(&self.db)
            .await?;

        info!(id = %product.id, name = %product.name, "Saved product");
        Ok(())
    }

    /// Loads a single product by identifier.
    ///
    /// # Errors
    /// Returns [`Error::ProductNotFound`] when no row matches, or
    /// [`Error::Database`] if the query fails.
    pub async fn find(&self, id: &str) -> Result<product::Model> {
        debug!(id, "Looking up product");
        Product::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| Error::ProductNotFound { id: id.to_string() })
    }

    /// Overwrites every mutable field of the product, then reads it back.
    ///
    /// Fields left at their zero value in the DTO are written as such. Updating a
    /// missing row affects nothing and is only reported by the follow-up read.
    ///
    /// # Errors
    /// Returns [`Error::Database`] if the update fails, or
    /// [`Error::ProductNotFound`] if the row does not exist.
    pub async fn update(&self, id: &str, dto: &ProductDto) -> Result<product::Model> {
        let changes = product::ActiveModel {
            name: Set(dto.name.clone()),
            description: Set(dto.description.clone()),
            quantity: Set(dto.quantity),
            ..Default::default()
        };
        let result = Product::update_many()
            .set(changes)
            .filter(product::Column::Id.eq(id))
            .exec(&self.db)
            .await?;
        debug!(id, rows = result.rows_affected, "Updated product");

        self.find(id).await
    }

    /// Removes the product row.
    ///
    /// # Errors
    /// Returns [`Error::ProductNotFound`] when no row was deleted, or
    /// [`Error::Database`] if the statement fails.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let result = Product::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(Error::ProductNotFound { id: id.to_string() });
        }

        info!(id, "Deleted product");
        Ok(())
    }
}
