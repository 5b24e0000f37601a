//! Database configuration module for Recipist.
//!
//! This module handles the database connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with
//! `Schema::create_table_from_entity`, so the schema always matches the Rust
//! structs without hand-written SQL. Both `SQLite` and Postgres URLs are accepted.

use crate::entities::{Ingredient, Product, Recipe};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use tracing::debug;

/// Establishes a pooled connection to the database at `database_url`.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the products, recipes, and ingredients tables if they do not exist yet.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    create_table(db, Product).await?;
    create_table(db, Recipe).await?;
    create_table(db, Ingredient).await?;
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);
    debug!(table = entity.table_name(), "Creating table");

    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();

    db.execute(builder.build(&table)).await?;
    Ok(())
}
