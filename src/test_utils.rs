//! Shared test utilities for Recipist.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    dto::{ProductDto, RecipeDto},
    entities::{self, Ingredient},
    errors::Result,
    repository::{ProductRepository, RecipeRepository},
};
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Set};

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// A real connection whose tables have been dropped, so every query and
/// statement fails with a database error.
///
/// Used to exercise the infrastructure-error paths (500 responses).
pub async fn failing_db() -> Result<DatabaseConnection> {
    let db = setup_test_db().await?;
    db.execute_unprepared("DROP TABLE ingredients").await?;
    db.execute_unprepared("DROP TABLE recipes").await?;
    db.execute_unprepared("DROP TABLE products").await?;
    Ok(db)
}

/// Creates and saves a product with an empty description.
pub async fn create_test_product(
    repo: &ProductRepository,
    name: &str,
    quantity: i32,
) -> Result<entities::product::Model> {
    let product = repo.create(&ProductDto {
        name: name.to_string(),
        description: String::new(),
        quantity,
    });
    repo.save(&product).await?;
    Ok(product)
}

/// Creates and saves a recipe with an empty description.
pub async fn create_test_recipe(
    repo: &RecipeRepository,
    name: &str,
) -> Result<entities::recipe::Model> {
    let recipe = repo.create(&RecipeDto {
        name: name.to_string(),
        description: String::new(),
    });
    repo.save(&recipe).await?;
    Ok(recipe)
}

/// Inserts an ingredient row directly; the application itself has no write path.
pub async fn insert_test_ingredient(
    db: &DatabaseConnection,
    product_id: &str,
    recipe_id: &str,
    quantity: i32,
) -> Result<()> {
    let ingredient = entities::ingredient::ActiveModel {
        product_id: Set(product_id.to_string()),
        recipe_id: Set(recipe_id.to_string()),
        quantity: Set(quantity),
    };
    Ingredient::insert(ingredient)
        .exec_without_returning(db)
        .await?;
    Ok(())
}

/// Sends one request through the router and returns the status and raw body.
pub async fn call(
    app: &axum::Router,
    method: axum::http::Method,
    uri: &str,
    body: Option<&str>,
) -> (axum::http::StatusCode, Vec<u8>) {
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    let body = body.map_or_else(axum::body::Body::empty, |b| {
        axum::body::Body::from(b.to_string())
    });
    let request = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap_or_else(|e| panic!("invalid test request: {e}"));

    let response = app
        .clone()
        .oneshot(request)
        .await
        .unwrap_or_else(|e| match e {});
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .map(|collected| collected.to_bytes().to_vec())
        .unwrap_or_else(|e| panic!("failed to read response body: {e}"));

    (status, bytes)
}
