//! HTTP interface - router, shared state, and request handlers.
//!
//! Handlers only translate between HTTP and the repositories; all storage access
//! goes through [`crate::repository`].

/// Per-entity request handlers
pub mod handlers;
/// JSON success and error envelopes
pub mod response;

use crate::{
    errors::Result,
    repository::{ProductRepository, RecipeRepository},
};
use axum::{Json, Router, routing::get};
use handlers::{products, recipes};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared data available to all handlers.
///
/// Cloned per request; the repositories share one connection pool.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Product storage
    pub products: ProductRepository,
    /// Recipe storage
    pub recipes: RecipeRepository,
}

impl AppState {
    /// Builds the repositories on top of one connection pool.
    #[must_use]
    pub fn new(database: DatabaseConnection) -> Self {
        Self {
            products: ProductRepository::new(database.clone()),
            recipes: RecipeRepository::new(database),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/:id",
            get(products::find_product)
                .patch(products::update_product)
                .delete(products::delete_product),
        )
        .route(
            "/recipes",
            get(recipes::list_recipes).post(recipes::create_recipe),
        )
        .route(
            "/recipes/:id",
            get(recipes::find_recipe)
                .patch(recipes::update_recipe)
                .delete(recipes::delete_recipe),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the API on `addr` until Ctrl-C is received.
pub async fn serve(state: AppState, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}

/// `GET /health`
async fn health() -> Json<Value> {
    Json(json!({ "ok": true }))
}
