//! Product handlers.
//!
//! | Route | Success | Failure |
//! |---|---|---|
//! | `GET /products` | 200 list | 500 |
//! | `POST /products` | 201 created product | 400 bad body, 500 |
//! | `GET /products/:id` | 200 product | 404, 500 |
//! | `PATCH /products/:id` | 200 updated product | 400, 404, 500 |
//! | `DELETE /products/:id` | 204 | 404, 500 |

use crate::{
    api::{
        AppState,
        response::{no_content, send},
    },
    dto::{self, ProductDto},
    errors::Result,
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

/// `GET /products`
pub async fn list_products(State(state): State<AppState>) -> Result<Response> {
    let products = state.products.all().await?;
    Ok(send(StatusCode::OK, &products))
}

/// `POST /products`
///
/// The body is decoded regardless of its `Content-Type`.
pub async fn create_product(State(state): State<AppState>, body: Bytes) -> Result<Response> {
    let dto: ProductDto = dto::decode(&body)?;
    dto.validate()?;

    let product = state.products.create(&dto);
    state.products.save(&product).await?;

    Ok(send(StatusCode::CREATED, &product))
}

/// `GET /products/:id`
pub async fn find_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let product = state.products.find(&id).await?;
    Ok(send(StatusCode::OK, &product))
}

/// `PATCH /products/:id`
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response> {
    let dto: ProductDto = dto::decode(&body)?;
    dto.validate()?;

    let product = state.products.update(&id, &dto).await?;
    Ok(send(StatusCode::OK, &product))
}

/// `DELETE /products/:id`
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    state.products.delete(&id).await?;
    Ok(no_content())
}
