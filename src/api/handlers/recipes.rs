//! Recipe handlers. Same contract as the product routes.

use crate::{
    api::{
        AppState,
        response::{no_content, send},
    },
    dto::{self, RecipeDto},
    errors::Result,
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

/// `GET /recipes`
pub async fn list_recipes(State(state): State<AppState>) -> Result<Response> {
    let recipes = state.recipes.all().await?;
    Ok(send(StatusCode::OK, &recipes))
}

/// `POST /recipes`
pub async fn create_recipe(State(state): State<AppState>, body: Bytes) -> Result<Response> {
    let dto: RecipeDto = dto::decode(&body)?;
    dto.validate()?;

    let recipe = state.recipes.create(&dto);
    state.recipes.save(&recipe).await?;

    Ok(send(StatusCode::CREATED, &recipe))
}

/// `GET /recipes/:id`
pub async fn find_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let recipe = state.recipes.find(&id).await?;
    Ok(send(StatusCode::OK, &recipe))
}

/// `PATCH /recipes/:id`
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response> {
    let dto: RecipeDto = dto::decode(&body)?;
    dto.validate()?;

    let recipe = state.recipes.update(&id, &dto).await?;
    Ok(send(StatusCode::OK, &recipe))
}

/// `DELETE /recipes/:id`
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    state.recipes.delete(&id).await?;
    Ok(no_content())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use crate::api::{AppState, router};
    use crate::errors::Result;
    use crate::test_utils::*;
    use axum::http::{Method, StatusCode};
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_malformed_body_is_400() -> Result<()> {
        let app = router(AppState::new(setup_test_db().await?));

        let (status, body) = call(&app, Method::POST, "/recipes", Some("not-json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: Value = serde_json::from_slice(&body).unwrap();
        assert!(!error["Error"].as_str().unwrap().is_empty());

        // Nothing was stored
        let (_, body) = call(&app, Method::GET, "/recipes", None).await;
        assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!([]));

        Ok(())
    }

    #[tokio::test]
    async fn test_null_description_is_stored_empty() -> Result<()> {
        let app = router(AppState::new(setup_test_db().await?));

        let (status, body) = call(
            &app,
            Method::POST,
            "/recipes",
            Some(r#"{"name":"Bread","description":null}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let created: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(created["description"], "");

        Ok(())
    }

    #[tokio::test]
    async fn test_recipe_lifecycle() -> Result<()> {
        let app = router(AppState::new(setup_test_db().await?));

        let (status, body) = call(
            &app,
            Method::POST,
            "/recipes",
            Some(r#"{"name":"Bread","description":"Sourdough","servings":4}"#),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let created: Value = serde_json::from_slice(&body).unwrap();
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(
            created,
            json!({ "id": &id, "name": "Bread", "description": "Sourdough" })
        );

        // PATCH without a description clears it
        let (status, body) = call(
            &app,
            Method::PATCH,
            &format!("/recipes/{id}"),
            Some(r#"{"name":"Rye bread"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!({ "id": &id, "name": "Rye bread", "description": "" })
        );

        let (status, _) = call(&app, Method::DELETE, &format!("/recipes/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = call(&app, Method::DELETE, &format!("/recipes/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_failures_are_500() -> Result<()> {
        let app = router(AppState::new(failing_db().await?));

        let (status, _) = call(&app, Method::GET, "/recipes", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, _) = call(&app, Method::POST, "/recipes", Some(r#"{"name":"Bread"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, _) = call(&app, Method::GET, "/recipes/abc", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, _) = call(
            &app,
            Method::PATCH,
            "/recipes/abc",
            Some(r#"{"name":"Bread"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, _) = call(&app, Method::DELETE, "/recipes/abc", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}
