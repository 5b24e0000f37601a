//! Recipe repository - list, build, save, find, update, and delete recipes.

use crate::{
    dto::RecipeDto,
    entities::{Recipe, recipe},
    errors::{Error, Result},
};
use sea_orm::{Set, prelude::*};
use tracing::{debug, info};

/// Storage access for the `recipes` table.
#[derive(Clone, Debug)]
pub struct RecipeRepository {
    db: DatabaseConnection,
}

impl RecipeRepository {
    /// Creates a repository bound to the given connection pool.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns every stored recipe in the database's default order.
    ///
    /// # Errors
    /// Returns [`Error::Database`] if the query or any row decode fails; no
    /// partial list is returned.
    pub async fn all(&self) -> Result<Vec<recipe::Model>> {
        Recipe::find().all(&self.db).await.map_err(Into::into)
    }

    /// Builds a new recipe from a transfer object without touching storage.
    #[must_use]
    #[allow(clippy::unused_self, reason = "building entities is a repository operation")]
    pub fn create(&self, dto: &RecipeDto) -> recipe::Model {
        let mut recipe = recipe::Model::new(dto.name.clone());
        if !dto.description.is_empty() {
            recipe.set_description(dto.description.clone());
        }
        recipe
    }

    /// Inserts the recipe as a new row.
    ///
    /// # Errors
    /// Returns [`Error::Database`] if the identifier already exists or the
    /// statement cannot be executed.
    pub async fn save(&self, recipe: &recipe::Model) -> Result<()> {
        let active = recipe::ActiveModel {
            id: Set(recipe.id.clone()),
            name: Set(recipe.name.clone()),
            description: Set(recipe.description.clone()),
        };
        Recipe::insert(active)
            .exec_without_returning(&self.db)
            .await?;

        info!(id = %recipe.id, name = %recipe.name, "Saved recipe");
        Ok(())
    }

    /// Loads a single recipe by identifier.
    ///
    /// # Errors
    /// Returns [`Error::RecipeNotFound`] when no row matches.
    pub async fn find(&self, id: &str) -> Result<recipe::Model> {
        debug!(id, "Looking up recipe");
        Recipe::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| Error::RecipeNotFound { id: id.to_string() })
    }

    /// Overwrites name and description, then reads the recipe back.
    ///
    /// # Errors
    /// Returns [`Error::Database`] if the update fails, or
    /// [`Error::RecipeNotFound`] if the row does not exist.
    pub async fn update(&self, id: &str, dto: &RecipeDto) -> Result<recipe::Model> {
        let changes = recipe::ActiveModel {
            name: Set(dto.name.clone()),
            description: Set(dto.description.clone()),
            ..Default::default()
        };
        Recipe::update_many()
            .set(changes)
            .filter(recipe::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        self.find(id).await
    }

    /// Removes the recipe row. Ingredient rows referencing it are left alone.
    ///
    /// # Errors
    /// Returns [`Error::RecipeNotFound`] when no row was deleted.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let result = Recipe::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(Error::RecipeNotFound { id: id.to_string() });
        }

        info!(id, "Deleted recipe");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn pancakes() -> RecipeDto {
        RecipeDto {
            name: "Pancakes".to_string(),
            description: "Sunday breakfast".to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_then_find() -> Result<()> {
        let repo = RecipeRepository::new(setup_test_db().await?);

        let recipe = repo.create(&pancakes());
        assert_eq!(recipe.description, "Sunday breakfast");
        repo.save(&recipe).await?;

        assert_eq!(repo.find(&recipe.id).await?, recipe);
        assert_eq!(repo.all().await?, vec![recipe]);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_clears_omitted_description() -> Result<()> {
        let repo = RecipeRepository::new(setup_test_db().await?);
        let recipe = create_test_recipe(&repo, "Pancakes").await?;

        let updated = repo
            .update(
                &recipe.id,
                &RecipeDto {
                    name: "Crepes".to_string(),
                    description: String::new(),
                },
            )
            .await?;
        assert_eq!(updated.name, "Crepes");
        assert_eq!(updated.description, "");
        assert_eq!(repo.find(&recipe.id).await?, updated);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_and_delete_missing() -> Result<()> {
        let repo = RecipeRepository::new(setup_test_db().await?);

        assert!(matches!(
            repo.update("missing", &pancakes()).await,
            Err(Error::RecipeNotFound { .. })
        ));
        assert!(matches!(
            repo.delete("missing").await,
            Err(Error::RecipeNotFound { .. })
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_then_find() -> Result<()> {
        let repo = RecipeRepository::new(setup_test_db().await?);
        let recipe = create_test_recipe(&repo, "Pancakes").await?;

        repo.delete(&recipe.id).await?;
        assert!(matches!(
            repo.find(&recipe.id).await,
            Err(Error::RecipeNotFound { .. })
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_failures_surface_as_database_errors() -> Result<()> {
        let repo = RecipeRepository::new(failing_db().await?);

        assert!(matches!(repo.all().await, Err(Error::Database(_))));
        assert!(matches!(repo.find("x").await, Err(Error::Database(_))));
        assert!(matches!(
            repo.update("x", &pancakes()).await,
            Err(Error::Database(_))
        ));
        assert!(matches!(repo.delete("x").await, Err(Error::Database(_))));
        Ok(())
    }
}
