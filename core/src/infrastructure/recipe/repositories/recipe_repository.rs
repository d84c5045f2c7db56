use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use serde_json::Value;
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{entities::Recipe, ports::RecipeRepository, value_objects::RecipeFilter},
    },
    entity::recipes::{
        ActiveModel as RecipeActiveModel, Column as RecipeColumn, Entity as RecipeEntity,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn string_list(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn create_recipe(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let created = RecipeEntity::insert(RecipeActiveModel {
            id: Set(recipe.id),
            user_id: Set(recipe.user_id),
            title: Set(recipe.title.clone()),
            time: Set(recipe.time),
            cuisine: Set(recipe.cuisine.clone()),
            servings: Set(recipe.servings),
            ingredients: Set(string_list(&recipe.ingredients)),
            instructions: Set(string_list(&recipe.instructions)),
            image_url: Set(recipe.image_url.clone()),
            created_at: Set(recipe.created_at.fixed_offset()),
            updated_at: Set(recipe.updated_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Recipe::from)
        .map_err(|e| {
            error!("Failed to create recipe: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let recipe = RecipeEntity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe: {}", e);
                CoreError::InternalServerError
            })?
            .map(Recipe::from);

        Ok(recipe)
    }

    async fn get_by_user(
        &self,
        user_id: Uuid,
        filter: RecipeFilter,
    ) -> Result<Vec<Recipe>, CoreError> {
        let recipes = RecipeEntity::find()
            .filter(RecipeColumn::UserId.eq(user_id))
            .order_by_desc(RecipeColumn::CreatedAt)
            .order_by_desc(RecipeColumn::Id)
            .offset(filter.offset)
            .limit(filter.limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch recipes by user: {}", e);
                CoreError::InternalServerError
            })?
            .iter()
            .map(Recipe::from)
            .collect();

        Ok(recipes)
    }

    async fn find_duplicate(
        &self,
        user_id: Uuid,
        title: String,
        ingredients: Vec<String>,
    ) -> Result<Option<Recipe>, CoreError> {
        let recipe = RecipeEntity::find()
            .filter(RecipeColumn::UserId.eq(user_id))
            .filter(RecipeColumn::Title.eq(title))
            .filter(RecipeColumn::Ingredients.eq(string_list(&ingredients)))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to look up duplicate recipe: {}", e);
                CoreError::InternalServerError
            })?
            .map(Recipe::from);

        Ok(recipe)
    }
}
