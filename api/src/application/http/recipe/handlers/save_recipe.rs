use axum::extract::State;
use pantry_core::domain::recipe::{
    entities::Recipe,
    ports::RecipeService,
    value_objects::{SaveRecipeInput, SaveRecipeOutcome},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{
            api_error::{ApiError, ApiPath},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SavedRecipe {
    /// `saved` or `already_saved`.
    #[schema(example = "saved")]
    pub status: String,
    #[schema(example = "Recipe saved successfully!")]
    pub message: String,
    pub recipe: Recipe,
}

impl From<SaveRecipeOutcome> for SavedRecipe {
    fn from(outcome: SaveRecipeOutcome) -> Self {
        Self {
            status: outcome.as_str().to_string(),
            message: outcome.message().to_string(),
            recipe: outcome.into_recipe(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SaveRecipeResponse {
    pub data: SavedRecipe,
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/save",
    tag = "recipe",
    summary = "Save a recipe",
    description = "Copies the recipe into the caller's collection. Saving a recipe the caller already has is a no-op reported as `already_saved`.",
    security(("bearer" = [])),
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 201, body = SaveRecipeResponse, description = "Recipe saved"),
        (status = 200, body = SaveRecipeResponse, description = "Recipe was already saved"),
        (status = 404, description = "Recipe not found")
    )
)]
pub async fn save_recipe(
    ApiPath(recipe_id): ApiPath<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<SaveRecipeResponse>, ApiError> {
    let outcome = state
        .service
        .save_recipe(identity, SaveRecipeInput { recipe_id })
        .await
        .map_err(ApiError::from)?;

    let created = matches!(outcome, SaveRecipeOutcome::Saved(_));
    let response = SaveRecipeResponse {
        data: SavedRecipe::from(outcome),
    };

    if created {
        Ok(Response::Created(response))
    } else {
        Ok(Response::OK(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::domain::recipe::entities::RecipeConfig;

    fn recipe() -> Recipe {
        Recipe::new(RecipeConfig {
            user_id: Uuid::new_v4(),
            title: "Fried rice".to_string(),
            time: 20,
            cuisine: "Chinese".to_string(),
            servings: 2,
            ingredients: vec!["rice".to_string(), "egg".to_string()],
            instructions: vec!["Fry everything.".to_string()],
            image_url: None,
        })
    }

    #[test]
    fn outcome_carries_status_and_message() {
        let saved = SavedRecipe::from(SaveRecipeOutcome::Saved(recipe()));
        assert_eq!(saved.status, "saved");
        assert_eq!(saved.message, "Recipe saved successfully!");

        let again = SavedRecipe::from(SaveRecipeOutcome::AlreadySaved(recipe()));
        assert_eq!(again.status, "already_saved");
        assert_eq!(again.message, "This recipe is already saved.");
        assert_eq!(again.recipe.title, "Fried rice");
    }
}
