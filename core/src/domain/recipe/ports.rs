use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{PhotoCandidate, Recipe},
        value_objects::{
            GenerateRecipesInput, GetRecipeInput, ListRecipesInput, RecipeFilter,
            SaveRecipeInput, SaveRecipeOutcome,
        },
    },
};

/// Repository trait for recipe records
#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn create_recipe(
        &self,
        recipe: Recipe,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn get_by_user(
        &self,
        user_id: Uuid,
        filter: RecipeFilter,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    /// A recipe owned by `user_id` with the same title and ingredient list.
    fn find_duplicate(
        &self,
        user_id: Uuid,
        title: String,
        ingredients: Vec<String>,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;
}

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Stock photo lookup
#[cfg_attr(test, mockall::automock)]
pub trait ImageSearchClient: Send + Sync {
    fn search_photos(
        &self,
        query: String,
        per_page: u32,
    ) -> impl Future<Output = Result<Vec<PhotoCandidate>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipes(
        &self,
        identity: Identity,
        input: GenerateRecipesInput,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn list_recipes(
        &self,
        identity: Identity,
        input: ListRecipesInput,
    ) -> impl Future<Output = Result<Vec<Recipe>, CoreError>> + Send;

    fn get_recipe(
        &self,
        identity: Identity,
        input: GetRecipeInput,
    ) -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn save_recipe(
        &self,
        identity: Identity,
        input: SaveRecipeInput,
    ) -> impl Future<Output = Result<SaveRecipeOutcome, CoreError>> + Send;
}
