use axum::extract::State;
use pantry_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::GenerateRecipesInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::GenerateRecipesValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipe",
    summary = "Generate recipes from ingredients",
    description = "Asks the generative model for recipe suggestions that use only the given ingredients, attaches a stock photo to each and stores them for the caller.",
    security(("bearer" = [])),
    request_body = GenerateRecipesValidator,
    responses(
        (status = 201, body = GenerateRecipesResponse),
        (status = 400, description = "No ingredients provided"),
        (status = 502, description = "The generative model failed or answered with malformed JSON")
    )
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<GenerateRecipesValidator>,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .generate_recipes(identity, GenerateRecipesInput::from(payload))
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(GenerateRecipesResponse { data: recipes }))
}
