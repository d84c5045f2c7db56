use axum::extract::State;
use pantry_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::ListRecipesInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::ListRecipesParams,
        server::{
            api_entities::{
                api_error::{ApiError, ApiQuery},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ListRecipesResponse {
    pub data: Vec<Recipe>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "List saved recipes",
    description = "The caller's recipes, newest first.",
    security(("bearer" = [])),
    params(ListRecipesParams),
    responses(
        (status = 200, body = ListRecipesResponse)
    )
)]
pub async fn list_recipes(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ApiQuery(params): ApiQuery<ListRecipesParams>,
) -> Result<Response<ListRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .list_recipes(
            identity,
            ListRecipesInput {
                offset: params.offset,
                limit: params.limit,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ListRecipesResponse { data: recipes }))
}
