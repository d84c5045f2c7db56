use axum::{
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
};
use pantry_core::domain::recipe::{
    ports::RecipeService,
    value_objects::{GenerateRecipesInput, UploadedImage},
};
use validator::Validate;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::{
            handlers::generate_recipes::GenerateRecipesResponse,
            validators::GenerateRecipesValidator,
        },
        server::{
            api_entities::{
                api_error::{ApiError, validation_message},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

fn parse_optional_number(field: &str, value: &str) -> Result<Option<i32>, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    value
        .parse::<i32>()
        .map(Some)
        .map_err(|_| ApiError::BadRequest(format!("{} must be a whole number", field)))
}

fn multipart_error(context: &str, error: MultipartError) -> ApiError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge(format!(
            "Image too large. Max size is {} bytes",
            MAX_IMAGE_SIZE
        ));
    }

    ApiError::BadRequest(format!("{}: {}", context, error.body_text()))
}

fn non_empty(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

#[utoipa::path(
    post,
    path = "/generate/image",
    tag = "recipe",
    summary = "Generate recipes from a photo of ingredients",
    description = "Multipart form with an optional `image` file plus the optional text fields `ingredients`, `time`, `servings` and `cuisine`. Ingredients read from the photo replace the typed ones.",
    security(("bearer" = [])),
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, body = GenerateRecipesResponse),
        (status = 400, description = "No ingredients provided"),
        (status = 413, description = "Image larger than 10 MiB"),
        (status = 422, description = "No ingredients could be read from the image")
    )
)]
pub async fn generate_recipes_from_image(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    mut multipart: Multipart,
) -> Result<Response<GenerateRecipesResponse>, ApiError> {
    let mut form = GenerateRecipesValidator::default();
    let mut image: Option<UploadedImage> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Failed to read multipart field", e))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let mime_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_IMAGE_MIME_TYPE)
                    .to_string();
                if !mime_type.starts_with("image/") {
                    return Err(ApiError::BadRequest(format!(
                        "Unsupported image type: {}",
                        mime_type
                    )));
                }

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error("Failed to read image", e))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::PayloadTooLarge(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                if !data.is_empty() {
                    image = Some(UploadedImage {
                        data: data.to_vec(),
                        mime_type,
                    });
                }
            }
            "ingredients" | "time" | "servings" | "cuisine" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(&format!("Failed to read {}", name), e))?;

                match name.as_str() {
                    "ingredients" => form.ingredients = non_empty(value),
                    "time" => form.time = parse_optional_number("time", &value)?,
                    "servings" => form.servings = parse_optional_number("servings", &value)?,
                    _ => form.cuisine = non_empty(value),
                }
            }
            _ => {}
        }
    }

    form.validate()
        .map_err(|e| ApiError::UnProcessableEntity(validation_message(&e)))?;

    let input = GenerateRecipesInput {
        image,
        ..GenerateRecipesInput::from(form)
    };

    let recipes = state
        .service
        .generate_recipes(identity, input)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(GenerateRecipesResponse { data: recipes }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_numbers_are_absent() {
        assert_eq!(parse_optional_number("time", "  ").unwrap(), None);
        assert_eq!(parse_optional_number("time", " 45 ").unwrap(), Some(45));
    }

    #[test]
    fn non_numeric_values_are_rejected() {
        let error = parse_optional_number("servings", "four").unwrap_err();
        assert_eq!(
            error,
            ApiError::BadRequest("servings must be a whole number".to_string())
        );
    }
}
