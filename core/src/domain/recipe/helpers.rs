use serde_json::Value;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{GeneratedRecipe, PhotoCandidate},
};

/// Pull the list stored under `key`, or the document itself when the model
/// answered with a bare list.
fn take_list(document: Value, key: &str) -> Option<Vec<Value>> {
    match document {
        Value::Array(items) => Some(items),
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}

/// Parse the generation response into recipes, one per list entry.
pub fn parse_generated_recipes(raw_response: &str) -> Result<Vec<GeneratedRecipe>, CoreError> {
    let document: Value = serde_json::from_str(raw_response).map_err(|e| {
        error!("Failed to parse LLM response: {}", e);
        CoreError::RecipeGenerationFailed
    })?;

    let items = take_list(document, "recipes").ok_or_else(|| {
        error!("LLM response holds no recipe list");
        CoreError::RecipeGenerationFailed
    })?;

    if items.is_empty() {
        error!("LLM response holds an empty recipe list");
        return Err(CoreError::RecipeGenerationFailed);
    }

    items
        .into_iter()
        .map(|item| {
            if !item.is_object() {
                error!("Invalid recipe entry in LLM response: {}", item);
                return Err(CoreError::RecipeGenerationFailed);
            }
            serde_json::from_value::<GeneratedRecipe>(item).map_err(|e| {
                error!("Invalid recipe format: {}", e);
                CoreError::RecipeGenerationFailed
            })
        })
        .collect()
}

/// Parse the ingredient list read from a photo.
pub fn parse_extracted_ingredients(raw_response: &str) -> Result<Vec<String>, CoreError> {
    let document: Value = serde_json::from_str(raw_response).map_err(|e| {
        error!("Failed to parse LLM image response: {}", e);
        CoreError::IngredientExtractionFailed
    })?;

    let ingredients: Vec<String> = take_list(document, "ingredients")
        .ok_or_else(|| {
            error!("LLM image response does not contain an ingredients list");
            CoreError::IngredientExtractionFailed
        })?
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Null => None,
            other => Some(other.to_string()),
        })
        .filter(|s| !s.is_empty())
        .collect();

    if ingredients.is_empty() {
        return Err(CoreError::IngredientExtractionFailed);
    }

    Ok(ingredients)
}

/// First candidate with a pleasing aspect ratio, else the first candidate.
pub fn select_photo(candidates: &[PhotoCandidate]) -> Option<&PhotoCandidate> {
    candidates
        .iter()
        .find(|photo| photo.has_pleasing_ratio())
        .or_else(|| candidates.first())
}
