use serde_json::json;

/// Returns the JSON schema for recipe generation LLM responses
pub fn get_recipes_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "recipes": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "title": { "type": "string" },
                        "cookingTime": { "type": "integer" },
                        "servings": { "type": "integer" },
                        "cuisine": { "type": "string" },
                        "ingredients": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "instructions": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "extraIngredients": {
                            "type": "array",
                            "items": { "type": "string" }
                        }
                    },
                    "required": [
                        "title", "cookingTime", "servings", "cuisine",
                        "ingredients", "instructions"
                    ]
                }
            }
        },
        "required": ["recipes"]
    })
}

/// Returns the JSON schema for ingredients read from a photo
pub fn get_ingredients_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "ingredients": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["ingredients"]
    })
}
