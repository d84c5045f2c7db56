use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    /// Cooking time in minutes.
    pub time: i32,
    pub cuisine: String,
    pub servings: i32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RecipeConfig {
    pub user_id: Uuid,
    pub title: String,
    pub time: i32,
    pub cuisine: String,
    pub servings: i32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub image_url: Option<String>,
}

impl Recipe {
    pub fn new(config: RecipeConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id: config.user_id,
            title: config.title,
            time: config.time,
            cuisine: config.cuisine,
            servings: config.servings,
            ingredients: config.ingredients,
            instructions: config.instructions,
            image_url: config.image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Fresh record with the same content, owned by `user_id`.
    pub fn copy_for(&self, user_id: Uuid) -> Self {
        Self::new(RecipeConfig {
            user_id,
            title: self.title.clone(),
            time: self.time,
            cuisine: self.cuisine.clone(),
            servings: self.servings,
            ingredients: self.ingredients.clone(),
            instructions: self.instructions.clone(),
            image_url: self.image_url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_for_changes_owner_and_id_only() {
        let original = Recipe::new(RecipeConfig {
            user_id: Uuid::new_v4(),
            title: "Tomato soup".to_string(),
            time: 25,
            cuisine: "Italian".to_string(),
            servings: 2,
            ingredients: vec!["2 tomatoes".to_string(), "1 onion".to_string()],
            instructions: vec!["Chop".to_string(), "Simmer".to_string()],
            image_url: Some("https://images.example/soup.jpg".to_string()),
        });
        let new_owner = Uuid::new_v4();

        let copy = original.copy_for(new_owner);

        assert_ne!(copy.id, original.id);
        assert_eq!(copy.user_id, new_owner);
        assert_eq!(copy.title, original.title);
        assert_eq!(copy.ingredients, original.ingredients);
        assert_eq!(copy.instructions, original.instructions);
        assert_eq!(copy.image_url, original.image_url);
    }
}
