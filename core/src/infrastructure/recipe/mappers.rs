use crate::{domain::recipe::entities::Recipe, entity::recipes};

impl From<&recipes::Model> for Recipe {
    fn from(model: &recipes::Model) -> Self {
        let ingredients: Vec<String> =
            serde_json::from_value(model.ingredients.clone()).unwrap_or_default();
        let instructions: Vec<String> =
            serde_json::from_value(model.instructions.clone()).unwrap_or_default();

        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title.clone(),
            time: model.time,
            cuisine: model.cuisine.clone(),
            servings: model.servings,
            ingredients,
            instructions,
            image_url: model.image_url.clone(),
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Self::from(&model)
    }
}
