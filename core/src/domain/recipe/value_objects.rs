use uuid::Uuid;

use crate::domain::recipe::entities::Recipe;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub data: Vec<u8>,
    pub mime_type: String,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateRecipesInput {
    pub ingredients: Option<String>,
    pub time: Option<i32>,
    pub servings: Option<i32>,
    pub cuisine: Option<String>,
    pub image: Option<UploadedImage>,
}

#[derive(Debug, Clone, Default)]
pub struct ListRecipesInput {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeFilter {
    pub offset: u64,
    pub limit: u64,
}

impl From<ListRecipesInput> for RecipeFilter {
    fn from(input: ListRecipesInput) -> Self {
        Self {
            offset: u64::from(input.offset.unwrap_or(0)),
            limit: u64::from(input.limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GetRecipeInput {
    pub recipe_id: Uuid,
}

#[derive(Debug, Clone)]
pub struct SaveRecipeInput {
    pub recipe_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveRecipeOutcome {
    Saved(Recipe),
    AlreadySaved(Recipe),
}

impl SaveRecipeOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            SaveRecipeOutcome::Saved(_) => "Recipe saved successfully!",
            SaveRecipeOutcome::AlreadySaved(_) => "This recipe is already saved.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SaveRecipeOutcome::Saved(_) => "saved",
            SaveRecipeOutcome::AlreadySaved(_) => "already_saved",
        }
    }

    pub fn into_recipe(self) -> Recipe {
        match self {
            SaveRecipeOutcome::Saved(recipe) | SaveRecipeOutcome::AlreadySaved(recipe) => recipe,
        }
    }

    pub fn recipe(&self) -> &Recipe {
        match self {
            SaveRecipeOutcome::Saved(recipe) | SaveRecipeOutcome::AlreadySaved(recipe) => recipe,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_filter_clamps_page_size() {
        let filter = RecipeFilter::from(ListRecipesInput {
            offset: None,
            limit: Some(1_000),
        });
        assert_eq!(filter, RecipeFilter { offset: 0, limit: 100 });

        let filter = RecipeFilter::from(ListRecipesInput {
            offset: Some(40),
            limit: Some(0),
        });
        assert_eq!(filter, RecipeFilter { offset: 40, limit: 1 });

        let filter = RecipeFilter::from(ListRecipesInput::default());
        assert_eq!(filter.limit, u64::from(DEFAULT_PAGE_SIZE));
    }
}
