use pantry_core::domain::recipe::value_objects::GenerateRecipesInput;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateRecipesValidator {
    #[validate(length(max = 2000, message = "ingredients must be at most 2000 characters"))]
    #[schema(example = "eggs, rice, spring onions")]
    pub ingredients: Option<String>,

    #[validate(range(min = 1, max = 1440, message = "time must be between 1 and 1440 minutes"))]
    #[schema(example = 30)]
    pub time: Option<i32>,

    #[validate(range(min = 1, max = 100, message = "servings must be between 1 and 100"))]
    #[schema(example = 2)]
    pub servings: Option<i32>,

    #[validate(length(max = 100, message = "cuisine must be at most 100 characters"))]
    #[schema(example = "Korean")]
    pub cuisine: Option<String>,
}

impl From<GenerateRecipesValidator> for GenerateRecipesInput {
    fn from(form: GenerateRecipesValidator) -> Self {
        GenerateRecipesInput {
            ingredients: form.ingredients,
            time: form.time,
            servings: form.servings,
            cuisine: form.cuisine.filter(|c| !c.trim().is_empty()),
            image: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListRecipesParams {
    #[schema(example = 0)]
    pub offset: Option<u32>,
    #[schema(example = 20)]
    pub limit: Option<u32>,
}
