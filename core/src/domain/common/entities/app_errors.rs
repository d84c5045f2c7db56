use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Recipe not found.")]
    RecipeNotFound,

    #[error("No ingredients provided.")]
    NoIngredients,

    #[error("Could not extract ingredients from the image.")]
    IngredientExtractionFailed,

    #[error("Could not generate recipes.")]
    RecipeGenerationFailed,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Username is already taken")]
    UsernameTaken,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Service unavailable")]
    ServiceUnavailable,

    #[error("Internal server error")]
    InternalServerError,
}
