use crate::{
    domain::common::{PantryConfig, services::Service, services::ServiceSettings},
    infrastructure::{
        authentication::{Hs256TokenCodec, PostgresSessionRepository},
        crypto::Argon2Hasher,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        image_search::PexelsImageSearch,
        llm::GeminiLLMClient,
        recipe::repositories::PostgresRecipeRepository,
        user::repository::PostgresUserRepository,
    },
};

pub type PantryService = Service<
    PostgresUserRepository,
    PostgresSessionRepository,
    Argon2Hasher,
    Hs256TokenCodec,
    PostgresRecipeRepository,
    GeminiLLMClient,
    PexelsImageSearch,
    PostgresHealthCheckRepository,
>;

pub async fn create_service(config: PantryConfig) -> Result<PantryService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let user_repository = PostgresUserRepository::new(postgres.get_db());
    let session_repository = PostgresSessionRepository::new(postgres.get_db());
    let recipe_repository = PostgresRecipeRepository::new(postgres.get_db());
    let health_check_repository = PostgresHealthCheckRepository::new(postgres.get_db());

    let llm_client = GeminiLLMClient::new(config.llm.gemini_api_key, config.llm.gemini_model)?;
    let image_search_client = PexelsImageSearch::new(config.image_search.pexels_api_key)?;
    let token_codec = Hs256TokenCodec::new(&config.auth.jwt_secret);

    let settings = ServiceSettings {
        recipe_count: config.llm.recipe_count,
        session_ttl_seconds: config.auth.session_ttl_seconds,
    };

    Ok(Service::new(
        user_repository,
        session_repository,
        Argon2Hasher::new(),
        token_codec,
        recipe_repository,
        llm_client,
        image_search_client,
        health_check_repository,
        settings,
    ))
}
