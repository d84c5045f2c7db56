use crate::domain::{
    authentication::ports::{SessionRepository, TokenCodec},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    recipe::ports::{ImageSearchClient, LLMClient, RecipeRepository},
    user::ports::UserRepository,
};

/// Tunables the services read at call time.
#[derive(Clone, Debug)]
pub struct ServiceSettings {
    pub recipe_count: u32,
    pub session_ttl_seconds: i64,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            recipe_count: 3,
            session_ttl_seconds: 24 * 60 * 60,
        }
    }
}

#[derive(Clone)]
pub struct Service<U, S, H, T, RR, LLM, IS, HC>
where
    U: UserRepository,
    S: SessionRepository,
    H: HasherRepository,
    T: TokenCodec,
    RR: RecipeRepository,
    LLM: LLMClient,
    IS: ImageSearchClient,
    HC: HealthCheckRepository,
{
    pub(crate) user_repository: U,
    pub(crate) session_repository: S,
    pub(crate) hasher_repository: H,
    pub(crate) token_codec: T,
    pub(crate) recipe_repository: RR,
    pub(crate) llm_client: LLM,
    pub(crate) image_search_client: IS,
    pub(crate) health_check_repository: HC,
    pub(crate) settings: ServiceSettings,
}

impl<U, S, H, T, RR, LLM, IS, HC> Service<U, S, H, T, RR, LLM, IS, HC>
where
    U: UserRepository,
    S: SessionRepository,
    H: HasherRepository,
    T: TokenCodec,
    RR: RecipeRepository,
    LLM: LLMClient,
    IS: ImageSearchClient,
    HC: HealthCheckRepository,
{
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        session_repository: S,
        hasher_repository: H,
        token_codec: T,
        recipe_repository: RR,
        llm_client: LLM,
        image_search_client: IS,
        health_check_repository: HC,
        settings: ServiceSettings,
    ) -> Self {
        Self {
            user_repository,
            session_repository,
            hasher_repository,
            token_codec,
            recipe_repository,
            llm_client,
            image_search_client,
            health_check_repository,
            settings,
        }
    }
}
