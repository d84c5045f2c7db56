use std::sync::Arc;

use pantry_core::application::PantryService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: PantryService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: PantryService) -> Self {
        Self { args, service }
    }
}

#[cfg(test)]
pub mod test_support {
    use std::sync::Arc;

    use clap::Parser;
    use pantry_core::{
        domain::common::services::{Service, ServiceSettings},
        infrastructure::{
            authentication::{Hs256TokenCodec, PostgresSessionRepository},
            crypto::Argon2Hasher,
            health::PostgresHealthCheckRepository,
            image_search::PexelsImageSearch,
            llm::GeminiLLMClient,
            recipe::PostgresRecipeRepository,
            user::repository::PostgresUserRepository,
        },
    };
    use sea_orm::DatabaseConnection;

    use super::AppState;
    use crate::args::Args;

    /// State whose database is disconnected, so every repository call fails.
    pub fn detached_state() -> AppState {
        let args = Args::parse_from(["pantry-api", "--jwt-secret", "test-secret"]);
        let db = DatabaseConnection::Disconnected;

        let service = Service::new(
            PostgresUserRepository::new(db.clone()),
            PostgresSessionRepository::new(db.clone()),
            Argon2Hasher::new(),
            Hs256TokenCodec::new("test-secret"),
            PostgresRecipeRepository::new(db.clone()),
            GeminiLLMClient::new(None, "gemini-1.5-flash".to_string()).unwrap(),
            PexelsImageSearch::new(None).unwrap(),
            PostgresHealthCheckRepository::new(db),
            ServiceSettings::default(),
        );

        AppState::new(Arc::new(args), service)
    }
}
