use crate::domain::{
    authentication::ports::{SessionRepository, TokenCodec},
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    recipe::ports::{ImageSearchClient, LLMClient, RecipeRepository},
    user::ports::UserRepository,
};

impl<U, S, H, T, RR, LLM, IS, HC> HealthCheckService for Service<U, S, H, T, RR, LLM, IS, HC>
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
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        authentication::ports::{MockSessionRepository, MockTokenCodec},
        common::services::ServiceSettings,
        crypto::ports::MockHasherRepository,
        health::ports::MockHealthCheckRepository,
        recipe::ports::{MockImageSearchClient, MockLLMClient, MockRecipeRepository},
        user::ports::MockUserRepository,
    };

    fn service(
        health: MockHealthCheckRepository,
    ) -> Service<
        MockUserRepository,
        MockSessionRepository,
        MockHasherRepository,
        MockTokenCodec,
        MockRecipeRepository,
        MockLLMClient,
        MockImageSearchClient,
        MockHealthCheckRepository,
    > {
        Service::new(
            MockUserRepository::new(),
            MockSessionRepository::new(),
            MockHasherRepository::new(),
            MockTokenCodec::new(),
            MockRecipeRepository::new(),
            MockLLMClient::new(),
            MockImageSearchClient::new(),
            health,
            ServiceSettings::default(),
        )
    }

    #[tokio::test]
    async fn readiness_reports_database_latency() {
        let mut health = MockHealthCheckRepository::new();
        health.expect_readiness().times(1).returning(|| {
            Box::pin(async {
                Ok(DatabaseHealthStatus {
                    status: "ready".to_string(),
                    database_latency_ms: 3,
                })
            })
        });

        let status = service(health).readiness().await.unwrap();

        assert_eq!(status.status, "ready");
        assert_eq!(status.database_latency_ms, 3);
    }

    #[tokio::test]
    async fn readiness_surfaces_unreachable_database() {
        let mut health = MockHealthCheckRepository::new();
        health
            .expect_readiness()
            .returning(|| Box::pin(async { Err(CoreError::ServiceUnavailable) }));

        assert_eq!(
            service(health).readiness().await,
            Err(CoreError::ServiceUnavailable)
        );
    }
}
