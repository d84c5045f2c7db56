use chrono::Utc;
use tracing::{info, warn};

use crate::domain::{
    authentication::{
        entities::{JwtClaim, LoginOutput, Session},
        ports::{AuthService, SessionRepository, TokenCodec},
        value_objects::{AuthorizeRequestInput, Identity, LoginInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    recipe::ports::{ImageSearchClient, LLMClient, RecipeRepository},
    user::{entities::User, ports::UserRepository, value_objects::RegisterUserInput},
};

impl<U, S, H, T, RR, LLM, IS, HC> AuthService for Service<U, S, H, T, RR, LLM, IS, HC>
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
    async fn register(&self, input: RegisterUserInput) -> Result<User, CoreError> {
        let username = input.username.trim().to_string();
        if username.is_empty() {
            return Err(CoreError::Invalid("username is required".to_string()));
        }

        if self
            .user_repository
            .get_by_username(username.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::UsernameTaken);
        }

        let password_hash = self.hasher_repository.hash_password(input.password).await?;
        let user = self
            .user_repository
            .create_user(User::new(username, password_hash))
            .await?;

        info!(user_id = %user.id, "registered new user");

        Ok(user)
    }

    async fn login(&self, input: LoginInput) -> Result<LoginOutput, CoreError> {
        let Some(user) = self
            .user_repository
            .get_by_username(input.username.trim().to_string())
            .await?
        else {
            // same argon2 cost as a real verification
            self.hasher_repository.hash_password(input.password).await?;
            return Err(CoreError::InvalidCredentials);
        };

        let valid = self
            .hasher_repository
            .verify_password(input.password, user.password_hash.clone())
            .await?;

        if !valid {
            warn!(user_id = %user.id, "rejected login with wrong password");
            return Err(CoreError::InvalidCredentials);
        }

        let session = self
            .session_repository
            .create_session(Session::new(user.id, self.settings.session_ttl_seconds))
            .await?;

        let access_token = self.token_codec.encode(JwtClaim::for_session(&session))?;

        Ok(LoginOutput {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.settings.session_ttl_seconds,
        })
    }

    async fn logout(&self, identity: Identity) -> Result<(), CoreError> {
        self.session_repository
            .delete_session(identity.session_id)
            .await
    }

    async fn authorize_request(&self, input: AuthorizeRequestInput) -> Result<Identity, CoreError> {
        let claims = self.token_codec.decode(input.token)?;

        let session = self
            .session_repository
            .get_by_id(claims.sid)
            .await?
            .ok_or(CoreError::InvalidToken)?;

        if session.user_id != claims.sub {
            return Err(CoreError::InvalidToken);
        }

        if session.is_expired(Utc::now()) {
            if let Err(e) = self.session_repository.delete_session(session.id).await {
                warn!(session_id = %session.id, "failed to delete expired session: {}", e);
            }
            return Err(CoreError::InvalidToken);
        }

        let user = self
            .user_repository
            .get_by_id(session.user_id)
            .await?
            .ok_or(CoreError::InvalidToken)?;

        Ok(Identity::new(&user, session.id))
    }
}
