use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::{
        entities::{JwtClaim, LoginOutput, Session},
        value_objects::{AuthorizeRequestInput, Identity, LoginInput},
    },
    common::entities::app_errors::CoreError,
    user::{entities::User, value_objects::RegisterUserInput},
};

#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    fn create_session(
        &self,
        session: Session,
    ) -> impl Future<Output = Result<Session, CoreError>> + Send;

    fn get_by_id(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Option<Session>, CoreError>> + Send;

    fn delete_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Signs and verifies bearer tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenCodec: Send + Sync {
    fn encode(&self, claims: JwtClaim) -> Result<String, CoreError>;

    fn decode(&self, token: String) -> Result<JwtClaim, CoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn register(
        &self,
        input: RegisterUserInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn login(
        &self,
        input: LoginInput,
    ) -> impl Future<Output = Result<LoginOutput, CoreError>> + Send;

    fn logout(&self, identity: Identity) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
