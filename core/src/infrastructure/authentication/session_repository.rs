use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        authentication::{entities::Session, ports::SessionRepository},
        common::entities::app_errors::CoreError,
    },
    entity::sessions::{self, ActiveModel as SessionActiveModel, Entity as SessionEntity},
};

impl From<sessions::Model> for Session {
    fn from(model: sessions::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            created_at: model.created_at.to_utc(),
            expires_at: model.expires_at.to_utc(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostgresSessionRepository {
    pub db: DatabaseConnection,
}

impl PostgresSessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SessionRepository for PostgresSessionRepository {
    async fn create_session(&self, session: Session) -> Result<Session, CoreError> {
        let created = SessionEntity::insert(SessionActiveModel {
            id: Set(session.id),
            user_id: Set(session.user_id),
            created_at: Set(session.created_at.fixed_offset()),
            expires_at: Set(session.expires_at.fixed_offset()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(Session::from)
        .map_err(|e| {
            error!("Failed to create session: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(created)
    }

    async fn get_by_id(&self, session_id: Uuid) -> Result<Option<Session>, CoreError> {
        let session = SessionEntity::find_by_id(session_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get session: {}", e);
                CoreError::InternalServerError
            })?
            .map(Session::from);

        Ok(session)
    }

    async fn delete_session(&self, session_id: Uuid) -> Result<(), CoreError> {
        SessionEntity::delete_by_id(session_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete session: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
