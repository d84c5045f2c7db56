use uuid::Uuid;

use crate::domain::user::entities::User;

/// The authenticated caller of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub username: String,
    pub session_id: Uuid,
}

impl Identity {
    pub fn new(user: &User, session_id: Uuid) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            session_id,
        }
    }

    pub fn id(&self) -> Uuid {
        self.user_id
    }
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AuthorizeRequestInput {
    pub token: String,
}
