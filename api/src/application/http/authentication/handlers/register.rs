use axum::extract::State;
use chrono::{DateTime, Utc};
use pantry_core::domain::{
    authentication::ports::AuthService,
    user::{entities::User, value_objects::RegisterUserInput},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    authentication::validators::RegisterValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for RegisteredUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct RegisterResponse {
    pub data: RegisteredUser,
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    summary = "Create an account",
    request_body = RegisterValidator,
    responses(
        (status = 201, body = RegisterResponse),
        (status = 409, description = "Username already taken"),
        (status = 422, description = "Invalid registration form")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<RegisterValidator>,
) -> Result<Response<RegisterResponse>, ApiError> {
    let user = state
        .service
        .register(RegisterUserInput {
            username: payload.username,
            password: payload.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(RegisterResponse {
        data: RegisteredUser::from(user),
    }))
}
