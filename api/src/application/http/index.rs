use axum::{Router, extract::State, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub docs: String,
    pub recipes: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct IndexResponse {
    pub data: ServiceInfo,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "index",
    summary = "Service information",
    responses(
        (status = 200, body = IndexResponse)
    )
)]
pub async fn index(State(state): State<AppState>) -> Response<IndexResponse> {
    let root_path = &state.args.server.root_path;

    Response::OK(IndexResponse {
        data: ServiceInfo {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            docs: format!("{}/swagger-ui", root_path),
            recipes: format!("{}/recipes", root_path),
        },
    })
}

pub fn index_routes(root_path: &str) -> Router<AppState> {
    let path = if root_path.is_empty() { "/" } else { root_path };

    Router::new().route(path, get(index))
}
