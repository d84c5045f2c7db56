use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    generate_recipes::{__path_generate_recipes, generate_recipes},
    generate_recipes_from_image::{
        __path_generate_recipes_from_image, MAX_IMAGE_SIZE, generate_recipes_from_image,
    },
    get_recipe::{__path_get_recipe, get_recipe},
    list_recipes::{__path_list_recipes, list_recipes},
    save_recipe::{__path_save_recipe, save_recipe},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

// room for the text fields and multipart framing around the image
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(
    generate_recipes,
    generate_recipes_from_image,
    list_recipes,
    get_recipe,
    save_recipe
))]
pub struct RecipeApiDoc;

/// Recipe endpoints without the bearer layer.
pub fn recipe_endpoints(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/recipes/generate", root_path),
            post(generate_recipes),
        )
        .route(
            &format!("{}/recipes/generate/image", root_path),
            post(generate_recipes_from_image)
                .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + MULTIPART_OVERHEAD)),
        )
        .route(&format!("{}/recipes", root_path), get(list_recipes))
        .route(
            &format!("{}/recipes/{{recipe_id}}", root_path),
            get(get_recipe),
        )
        .route(
            &format!("{}/recipes/{{recipe_id}}/save", root_path),
            post(save_recipe),
        )
}

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = state.args.server.root_path.clone();

    recipe_endpoints(&root_path).layer(middleware::from_fn_with_state(state, auth))
}

#[cfg(test)]
mod tests {
    use axum::{Extension, http::StatusCode};
    use axum_test::{
        TestServer,
        multipart::{MultipartForm, Part},
    };
    use pantry_core::domain::authentication::value_objects::Identity;
    use uuid::Uuid;

    use super::*;
    use crate::application::http::server::{
        api_entities::api_error::ApiErrorResponse, app_state::test_support::detached_state,
    };

    fn server() -> TestServer {
        let identity = Identity {
            user_id: Uuid::new_v4(),
            username: "cook".to_string(),
            session_id: Uuid::new_v4(),
        };

        let router = recipe_endpoints("")
            .layer(Extension(identity))
            .with_state(detached_state());

        TestServer::new(router).unwrap()
    }

    fn image_form(size: usize) -> MultipartForm {
        MultipartForm::new().add_part(
            "image",
            Part::bytes(vec![0u8; size])
                .file_name("fridge.jpg")
                .mime_type("image/jpeg"),
        )
    }

    #[tokio::test]
    async fn oversized_images_are_rejected_with_413() {
        let server = server();

        for size in [MAX_IMAGE_SIZE + 1, 12 * 1024 * 1024] {
            let response = server
                .post("/recipes/generate/image")
                .multipart(image_form(size))
                .expect_failure()
                .await;

            assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE, "{size}");
            let body = response.json::<ApiErrorResponse>();
            assert_eq!(body.code, "E_PAYLOAD_TOO_LARGE");
            assert_eq!(body.status, 413);
        }
    }

    #[tokio::test]
    async fn malformed_recipe_id_uses_the_error_body() {
        let server = server();

        for path in ["/recipes/not-a-uuid", "/recipes/not-a-uuid/save"] {
            let request = if path.ends_with("/save") {
                server.post(path)
            } else {
                server.get(path)
            };
            let response = request.expect_failure().await;

            assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{path}");
            assert_eq!(response.json::<ApiErrorResponse>().code, "E_BAD_REQUEST");
        }
    }

    #[tokio::test]
    async fn malformed_pagination_uses_the_error_body() {
        let response = server()
            .get("/recipes")
            .add_query_param("limit", "many")
            .expect_failure()
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<ApiErrorResponse>().code, "E_BAD_REQUEST");
    }
}
