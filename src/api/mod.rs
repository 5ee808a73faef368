//! REST API layer: route handlers, DTOs, and router composition.
//!
//! JSON endpoints are mounted under `/api`; `/health` and the optional
//! Swagger UI live at the root.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document covering every exposed route.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        handlers::users::create_user,
        handlers::users::list_users,
        handlers::exercises::add_exercise,
        handlers::exercises::exercise_log,
        handlers::system::health_handler
    ),
    tags(
        (name = "Users", description = "User creation and listing"),
        (name = "Exercises", description = "Exercise recording and log queries"),
        (name = "System", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
///
/// With the `swagger-ui` feature enabled, interactive docs are served at
/// `/swagger-ui` and the raw document at `/api-docs/openapi.json`.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use crate::store::ExerciseStore;

    async fn test_router() -> Router {
        let Ok(store) = ExerciseStore::in_memory().await else {
            panic!("in-memory store creation failed");
        };
        build_router().with_state(AppState::new(store))
    }

    #[tokio::test]
    async fn health_route_responds_ok() {
        let router = test_router().await;

        let Ok(request) = Request::builder().uri("/health").body(Body::empty()) else {
            panic!("request build failed");
        };
        let Ok(response) = router.oneshot(request).await else {
            panic!("router call failed");
        };
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn create_user_route_round_trips() {
        let router = test_router().await;

        let Ok(request) = Request::builder()
            .method("POST")
            .uri("/api/users")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"username":"alice"}"#))
        else {
            panic!("request build failed");
        };
        let Ok(response) = router.oneshot(request).await else {
            panic!("router call failed");
        };
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let router = test_router().await;

        let Ok(request) = Request::builder().uri("/api/missing").body(Body::empty()) else {
            panic!("request build failed");
        };
        let Ok(response) = router.oneshot(request).await else {
            panic!("router call failed");
        };
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn openapi_document_lists_all_routes() {
        let document = ApiDoc::openapi();
        let paths = &document.paths.paths;
        assert!(paths.contains_key("/api/users"));
        assert!(paths.contains_key("/api/users/{user_id}/exercises"));
        assert!(paths.contains_key("/api/users/{user_id}/logs"));
        assert!(paths.contains_key("/health"));
    }
}
