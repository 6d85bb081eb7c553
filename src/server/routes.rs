// src/server/routes.rs
//! Axum router configuration for the recipe catalog

use crate::server::SharedCatalog;
use crate::server::handlers::{ingredients, recipes};
use axum::{
    Router,
    routing::{delete, get},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main application router
pub fn create_router(state: SharedCatalog) -> Router {
    // CORS configuration - permissive for now
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/recipes/byIngredient", get(recipes::by_ingredient))
        .route("/recipes/byDiet", get(recipes::by_diet))
        .route(
            "/recipes",
            get(recipes::list)
                .post(recipes::create)
                .delete(recipes::delete),
        )
        .route("/ingredients", delete(ingredients::delete))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tokio::sync::Mutex;
    use tower::ServiceExt;

    fn app() -> Router {
        let catalog = Catalog::with_sample_data().unwrap();
        create_router(Arc::new(Mutex::new(catalog)))
    }

    async fn status_of(method: &str, uri: &str) -> StatusCode {
        app()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(status_of("GET", "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_query_routes() {
        assert_eq!(status_of("GET", "/recipes/byIngredient?id=6").await, StatusCode::OK);
        assert_eq!(status_of("GET", "/recipes/byDiet?name=Nut-Free").await, StatusCode::OK);
        assert_eq!(status_of("GET", "/recipes?id=2").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_empty_result_without_name_is_not_found() {
        assert_eq!(
            status_of("GET", "/recipes/byIngredient?id=19").await,
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of("GET", "/recipes").await, StatusCode::NOT_FOUND);
        // A name search that matches nothing is still a 200
        assert_eq!(status_of("GET", "/recipes?name=KFC").await, StatusCode::OK);
        // So is an empty name: it was given, it just selects nothing
        assert_eq!(status_of("GET", "/recipes/byDiet?name=").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_delete_routes() {
        assert_eq!(status_of("DELETE", "/ingredients?id=4").await, StatusCode::OK);
        assert_eq!(status_of("DELETE", "/ingredients?id=6").await, StatusCode::FORBIDDEN);
        assert_eq!(
            status_of("DELETE", "/ingredients?id=5436").await,
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of("DELETE", "/ingredients").await, StatusCode::BAD_REQUEST);
        assert_eq!(status_of("DELETE", "/recipes?id=1").await, StatusCode::OK);
        assert_eq!(
            status_of("DELETE", "/recipes?id=5416&name=sdvksklvndsvb").await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_create_recipe_route() {
        let body = serde_json::json!({
            "name": "Salmon Salad",
            "description": "Cold and fresh",
            "servings": 2,
            "ingredients": [
                { "name": "Salmon", "amount": 150.0, "unit": "grams" },
                { "name": "Lemon", "amount": 20.0, "unit": "millilitres" }
            ]
        });
        let request = || {
            Request::builder()
                .method("POST")
                .uri("/recipes")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap()
        };

        let state = Arc::new(Mutex::new(Catalog::with_sample_data().unwrap()));
        let first = create_router(state.clone()).oneshot(request()).await.unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = create_router(state.clone()).oneshot(request()).await.unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);

        assert_eq!(state.lock().await.stats().unwrap().recipes, 12);
    }
}
