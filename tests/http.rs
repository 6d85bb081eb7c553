// tests/http.rs

//! HTTP API tests: status mapping and JSON bodies through the full router.

#![cfg(feature = "server")]

mod common;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use recipe_catalog::server::create_router;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceExt;

fn app() -> Router {
    create_router(Arc::new(Mutex::new(common::sample_catalog())))
}

async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_by_ingredient_returns_recipes() {
    let (status, body) = send(app(), "GET", "/recipes/byIngredient?name=Cocoa%20Powder").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Walnut Brownies", "Hot Cocoa"]);
}

#[tokio::test]
async fn test_by_diet_uses_the_diet_filter() {
    let (status, body) = send(app(), "GET", "/recipes/byDiet?id=4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_empty_result_statuses() {
    let (status, body) = send(app(), "GET", "/recipes/byDiet?id=87").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, body) = send(app(), "GET", "/recipes/byDiet?name=No-Restriction").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_malformed_id_is_rejected() {
    let (status, _) = send(app(), "GET", "/recipes?id=two").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_ingredient_statuses() {
    let (status, body) = send(app(), "DELETE", "/ingredients?name=Tomatoes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["recipe"]["name"], "Margherita Pizza");

    let (status, body) = send(app(), "DELETE", "/ingredients?name=Salmon").await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Ingredient is associated with more than 1 recipe.");

    let (status, body) = send(app(), "DELETE", "/ingredients?name=Roma%20tomatoes").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Ingredient not found.");
}

#[tokio::test]
async fn test_delete_recipe_then_query() {
    let state = Arc::new(Mutex::new(common::sample_catalog()));

    let (status, body) = send(create_router(state.clone()), "DELETE", "/recipes?id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Recipe deleted successfully");

    let (status, body) = send(create_router(state.clone()), "DELETE", "/recipes?id=1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_argument");

    let (status, _) = send(create_router(state), "GET", "/recipes/byIngredient?id=1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_recipe_validation() {
    let body = serde_json::json!({
        "name": "Air",
        "description": "Nothing at all",
        "servings": 0,
        "ingredients": [{ "name": "Oxygen", "amount": 1.0, "unit": "millilitres" }]
    });
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/recipes")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
