// src/server/handlers/recipes.rs
//! Recipe query, create and delete handlers

use super::{catalog_error, recipe_list};
use crate::catalog::{LookupParams, NewRecipe};
use crate::server::SharedCatalog;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::info;

/// Recipes that use an ingredient
///
/// GET /recipes/byIngredient?id=&name=
pub async fn by_ingredient(
    State(state): State<SharedCatalog>,
    Query(params): Query<LookupParams>,
) -> Response {
    let catalog = state.lock().await;
    match catalog.recipes_by_ingredient(&params) {
        Ok(recipes) => recipe_list(recipes, params.has_name()),
        Err(e) => catalog_error(e),
    }
}

/// Recipes compliant with a dietary restriction
///
/// GET /recipes/byDiet?id=&name=
pub async fn by_diet(
    State(state): State<SharedCatalog>,
    Query(params): Query<LookupParams>,
) -> Response {
    let catalog = state.lock().await;
    match catalog.recipes_by_diet(&params) {
        Ok(recipes) => recipe_list(recipes, params.has_name()),
        Err(e) => catalog_error(e),
    }
}

/// Recipes by id or name
///
/// GET /recipes?id=&name=
pub async fn list(
    State(state): State<SharedCatalog>,
    Query(params): Query<LookupParams>,
) -> Response {
    let catalog = state.lock().await;
    match catalog.recipes(&params) {
        Ok(recipes) => recipe_list(recipes, params.has_name()),
        Err(e) => catalog_error(e),
    }
}

/// Add a recipe
///
/// POST /recipes
pub async fn create(
    State(state): State<SharedCatalog>,
    Json(request): Json<NewRecipe>,
) -> Response {
    info!("Recipe create request: {}", request.name);

    let mut catalog = state.lock().await;
    match catalog.create_recipe(&request) {
        Ok(recipe) => (StatusCode::CREATED, Json(recipe)).into_response(),
        Err(e) => catalog_error(e),
    }
}

/// Delete a recipe and its ingredient links
///
/// DELETE /recipes?id=&name=
pub async fn delete(
    State(state): State<SharedCatalog>,
    Query(params): Query<LookupParams>,
) -> Response {
    let mut catalog = state.lock().await;
    match catalog.delete_recipe(&params) {
        Ok(deletion) => {
            let body = serde_json::json!({
                "message": deletion.message(),
                "recipe": deletion.recipe,
                "links_removed": deletion.links_removed,
            });
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => catalog_error(e),
    }
}
