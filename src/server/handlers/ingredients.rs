// src/server/handlers/ingredients.rs
//! Ingredient delete handler

use super::{catalog_error, error_response};
use crate::catalog::{IngredientDeletion, LookupParams};
use crate::server::SharedCatalog;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const INGREDIENT_DELETED_MESSAGE: &str = "Ingredient deleted successfully.";

/// Delete an ingredient, and its recipe when exactly one recipe uses it
///
/// DELETE /ingredients?id=&name=
///
/// An ingredient shared by several recipes (or by none) is refused with 403.
pub async fn delete(
    State(state): State<SharedCatalog>,
    Query(params): Query<LookupParams>,
) -> Response {
    let mut catalog = state.lock().await;
    let outcome = match catalog.delete_ingredient(&params) {
        Ok(outcome) => outcome,
        Err(e) => return catalog_error(e),
    };

    match outcome {
        IngredientDeletion::Deleted {
            ingredient,
            recipe,
            links_removed,
        } => {
            let body = serde_json::json!({
                "message": INGREDIENT_DELETED_MESSAGE,
                "ingredient": ingredient,
                "recipe": recipe,
                "links_removed": links_removed,
            });
            (StatusCode::OK, Json(body)).into_response()
        }
        IngredientDeletion::NotFound => {
            error_response(StatusCode::NOT_FOUND, "not_found", outcome_message(&outcome))
        }
        IngredientDeletion::Conflict { .. } => {
            error_response(StatusCode::FORBIDDEN, "conflict", outcome_message(&outcome))
        }
    }
}

fn outcome_message(outcome: &IngredientDeletion) -> &'static str {
    outcome.message().unwrap_or(INGREDIENT_DELETED_MESSAGE)
}
