// src/server/handlers/mod.rs
//! HTTP request handlers for the recipe catalog

pub mod ingredients;
pub mod recipes;

use crate::db::models::Recipe;
use crate::error::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// JSON error body shared by every handler
pub(crate) fn error_response(
    status: StatusCode,
    error: &str,
    message: impl Into<String>,
) -> Response {
    let body = serde_json::json!({
        "error": error,
        "message": message.into(),
    });
    (status, Json(body)).into_response()
}

/// Map a catalog error onto an HTTP status
pub(crate) fn catalog_error(err: Error) -> Response {
    let status = match &err {
        Error::InvalidArgument(_) | Error::ParseError(_) => StatusCode::BAD_REQUEST,
        Error::ConflictError(_) => StatusCode::CONFLICT,
        Error::NotFoundError(_) => StatusCode::NOT_FOUND,
        Error::DatabaseError(_)
        | Error::IoError(_)
        | Error::ConfigError(_)
        | Error::InitError(_) => {
            tracing::error!("Catalog failure: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_response(status, err.kind(), err.to_string())
}

/// 200 with the list, or 404 when nothing matched and no name was given
///
/// A name search that matches nothing is a legitimate empty answer, and an
/// empty `name=` parameter still counts as a name search.
pub(crate) fn recipe_list(recipes: Vec<Recipe>, name_given: bool) -> Response {
    if recipes.is_empty() && !name_given {
        return error_response(StatusCode::NOT_FOUND, "not_found", "No recipes found");
    }
    (StatusCode::OK, Json(recipes)).into_response()
}
