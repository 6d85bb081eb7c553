// src/lib.rs

//! Recipe Catalog
//!
//! In-memory catalog of recipes, ingredients and dietary restrictions with
//! relational queries and consistency-preserving deletes.
//!
//! # Architecture
//!
//! - Storage: one SQLite connection per catalog, in memory, schema migrated on open
//! - Lookups: every entity is addressed by id, by name fragment, or both
//! - Filters: "recipes using X" and "recipes compliant with diet Y" are set
//!   operations over the join collections
//! - Deletes: cascades run in one transaction, so join rows never dangle

pub mod catalog;
pub mod config;
pub mod db;
mod error;

#[cfg(feature = "server")]
pub mod server;

pub use catalog::{
    Catalog, CatalogStats, Fixture, IngredientDeletion, Lookup, LookupParams, NewIngredientLine,
    NewRecipe, RecipeDeletion,
};
pub use config::CatalogConfig;
pub use db::Storage;
pub use db::models::{DietaryRestriction, Ingredient, MeasurementUnit, Recipe, RecipeIngredient};
pub use error::{Error, Result};
