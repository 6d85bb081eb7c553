// src/db/models/mod.rs

//! Data models for catalog entities
//!
//! This module defines Rust structs that correspond to the storage tables
//! and provides methods for creating, reading and deleting records. Models
//! carry no business rules; resolution, filtering and cascades live in
//! [`crate::catalog`].

mod dietary_restriction;
mod ingredient;
mod ingredient_restriction;
mod recipe;
mod recipe_ingredient;

pub use dietary_restriction::DietaryRestriction;
pub use ingredient::Ingredient;
pub use ingredient_restriction::IngredientRestriction;
pub use recipe::Recipe;
pub use recipe_ingredient::{MeasurementUnit, RecipeIngredient};
