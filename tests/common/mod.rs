// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use recipe_catalog::{Catalog, LookupParams, Recipe};

/// Catalog seeded with the built-in sample data.
///
/// 11 recipes, 18 ingredients, 5 dietary restrictions. Salmon (6) and
/// Cocoa Powder (9) are each used by two recipes; Spaghetti (1) and
/// Tomatoes (4) by one.
pub fn sample_catalog() -> Catalog {
    Catalog::with_sample_data().unwrap()
}

pub fn by_id(id: i64) -> LookupParams {
    LookupParams::new(Some(id), None)
}

pub fn by_name(name: &str) -> LookupParams {
    LookupParams::new(None, Some(name.to_string()))
}

pub fn by_both(id: i64, name: &str) -> LookupParams {
    LookupParams::new(Some(id), Some(name.to_string()))
}

pub fn no_key() -> LookupParams {
    LookupParams::default()
}

pub fn recipe_ids(recipes: &[Recipe]) -> Vec<i64> {
    recipes.iter().map(|r| r.id).collect()
}
