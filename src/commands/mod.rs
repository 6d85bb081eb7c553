// src/commands/mod.rs
//! Command handlers for the recipe catalog CLI

mod add;
mod delete;
mod query;
mod serve;

pub use add::cmd_add_recipe;
pub use delete::{cmd_delete_ingredient, cmd_delete_recipe};
pub use query::{cmd_by_diet, cmd_by_ingredient, cmd_recipes};
pub use serve::cmd_serve;

use anyhow::{Context, Result};
use recipe_catalog::{Catalog, CatalogConfig, CatalogStats};

/// Fresh catalog seeded the way `config` says
fn open_catalog(config: &CatalogConfig) -> Result<Catalog> {
    config
        .open_catalog()
        .context("Failed to set up the catalog")
}

/// Print collection sizes after a mutation
fn print_stats(stats: &CatalogStats) {
    println!(
        "Catalog now holds {} recipe(s), {} ingredient(s), {} recipe ingredient(s)",
        stats.recipes, stats.ingredients, stats.recipe_ingredients
    );
}
