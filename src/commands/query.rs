// src/commands/query.rs

//! Recipe query commands

use super::open_catalog;
use anyhow::Result;
use recipe_catalog::{CatalogConfig, LookupParams, Recipe};

/// List recipes by id or name
pub fn cmd_recipes(config: &CatalogConfig, params: &LookupParams, json: bool) -> Result<()> {
    let catalog = open_catalog(config)?;
    let recipes = catalog.recipes(params)?;
    print_recipes(&recipes, json)
}

/// List recipes that use an ingredient
pub fn cmd_by_ingredient(config: &CatalogConfig, params: &LookupParams, json: bool) -> Result<()> {
    let catalog = open_catalog(config)?;
    let recipes = catalog.recipes_by_ingredient(params)?;
    print_recipes(&recipes, json)
}

/// List recipes compliant with a dietary restriction
pub fn cmd_by_diet(config: &CatalogConfig, params: &LookupParams, json: bool) -> Result<()> {
    let catalog = open_catalog(config)?;
    let recipes = catalog.recipes_by_diet(params)?;
    print_recipes(&recipes, json)
}

fn print_recipes(recipes: &[Recipe], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(recipes)?);
        return Ok(());
    }

    if recipes.is_empty() {
        println!("No recipes found.");
        return Ok(());
    }

    println!("Recipes ({}):", recipes.len());
    for recipe in recipes {
        println!(
            "  [{}] {} - {} (serves {})",
            recipe.id, recipe.name, recipe.description, recipe.servings
        );
    }
    Ok(())
}
