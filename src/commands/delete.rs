// src/commands/delete.rs

//! Delete commands
//!
//! The catalog is rebuilt on every run, so these show what a delete would do
//! to the seeded data and what the collections look like afterwards.

use super::{open_catalog, print_stats};
use anyhow::{Result, bail};
use recipe_catalog::{CatalogConfig, IngredientDeletion, LookupParams};
use tracing::info;

/// Delete an ingredient used by exactly one recipe
pub fn cmd_delete_ingredient(config: &CatalogConfig, params: &LookupParams) -> Result<()> {
    let mut catalog = open_catalog(config)?;

    match catalog.delete_ingredient(params)? {
        IngredientDeletion::Deleted {
            ingredient,
            recipe,
            links_removed,
        } => {
            info!("Ingredient {} removed", ingredient.id);
            println!("Deleted ingredient [{}] {}", ingredient.id, ingredient.name);
            println!(
                "  Removed recipe [{}] {} and {} ingredient link(s)",
                recipe.id, recipe.name, links_removed
            );
        }
        outcome => {
            let message = outcome.message().unwrap_or("Ingredient not deleted.");
            bail!("{}", message);
        }
    }

    print_stats(&catalog.stats()?);
    Ok(())
}

/// Delete a recipe and its ingredient links
pub fn cmd_delete_recipe(config: &CatalogConfig, params: &LookupParams) -> Result<()> {
    let mut catalog = open_catalog(config)?;

    let deletion = catalog.delete_recipe(params)?;
    println!("{}: [{}] {}", deletion.message(), deletion.recipe.id, deletion.recipe.name);
    println!("  Removed {} ingredient link(s)", deletion.links_removed);

    print_stats(&catalog.stats()?);
    Ok(())
}
