// src/commands/add.rs

//! Add-recipe command

use super::{open_catalog, print_stats};
use anyhow::{Context, Result};
use recipe_catalog::{CatalogConfig, NewIngredientLine, NewRecipe};

/// Add a recipe to a fresh catalog and show the stored result
pub fn cmd_add_recipe(
    config: &CatalogConfig,
    name: &str,
    description: &str,
    servings: i64,
    ingredients: &[String],
) -> Result<()> {
    let ingredients = ingredients
        .iter()
        .map(|line| {
            line.parse::<NewIngredientLine>()
                .with_context(|| format!("Invalid --ingredient value: {}", line))
        })
        .collect::<Result<Vec<_>>>()?;

    let new = NewRecipe {
        name: name.to_string(),
        description: description.to_string(),
        servings,
        ingredients,
    };

    let mut catalog = open_catalog(config)?;
    let recipe = catalog.create_recipe(&new)?;

    println!("Added recipe [{}] {}", recipe.id, recipe.name);
    for (ingredient, line) in catalog.recipe_lines(recipe.id)? {
        println!("  [{}] {} {} {}", ingredient.id, ingredient.name, line.amount, line.unit);
    }

    print_stats(&catalog.stats()?);
    Ok(())
}
