// src/catalog/filter.rs

//! Join-based recipe filters
//!
//! Both filters read a snapshot of the join rows and compute their answer as
//! plain set operations over it. Nothing here writes to storage, and no
//! collection is modified while it is being walked, so the result does not
//! depend on row order.

use crate::db::models::{
    DietaryRestriction, Ingredient, IngredientRestriction, Recipe, RecipeIngredient,
};
use crate::error::Result;
use rusqlite::Connection;
use std::collections::HashSet;
use tracing::debug;

/// Recipes that use `ingredient` in at least one join row
pub fn recipes_containing_ingredient(
    conn: &Connection,
    ingredient: &Ingredient,
) -> Result<Vec<Recipe>> {
    let links = RecipeIngredient::find_by_ingredient(conn, ingredient.id)?;
    let recipes = Recipe::list_all(conn)?;

    let matched = select_recipes_using(&recipes, &links, ingredient.id);
    debug!(
        "Ingredient {} ({}) is used by {} recipe(s)",
        ingredient.id,
        ingredient.name,
        matched.len()
    );
    Ok(matched)
}

/// Recipes none of whose ingredients are forbidden under `restriction`
///
/// A recipe with no ingredients at all is compliant.
pub fn recipes_compliant_with_diet(
    conn: &Connection,
    restriction: &DietaryRestriction,
) -> Result<Vec<Recipe>> {
    let forbidden = forbidden_ingredient_ids(conn, restriction.id)?;
    let links = RecipeIngredient::list_all(conn)?;
    let recipes = Recipe::list_all(conn)?;

    let compliant = select_compliant_recipes(&recipes, &links, &forbidden);
    debug!(
        "Restriction {} ({}) forbids {} ingredient(s); {} of {} recipe(s) comply",
        restriction.id,
        restriction.name,
        forbidden.len(),
        compliant.len(),
        recipes.len()
    );
    Ok(compliant)
}

/// Ids of the ingredients ruled out by `restriction_id`
pub fn forbidden_ingredient_ids(conn: &Connection, restriction_id: i64) -> Result<HashSet<i64>> {
    let ids = IngredientRestriction::find_by_restriction(conn, restriction_id)?
        .into_iter()
        .map(|row| row.ingredient_id)
        .collect();
    Ok(ids)
}

/// Join rows split by whether their ingredient is forbidden
#[derive(Debug, Default)]
pub struct LinkPartition<'a> {
    pub allowed: Vec<&'a RecipeIngredient>,
    pub forbidden: Vec<&'a RecipeIngredient>,
}

impl<'a> LinkPartition<'a> {
    /// Split `links` against `forbidden` without touching the rows
    pub fn new(links: &'a [RecipeIngredient], forbidden_ids: &HashSet<i64>) -> Self {
        let (forbidden, allowed) = links
            .iter()
            .partition(|link| forbidden_ids.contains(&link.ingredient_id));
        Self { allowed, forbidden }
    }

    /// Recipes with at least one forbidden row
    pub fn tainted_recipe_ids(&self) -> HashSet<i64> {
        self.forbidden.iter().map(|link| link.recipe_id).collect()
    }
}

/// Keep the recipes that have a join row for `ingredient_id`
pub fn select_recipes_using(
    recipes: &[Recipe],
    links: &[RecipeIngredient],
    ingredient_id: i64,
) -> Vec<Recipe> {
    let recipe_ids: HashSet<i64> = links
        .iter()
        .filter(|link| link.ingredient_id == ingredient_id)
        .map(|link| link.recipe_id)
        .collect();

    recipes
        .iter()
        .filter(|recipe| recipe_ids.contains(&recipe.id))
        .cloned()
        .collect()
}

/// Keep the recipes with no join row pointing at a forbidden ingredient
pub fn select_compliant_recipes(
    recipes: &[Recipe],
    links: &[RecipeIngredient],
    forbidden: &HashSet<i64>,
) -> Vec<Recipe> {
    let tainted = LinkPartition::new(links, forbidden).tainted_recipe_ids();

    recipes
        .iter()
        .filter(|recipe| !tainted.contains(&recipe.id))
        .cloned()
        .collect()
}
