// src/catalog/create.rs

//! Adding recipes and their ingredients
//!
//! Every new row takes its id from the storage key generator. Ingredients
//! are matched by exact name and reused; only unknown names create new
//! ingredient rows.

use crate::db::models::{
    DietaryRestriction, Ingredient, IngredientRestriction, MeasurementUnit, Recipe,
    RecipeIngredient,
};
use crate::db::{Storage, generate_primary_key};
use crate::error::{Error, Result};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::str::FromStr;
use tracing::{debug, info};

/// One ingredient line of a new recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewIngredientLine {
    pub name: String,
    pub amount: f64,
    pub unit: MeasurementUnit,
}

impl FromStr for NewIngredientLine {
    type Err = Error;

    /// Parse `NAME:AMOUNT:UNIT`, e.g. `Salmon:200:grams`
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.rsplitn(3, ':');
        let (Some(unit), Some(amount), Some(name)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::ParseError(format!(
                "expected NAME:AMOUNT:UNIT, got {:?}",
                s
            )));
        };

        let amount = amount
            .trim()
            .parse::<f64>()
            .map_err(|e| Error::ParseError(format!("invalid amount {:?}: {}", amount, e)))?;
        let unit = unit
            .trim()
            .parse::<MeasurementUnit>()
            .map_err(|_| Error::ParseError(format!("unknown unit {:?}", unit)))?;

        Ok(Self {
            name: name.trim().to_string(),
            amount,
            unit,
        })
    }
}

/// A recipe to add, with at least one ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecipe {
    pub name: String,
    pub description: String,
    pub servings: i64,
    pub ingredients: Vec<NewIngredientLine>,
}

impl NewRecipe {
    /// Reject input that can never produce a valid recipe
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidArgument("recipe name must not be empty".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "recipe description must not be empty".to_string(),
            ));
        }
        if self.servings <= 0 {
            return Err(Error::InvalidArgument(format!(
                "servings must be greater than 0, got {}",
                self.servings
            )));
        }
        if self.ingredients.is_empty() {
            return Err(Error::InvalidArgument(
                "a recipe needs at least one ingredient".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for line in &self.ingredients {
            if line.name.trim().is_empty() {
                return Err(Error::InvalidArgument(
                    "ingredient name must not be empty".to_string(),
                ));
            }
            if !line.amount.is_finite() || line.amount <= 0.0 {
                return Err(Error::InvalidArgument(format!(
                    "amount for {} must be greater than 0",
                    line.name
                )));
            }
            if !seen.insert(line.name.as_str()) {
                return Err(Error::InvalidArgument(format!(
                    "ingredient {} listed more than once",
                    line.name
                )));
            }
        }

        Ok(())
    }
}

/// Add `new` to the catalog and return the stored recipe
///
/// Fails with [`Error::ConflictError`] when a recipe of the same name already
/// exists. Nothing is written unless every row can be written.
pub fn create_recipe(storage: &mut Storage, new: &NewRecipe) -> Result<Recipe> {
    new.validate()?;

    storage.transaction(|tx| {
        if Recipe::find_by_exact_name(tx, &new.name)?.is_some() {
            return Err(Error::ConflictError(format!(
                "Recipe name already exists: {}",
                new.name
            )));
        }

        let recipe = Recipe::new(
            generate_primary_key(tx)?,
            new.name.clone(),
            new.description.clone(),
            new.servings,
        );
        recipe.insert(tx)?;

        for line in &new.ingredients {
            let ingredient = ingredient_for_name(tx, &line.name)?;
            RecipeIngredient::new(recipe.id, ingredient.id, line.amount, line.unit).insert(tx)?;
        }

        info!(
            "Added recipe {} ({}) with {} ingredient(s)",
            recipe.id,
            recipe.name,
            new.ingredients.len()
        );
        Ok(recipe)
    })
}

/// Existing ingredient with exactly `name`, or a freshly created one
fn ingredient_for_name(conn: &Connection, name: &str) -> Result<Ingredient> {
    if let Some(existing) = Ingredient::find_by_exact_name(conn, name)? {
        debug!("Reusing ingredient {} ({})", existing.id, existing.name);
        return Ok(existing);
    }
    let ingredient = Ingredient::new(generate_primary_key(conn)?, name);
    ingredient.insert(conn)?;
    debug!("Created ingredient {} ({})", ingredient.id, ingredient.name);
    Ok(ingredient)
}

/// Add a standalone ingredient
pub fn create_ingredient(storage: &mut Storage, name: &str) -> Result<Ingredient> {
    if name.trim().is_empty() {
        return Err(Error::InvalidArgument("ingredient name must not be empty".to_string()));
    }
    storage.transaction(|tx| {
        let ingredient = Ingredient::new(generate_primary_key(tx)?, name);
        ingredient.insert(tx)?;
        Ok(ingredient)
    })
}

/// Add a dietary restriction
pub fn create_dietary_restriction(storage: &mut Storage, name: &str) -> Result<DietaryRestriction> {
    if name.trim().is_empty() {
        return Err(Error::InvalidArgument(
            "dietary restriction name must not be empty".to_string(),
        ));
    }
    storage.transaction(|tx| {
        let restriction = DietaryRestriction::new(generate_primary_key(tx)?, name);
        restriction.insert(tx)?;
        Ok(restriction)
    })
}

/// Mark an existing ingredient as forbidden under an existing restriction
pub fn restrict_ingredient(
    storage: &mut Storage,
    ingredient_id: i64,
    restriction_id: i64,
) -> Result<IngredientRestriction> {
    storage.transaction(|tx| {
        if Ingredient::find_by_id(tx, ingredient_id)?.is_none() {
            return Err(Error::NotFoundError(format!("ingredient {}", ingredient_id)));
        }
        if DietaryRestriction::find_by_id(tx, restriction_id)?.is_none() {
            return Err(Error::NotFoundError(format!(
                "dietary restriction {}",
                restriction_id
            )));
        }
        let row = IngredientRestriction::new(ingredient_id, restriction_id);
        row.insert(tx)?;
        Ok(row)
    })
}
