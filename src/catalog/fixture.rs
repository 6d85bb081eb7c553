// src/catalog/fixture.rs

//! Seed data for a fresh catalog
//!
//! A fixture is a TOML document listing ingredients, dietary restrictions
//! (with the ingredient ids each one forbids) and recipes (with their
//! ingredient lines). Ids are kept as written. The built-in sample is
//! compiled into the binary.

use crate::db::Storage;
use crate::db::models::{
    DietaryRestriction, Ingredient, IngredientRestriction, MeasurementUnit, Recipe,
    RecipeIngredient,
};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

const SAMPLE_CATALOG: &str = include_str!("../../data/sample_catalog.toml");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub ingredients: Vec<FixtureIngredient>,
    #[serde(default)]
    pub dietary_restrictions: Vec<FixtureRestriction>,
    #[serde(default)]
    pub recipes: Vec<FixtureRecipe>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureIngredient {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureRestriction {
    pub id: i64,
    pub name: String,
    /// Ingredient ids not allowed under this restriction
    #[serde(default)]
    pub forbids: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureRecipe {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub servings: i64,
    #[serde(default)]
    pub ingredients: Vec<FixtureLine>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureLine {
    pub ingredient: i64,
    pub amount: f64,
    pub unit: MeasurementUnit,
}

/// Counts of what a fixture wrote
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub recipes: usize,
    pub ingredients: usize,
    pub dietary_restrictions: usize,
    pub recipe_ingredients: usize,
    pub ingredient_restrictions: usize,
}

impl Fixture {
    /// The sample catalog shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml(SAMPLE_CATALOG)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::ParseError(format!("invalid fixture: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check that every join row points at an entity defined in the fixture
    pub fn validate(&self) -> Result<()> {
        let ingredient_ids: HashSet<i64> = self.ingredients.iter().map(|i| i.id).collect();

        for restriction in &self.dietary_restrictions {
            if let Some(missing) = restriction
                .forbids
                .iter()
                .find(|id| !ingredient_ids.contains(*id))
            {
                return Err(Error::ParseError(format!(
                    "restriction {} forbids unknown ingredient {}",
                    restriction.id, missing
                )));
            }
        }

        for recipe in &self.recipes {
            if let Some(line) = recipe
                .ingredients
                .iter()
                .find(|line| !ingredient_ids.contains(&line.ingredient))
            {
                return Err(Error::ParseError(format!(
                    "recipe {} uses unknown ingredient {}",
                    recipe.id, line.ingredient
                )));
            }
        }

        Ok(())
    }

    /// Write the fixture into `storage` in one transaction
    pub fn apply(&self, storage: &mut Storage) -> Result<SeedSummary> {
        self.validate()?;

        let summary = storage.transaction(|tx| {
            let mut summary = SeedSummary::default();

            for ingredient in &self.ingredients {
                Ingredient::new(ingredient.id, ingredient.name.clone()).insert(tx)?;
                summary.ingredients += 1;
            }

            for restriction in &self.dietary_restrictions {
                DietaryRestriction::new(restriction.id, restriction.name.clone()).insert(tx)?;
                summary.dietary_restrictions += 1;
                for ingredient_id in &restriction.forbids {
                    IngredientRestriction::new(*ingredient_id, restriction.id).insert(tx)?;
                    summary.ingredient_restrictions += 1;
                }
            }

            for recipe in &self.recipes {
                Recipe::new(
                    recipe.id,
                    recipe.name.clone(),
                    recipe.description.clone(),
                    recipe.servings,
                )
                .insert(tx)?;
                summary.recipes += 1;
                for line in &recipe.ingredients {
                    RecipeIngredient::new(recipe.id, line.ingredient, line.amount, line.unit)
                        .insert(tx)?;
                    summary.recipe_ingredients += 1;
                }
            }

            Ok(summary)
        })?;

        info!(
            "Seeded catalog: {} recipe(s), {} ingredient(s), {} restriction(s)",
            summary.recipes, summary.ingredients, summary.dietary_restrictions
        );
        Ok(summary)
    }
}
