// src/catalog/deletion.rs

//! Cascading deletes that keep the join collections consistent
//!
//! - Ingredient: allowed only when exactly one join row references it. The
//!   referencing recipe goes too, together with all of that recipe's join
//!   rows and the ingredient's restriction rows.
//! - Recipe: always allowed once resolved; its join rows go first, then the
//!   recipe.
//!
//! Each cascade runs in a single transaction, so no reader ever sees a join
//! row whose recipe or ingredient is already gone.

use super::lookup::Lookup;
use super::resolver::resolve;
use crate::db::Storage;
use crate::db::models::{Ingredient, IngredientRestriction, Recipe, RecipeIngredient};
use crate::error::{Error, Result};
use tracing::{info, warn};

/// Message returned when an ingredient cannot be deleted because of its links
pub const INGREDIENT_CONFLICT_MESSAGE: &str = "Ingredient is associated with more than 1 recipe.";

/// Message returned when the ingredient lookup resolves to nothing
pub const INGREDIENT_NOT_FOUND_MESSAGE: &str = "Ingredient not found.";

/// Message returned after a successful recipe delete
pub const RECIPE_DELETED_MESSAGE: &str = "Recipe deleted successfully";

/// Outcome of [`DeletionCoordinator::delete_ingredient`]
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientDeletion {
    /// Ingredient, its single recipe, and their join rows are gone
    Deleted {
        ingredient: Ingredient,
        recipe: Recipe,
        links_removed: usize,
    },
    /// Lookup matched no ingredient; nothing changed
    NotFound,
    /// Ingredient is referenced by zero or several recipes; nothing changed
    Conflict {
        ingredient: Ingredient,
        references: usize,
    },
}

impl IngredientDeletion {
    /// Failure text for the caller, `None` on success
    pub fn message(&self) -> Option<&'static str> {
        match self {
            IngredientDeletion::Deleted { .. } => None,
            IngredientDeletion::NotFound => Some(INGREDIENT_NOT_FOUND_MESSAGE),
            IngredientDeletion::Conflict { .. } => Some(INGREDIENT_CONFLICT_MESSAGE),
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(self, IngredientDeletion::Deleted { .. })
    }
}

/// Outcome of a successful [`DeletionCoordinator::delete_recipe`]
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDeletion {
    pub recipe: Recipe,
    pub links_removed: usize,
}

impl RecipeDeletion {
    pub fn message(&self) -> &'static str {
        RECIPE_DELETED_MESSAGE
    }
}

/// Write access to a [`Storage`] for delete operations
pub struct DeletionCoordinator<'a> {
    storage: &'a mut Storage,
}

impl<'a> DeletionCoordinator<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Delete the ingredient `lookup` resolves to, cascading to its recipe
    ///
    /// A miss or a conflict is an ordinary outcome, not an error.
    pub fn delete_ingredient(&mut self, lookup: &Lookup) -> Result<IngredientDeletion> {
        self.storage.transaction(|tx| {
            let Some(ingredient) = resolve::<Ingredient>(tx, lookup)? else {
                return Ok(IngredientDeletion::NotFound);
            };

            let links = RecipeIngredient::find_by_ingredient(tx, ingredient.id)?;
            let [link] = links.as_slice() else {
                warn!(
                    "Refusing to delete ingredient {} ({}): referenced by {} recipe(s)",
                    ingredient.id,
                    ingredient.name,
                    links.len()
                );
                return Ok(IngredientDeletion::Conflict {
                    references: links.len(),
                    ingredient,
                });
            };

            let recipe = Recipe::find_by_id(tx, link.recipe_id)?.ok_or_else(|| {
                Error::NotFoundError(format!(
                    "recipe {} referenced by ingredient {} does not exist",
                    link.recipe_id, ingredient.id
                ))
            })?;

            let links_removed = RecipeIngredient::delete_for_recipe(tx, recipe.id)?;
            Recipe::delete(tx, recipe.id)?;
            IngredientRestriction::delete_for_ingredient(tx, ingredient.id)?;
            Ingredient::delete(tx, ingredient.id)?;

            info!(
                "Deleted ingredient {} ({}) with recipe {} ({}), {} link(s) removed",
                ingredient.id, ingredient.name, recipe.id, recipe.name, links_removed
            );

            Ok(IngredientDeletion::Deleted {
                ingredient,
                recipe,
                links_removed,
            })
        })
    }

    /// Delete the recipe `lookup` resolves to, along with its join rows
    ///
    /// A lookup that resolves to no recipe is rejected with
    /// [`Error::InvalidArgument`]: deleting nothing is a caller mistake.
    pub fn delete_recipe(&mut self, lookup: &Lookup) -> Result<RecipeDeletion> {
        self.storage.transaction(|tx| {
            let recipe = resolve::<Recipe>(tx, lookup)?.ok_or_else(|| {
                Error::InvalidArgument(format!("no recipe matches {}", lookup))
            })?;

            let links_removed = RecipeIngredient::delete_for_recipe(tx, recipe.id)?;
            Recipe::delete(tx, recipe.id)?;

            info!(
                "Deleted recipe {} ({}), {} link(s) removed",
                recipe.id, recipe.name, links_removed
            );

            Ok(RecipeDeletion {
                recipe,
                links_removed,
            })
        })
    }
}
