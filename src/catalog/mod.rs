// src/catalog/mod.rs

//! Recipe catalog operations
//!
//! The catalog turns id-or-name lookups into concrete entities and answers
//! relational questions over them:
//!
//! - [`resolver`] - id-then-name resolution shared by every collection
//! - [`filter`] - recipes using an ingredient, recipes compliant with a diet
//! - [`query`] - the read operations built from the two above
//! - [`deletion`] - ingredient and recipe deletes with their cascades
//! - [`create`] - adding recipes and ingredients
//! - [`fixture`] - seeding a fresh store
//!
//! [`Catalog`] owns the [`Storage`] and is what the HTTP server and the CLI
//! talk to. It accepts raw `id`/`name` pairs and applies the boundary rules:
//! no key on a read yields an empty result, no key on a delete is an
//! [`Error::InvalidArgument`].

pub mod create;
pub mod deletion;
pub mod filter;
pub mod fixture;
pub mod lookup;
pub mod query;
pub mod resolver;

pub use create::{NewIngredientLine, NewRecipe};
pub use deletion::{DeletionCoordinator, IngredientDeletion, RecipeDeletion};
pub use fixture::{Fixture, SeedSummary};
pub use lookup::{Lookup, LookupParams};
pub use query::QueryService;
pub use resolver::{Resolvable, resolve};

use crate::db::Storage;
use crate::db::models::{Ingredient, Recipe, RecipeIngredient};
use crate::error::{Error, Result};
use serde::Serialize;

/// Collection sizes, for status output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub recipes: i64,
    pub ingredients: i64,
    pub recipe_ingredients: i64,
}

/// A recipe catalog backed by its own in-memory storage
pub struct Catalog {
    storage: Storage,
}

impl Catalog {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Empty catalog
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(Storage::open_in_memory()?))
    }

    /// Fresh catalog loaded with `fixture`
    pub fn seeded(fixture: &Fixture) -> Result<Self> {
        let mut catalog = Self::open_in_memory()?;
        fixture.apply(&mut catalog.storage)?;
        Ok(catalog)
    }

    /// Fresh catalog loaded with the built-in sample data
    pub fn with_sample_data() -> Result<Self> {
        Self::seeded(&Fixture::builtin()?)
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn queries(&self) -> QueryService<'_> {
        QueryService::new(&self.storage)
    }

    pub fn deletions(&mut self) -> DeletionCoordinator<'_> {
        DeletionCoordinator::new(&mut self.storage)
    }

    /// Recipes that use the ingredient named by `params`
    pub fn recipes_by_ingredient(&self, params: &LookupParams) -> Result<Vec<Recipe>> {
        match params.lookup() {
            Some(lookup) => self.queries().recipes_by_ingredient(&lookup),
            None => Ok(Vec::new()),
        }
    }

    /// Recipes compliant with the dietary restriction named by `params`
    pub fn recipes_by_diet(&self, params: &LookupParams) -> Result<Vec<Recipe>> {
        match params.lookup() {
            Some(lookup) => self.queries().recipes_by_diet(&lookup),
            None => Ok(Vec::new()),
        }
    }

    /// Recipes matching `params` by id or by name
    pub fn recipes(&self, params: &LookupParams) -> Result<Vec<Recipe>> {
        match params.lookup() {
            Some(lookup) => self.queries().recipes(&lookup),
            None => Ok(Vec::new()),
        }
    }

    pub fn delete_ingredient(&mut self, params: &LookupParams) -> Result<IngredientDeletion> {
        let lookup = required_lookup(params, "ingredient")?;
        self.deletions().delete_ingredient(&lookup)
    }

    pub fn delete_recipe(&mut self, params: &LookupParams) -> Result<RecipeDeletion> {
        let lookup = required_lookup(params, "recipe")?;
        self.deletions().delete_recipe(&lookup)
    }

    pub fn create_recipe(&mut self, new: &NewRecipe) -> Result<Recipe> {
        create::create_recipe(&mut self.storage, new)
    }

    /// Join rows of one recipe, for detail output
    pub fn recipe_lines(&self, recipe_id: i64) -> Result<Vec<(Ingredient, RecipeIngredient)>> {
        let conn = self.storage.conn();
        let mut lines = Vec::new();
        for link in RecipeIngredient::find_by_recipe(conn, recipe_id)? {
            if let Some(ingredient) = Ingredient::find_by_id(conn, link.ingredient_id)? {
                lines.push((ingredient, link));
            }
        }
        Ok(lines)
    }

    pub fn stats(&self) -> Result<CatalogStats> {
        let conn = self.storage.conn();
        Ok(CatalogStats {
            recipes: Recipe::count(conn)?,
            ingredients: Ingredient::count(conn)?,
            recipe_ingredients: RecipeIngredient::count(conn)?,
        })
    }
}

fn required_lookup(params: &LookupParams, kind: &str) -> Result<Lookup> {
    params.lookup().ok_or_else(|| {
        Error::InvalidArgument(format!("an id or a name is required to delete an {}", kind))
    })
}
