// src/catalog/query.rs

//! Read operations over the catalog
//!
//! A lookup that resolves to nothing yields an empty collection, never an
//! error; the boundary layer decides whether empty means 404.

use super::filter;
use super::lookup::Lookup;
use super::resolver::resolve;
use crate::db::Storage;
use crate::db::models::{DietaryRestriction, Ingredient, Recipe};
use crate::error::Result;
use rusqlite::Connection;
use tracing::debug;

/// Read-only view over a [`Storage`]
pub struct QueryService<'a> {
    conn: &'a Connection,
}

impl<'a> QueryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            conn: storage.conn(),
        }
    }

    /// Recipes that use the ingredient `lookup` resolves to
    pub fn recipes_by_ingredient(&self, lookup: &Lookup) -> Result<Vec<Recipe>> {
        match resolve::<Ingredient>(self.conn, lookup)? {
            Some(ingredient) => filter::recipes_containing_ingredient(self.conn, &ingredient),
            None => Ok(Vec::new()),
        }
    }

    /// Recipes compliant with the dietary restriction `lookup` resolves to
    pub fn recipes_by_diet(&self, lookup: &Lookup) -> Result<Vec<Recipe>> {
        match resolve::<DietaryRestriction>(self.conn, lookup)? {
            Some(restriction) => filter::recipes_compliant_with_diet(self.conn, &restriction),
            None => Ok(Vec::new()),
        }
    }

    /// Recipes matching `lookup` directly
    ///
    /// Unlike single-entity resolution, a name returns *every* recipe whose
    /// name contains the fragment. With both keys the id filter runs first
    /// and the name filter is used only when the id matched nothing.
    pub fn recipes(&self, lookup: &Lookup) -> Result<Vec<Recipe>> {
        match lookup {
            Lookup::Id(id) => self.recipes_with_id(*id),
            Lookup::Name(name) => Recipe::find_by_name_containing(self.conn, name),
            Lookup::IdOrName { id, name } => {
                let by_id = self.recipes_with_id(*id)?;
                if !by_id.is_empty() {
                    return Ok(by_id);
                }
                debug!("No recipe with id {}, filtering by name {:?}", id, name);
                Recipe::find_by_name_containing(self.conn, name)
            }
        }
    }

    fn recipes_with_id(&self, id: i64) -> Result<Vec<Recipe>> {
        Ok(Recipe::find_by_id(self.conn, id)?.into_iter().collect())
    }
}
