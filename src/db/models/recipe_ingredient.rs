// src/db/models/recipe_ingredient.rs

//! RecipeIngredient join rows
//!
//! One row means "recipe R uses ingredient I in quantity amount/unit".
//! A recipe/ingredient pair appears at most once.

use crate::error::Result;
use rusqlite::{Connection, Row, params};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Unit a recipe amount is measured in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    #[strum(to_string = "grams", serialize = "g")]
    Grams,
    #[strum(to_string = "millilitres", serialize = "ml")]
    #[serde(alias = "milliliters")]
    Millilitres,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub recipe_id: i64,
    pub ingredient_id: i64,
    pub amount: f64,
    pub unit: MeasurementUnit,
}

impl RecipeIngredient {
    pub fn new(recipe_id: i64, ingredient_id: i64, amount: f64, unit: MeasurementUnit) -> Self {
        Self {
            recipe_id,
            ingredient_id,
            amount,
            unit,
        }
    }

    pub fn insert(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, amount, unit)
             VALUES (?1, ?2, ?3, ?4)",
            params![self.recipe_id, self.ingredient_id, self.amount, self.unit.as_ref()],
        )?;
        Ok(())
    }

    /// Every join row, in insertion order
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT recipe_id, ingredient_id, amount, unit FROM recipe_ingredients ORDER BY rowid",
        )?;
        let links = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(links)
    }

    /// Rows that reference `ingredient_id`
    pub fn find_by_ingredient(conn: &Connection, ingredient_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT recipe_id, ingredient_id, amount, unit FROM recipe_ingredients
             WHERE ingredient_id = ?1 ORDER BY rowid",
        )?;
        let links = stmt
            .query_map([ingredient_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(links)
    }

    /// Rows that reference `recipe_id`
    pub fn find_by_recipe(conn: &Connection, recipe_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT recipe_id, ingredient_id, amount, unit FROM recipe_ingredients
             WHERE recipe_id = ?1 ORDER BY rowid",
        )?;
        let links = stmt
            .query_map([recipe_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(links)
    }

    /// Remove every row that references `recipe_id`, returning how many went
    pub fn delete_for_recipe(conn: &Connection, recipe_id: i64) -> Result<usize> {
        let removed = conn.execute(
            "DELETE FROM recipe_ingredients WHERE recipe_id = ?1",
            [recipe_id],
        )?;
        Ok(removed)
    }

    pub fn count(conn: &Connection) -> Result<i64> {
        let count =
            conn.query_row("SELECT COUNT(*) FROM recipe_ingredients", [], |row| row.get(0))?;
        Ok(count)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let unit_str: String = row.get(3)?;
        let unit = unit_str.parse::<MeasurementUnit>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                Box::new(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
            )
        })?;

        Ok(Self {
            recipe_id: row.get(0)?,
            ingredient_id: row.get(1)?,
            amount: row.get(2)?,
            unit,
        })
    }
}
