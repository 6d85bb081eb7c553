// src/db/models/ingredient_restriction.rs

//! IngredientRestriction join rows
//!
//! One row means "ingredient I is not allowed under dietary restriction D".

use crate::error::Result;
use rusqlite::{Connection, Row, params};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IngredientRestriction {
    pub ingredient_id: i64,
    pub dietary_restriction_id: i64,
}

impl IngredientRestriction {
    pub fn new(ingredient_id: i64, dietary_restriction_id: i64) -> Self {
        Self {
            ingredient_id,
            dietary_restriction_id,
        }
    }

    pub fn insert(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO ingredient_restrictions (ingredient_id, dietary_restriction_id)
             VALUES (?1, ?2)",
            params![self.ingredient_id, self.dietary_restriction_id],
        )?;
        Ok(())
    }

    /// Rows naming the ingredients forbidden under `restriction_id`
    pub fn find_by_restriction(conn: &Connection, restriction_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT ingredient_id, dietary_restriction_id FROM ingredient_restrictions
             WHERE dietary_restriction_id = ?1 ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map([restriction_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn find_by_ingredient(conn: &Connection, ingredient_id: i64) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT ingredient_id, dietary_restriction_id FROM ingredient_restrictions
             WHERE ingredient_id = ?1 ORDER BY rowid",
        )?;
        let rows = stmt
            .query_map([ingredient_id], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn delete_for_ingredient(conn: &Connection, ingredient_id: i64) -> Result<usize> {
        let removed = conn.execute(
            "DELETE FROM ingredient_restrictions WHERE ingredient_id = ?1",
            [ingredient_id],
        )?;
        Ok(removed)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            ingredient_id: row.get(0)?,
            dietary_restriction_id: row.get(1)?,
        })
    }
}
