// src/db/models/recipe.rs

//! Recipe model

use crate::error::Result;
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde::{Deserialize, Serialize};

/// A recipe in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub servings: i64,
}

impl Recipe {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: impl Into<String>,
        servings: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            servings,
        }
    }

    /// Insert this recipe with its own id
    pub fn insert(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO recipes (id, name, description, servings) VALUES (?1, ?2, ?3, ?4)",
            params![self.id, &self.name, &self.description, self.servings],
        )?;
        crate::db::keys::advance_past(conn, self.id)?;
        Ok(())
    }

    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, description, servings FROM recipes WHERE id = ?1",
        )?;
        let recipe = stmt.query_row([id], Self::from_row).optional()?;
        Ok(recipe)
    }

    /// First recipe, in insertion order, whose name contains `fragment`
    pub fn find_first_by_name(conn: &Connection, fragment: &str) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, description, servings FROM recipes
             WHERE instr(name, ?1) > 0 ORDER BY seq LIMIT 1",
        )?;
        let recipe = stmt.query_row([fragment], Self::from_row).optional()?;
        Ok(recipe)
    }

    /// Every recipe whose name contains `fragment` (case-sensitive)
    pub fn find_by_name_containing(conn: &Connection, fragment: &str) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, description, servings FROM recipes
             WHERE instr(name, ?1) > 0 ORDER BY seq",
        )?;
        let recipes = stmt
            .query_map([fragment], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(recipes)
    }

    /// Recipe with exactly this name, if any
    pub fn find_by_exact_name(conn: &Connection, name: &str) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, description, servings FROM recipes
             WHERE name = ?1 ORDER BY seq LIMIT 1",
        )?;
        let recipe = stmt.query_row([name], Self::from_row).optional()?;
        Ok(recipe)
    }

    /// All recipes in insertion order
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt =
            conn.prepare("SELECT id, name, description, servings FROM recipes ORDER BY seq")?;
        let recipes = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(recipes)
    }

    pub fn count(conn: &Connection) -> Result<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Remove the recipe row only. Join rows are the caller's responsibility.
    pub fn delete(conn: &Connection, id: i64) -> Result<usize> {
        let removed = conn.execute("DELETE FROM recipes WHERE id = ?1", [id])?;
        Ok(removed)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            servings: row.get(3)?,
        })
    }
}

impl std::fmt::Display for Recipe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} (serves {})", self.id, self.name, self.servings)
    }
}
