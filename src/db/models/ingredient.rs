// src/db/models/ingredient.rs

//! Ingredient model

use crate::error::Result;
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
}

impl Ingredient {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Insert this ingredient with its own id
    pub fn insert(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO ingredients (id, name) VALUES (?1, ?2)",
            params![self.id, &self.name],
        )?;
        crate::db::keys::advance_past(conn, self.id)?;
        Ok(())
    }

    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt = conn.prepare("SELECT id, name FROM ingredients WHERE id = ?1")?;
        let ingredient = stmt.query_row([id], Self::from_row).optional()?;
        Ok(ingredient)
    }

    /// First ingredient, in insertion order, whose name contains `fragment`
    pub fn find_first_by_name(conn: &Connection, fragment: &str) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, name FROM ingredients WHERE instr(name, ?1) > 0 ORDER BY seq LIMIT 1",
        )?;
        let ingredient = stmt.query_row([fragment], Self::from_row).optional()?;
        Ok(ingredient)
    }

    /// Ingredient with exactly this name, if any
    pub fn find_by_exact_name(conn: &Connection, name: &str) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, name FROM ingredients WHERE name = ?1 ORDER BY seq LIMIT 1",
        )?;
        let ingredient = stmt.query_row([name], Self::from_row).optional()?;
        Ok(ingredient)
    }

    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT id, name FROM ingredients ORDER BY seq")?;
        let ingredients = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(ingredients)
    }

    pub fn count(conn: &Connection) -> Result<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM ingredients", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn delete(conn: &Connection, id: i64) -> Result<usize> {
        let removed = conn.execute("DELETE FROM ingredients WHERE id = ?1", [id])?;
        Ok(removed)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }
}
