// src/db/models/dietary_restriction.rs

//! DietaryRestriction model
//!
//! A named diet (e.g. "Nut-Free"). Which ingredients it rules out is stored
//! separately in [`super::IngredientRestriction`].

use crate::error::Result;
use rusqlite::{Connection, OptionalExtension, Row, params};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DietaryRestriction {
    pub id: i64,
    pub name: String,
}

impl DietaryRestriction {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn insert(&self, conn: &Connection) -> Result<()> {
        conn.execute(
            "INSERT INTO dietary_restrictions (id, name) VALUES (?1, ?2)",
            params![self.id, &self.name],
        )?;
        crate::db::keys::advance_past(conn, self.id)?;
        Ok(())
    }

    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt = conn.prepare("SELECT id, name FROM dietary_restrictions WHERE id = ?1")?;
        let restriction = stmt.query_row([id], Self::from_row).optional()?;
        Ok(restriction)
    }

    pub fn find_first_by_name(conn: &Connection, fragment: &str) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, name FROM dietary_restrictions
             WHERE instr(name, ?1) > 0 ORDER BY seq LIMIT 1",
        )?;
        let restriction = stmt.query_row([fragment], Self::from_row).optional()?;
        Ok(restriction)
    }

    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare("SELECT id, name FROM dietary_restrictions ORDER BY seq")?;
        let restrictions = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(restrictions)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }
}
