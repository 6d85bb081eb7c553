// src/db/mod.rs

//! In-memory storage for the recipe catalog
//!
//! All five collections live in a single SQLite connection opened in memory.
//! The data exists only as long as the owning [`Storage`] value; there is no
//! file behind it and nothing survives a restart.

pub mod keys;
mod migrations;
pub mod models;
pub mod schema;

use crate::error::{Error, Result};
use rusqlite::{Connection, Transaction};
use tracing::debug;

pub use keys::generate_primary_key;

/// Owned handle to the catalog's collections
///
/// Created once per running instance and handed to every component that
/// needs it. Mutating callers must hold `&mut Storage`, which gives the
/// single-writer discipline for free inside one process.
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open a fresh, empty, fully migrated in-memory store
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::InitError(format!("Failed to open in-memory database: {}", e)))?;
        schema::migrate(&conn)?;
        debug!("Opened in-memory catalog storage");
        Ok(Self { conn })
    }

    /// Read access to the underlying connection
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Run `f` inside a transaction on this store
    pub fn transaction<F, T>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction) -> Result<T>,
    {
        transaction(&mut self.conn, f)
    }
}

/// Execute a closure within a transaction
///
/// Commits when the closure returns `Ok`, rolls back (by dropping the
/// transaction) otherwise.
pub fn transaction<F, T>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Transaction) -> Result<T>,
{
    let tx = conn.transaction()?;
    let result = f(&tx)?;
    tx.commit()?;
    Ok(result)
}
