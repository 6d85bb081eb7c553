// src/db/schema.rs

//! Schema versioning for the catalog store
//!
//! The version lives in SQLite's `user_version` header field. A store is
//! always opened empty, so in practice every migration runs once, in order,
//! inside a single transaction at open time.

use crate::db::migrations;
use crate::error::{Error, Result};
use rusqlite::Connection;
use tracing::{debug, info};

type Migration = fn(&Connection) -> Result<()>;

/// Migrations in order; entry `n` upgrades version `n` to `n + 1`
const MIGRATIONS: &[Migration] = &[migrations::migrate_v1];

/// Version a fully migrated store reports
pub const SCHEMA_VERSION: i32 = MIGRATIONS.len() as i32;

/// Schema version recorded in the store, 0 when fresh
pub fn schema_version(conn: &Connection) -> Result<i32> {
    let version = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    Ok(version)
}

/// Bring the store up to [`SCHEMA_VERSION`]
///
/// A store claiming a newer version than this build knows is rejected.
pub fn migrate(conn: &Connection) -> Result<()> {
    let current = schema_version(conn)?;
    if current == SCHEMA_VERSION {
        return Ok(());
    }
    if !(0..SCHEMA_VERSION).contains(&current) {
        return Err(Error::InitError(format!(
            "store reports schema version {}, this build supports up to {}",
            current, SCHEMA_VERSION
        )));
    }

    let tx = conn.unchecked_transaction()?;
    for (index, migration) in MIGRATIONS.iter().enumerate().skip(current as usize) {
        debug!("Applying schema migration {}", index + 1);
        migration(&*tx)?;
    }
    tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tx.commit()?;

    info!("Catalog schema ready at version {}", SCHEMA_VERSION);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_count(conn: &Connection) -> i64 {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
            [],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn test_fresh_store_starts_at_zero() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(schema_version(&conn).unwrap(), 0);
    }

    #[test]
    fn test_migrate_sets_version() {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();
        assert_eq!(schema_version(&conn).unwrap(), SCHEMA_VERSION);
    }

    #[test]
    fn test_migrate_twice_is_a_no_op() {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();
        let tables = table_count(&conn);

        migrate(&conn).unwrap();
        assert_eq!(table_count(&conn), tables);
    }

    #[test]
    fn test_newer_store_is_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "user_version", SCHEMA_VERSION + 1).unwrap();

        assert!(matches!(migrate(&conn), Err(Error::InitError(_))));
        assert_eq!(table_count(&conn), 0);
    }

    #[test]
    fn test_all_collections_created() {
        let conn = Connection::open_in_memory().unwrap();
        migrate(&conn).unwrap();

        for table in [
            "recipes",
            "ingredients",
            "dietary_restrictions",
            "recipe_ingredients",
            "ingredient_restrictions",
            "key_sequence",
        ] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "missing table {}", table);
        }
    }
}
