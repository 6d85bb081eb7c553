// src/db/keys.rs

//! Primary key generator
//!
//! One strictly increasing sequence is shared by every collection, so a
//! generated key is unique across the whole catalog. Rows inserted with an
//! explicit id push the sequence past that id.

use crate::error::Result;
use rusqlite::Connection;

/// Hand out the next primary key
pub fn generate_primary_key(conn: &Connection) -> Result<i64> {
    let key = conn.query_row(
        "UPDATE key_sequence SET last_key = last_key + 1 WHERE id = 1 RETURNING last_key",
        [],
        |row| row.get(0),
    )?;
    Ok(key)
}

/// Make sure no future generated key is `<= id`
pub fn advance_past(conn: &Connection, id: i64) -> Result<()> {
    conn.execute(
        "UPDATE key_sequence SET last_key = MAX(last_key, ?1) WHERE id = 1",
        [id],
    )?;
    Ok(())
}

/// Last key handed out or reserved
pub fn last_key(conn: &Connection) -> Result<i64> {
    let key = conn.query_row("SELECT last_key FROM key_sequence WHERE id = 1", [], |row| {
        row.get(0)
    })?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Storage;

    #[test]
    fn test_keys_strictly_increase() {
        let storage = Storage::open_in_memory().unwrap();
        let conn = storage.conn();

        let a = generate_primary_key(conn).unwrap();
        let b = generate_primary_key(conn).unwrap();
        let c = generate_primary_key(conn).unwrap();

        assert_eq!(a, 1);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_advance_past_explicit_id() {
        let storage = Storage::open_in_memory().unwrap();
        let conn = storage.conn();

        advance_past(conn, 18).unwrap();
        assert_eq!(generate_primary_key(conn).unwrap(), 19);

        // Never moves backwards
        advance_past(conn, 3).unwrap();
        assert_eq!(last_key(conn).unwrap(), 19);
        assert_eq!(generate_primary_key(conn).unwrap(), 20);
    }
}
