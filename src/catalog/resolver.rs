// src/catalog/resolver.rs

//! Entity resolution: turn a [`Lookup`] into at most one concrete entity
//!
//! The same policy applies to every collection:
//! 1. `Id` - exact primary key match.
//! 2. `Name` - first entity in collection order whose name contains the
//!    fragment (case-sensitive, contiguous).
//! 3. `IdOrName` - id first; the name is tried only when the id misses.
//!
//! A miss is `Ok(None)`. Only storage failures are errors.

use super::lookup::Lookup;
use crate::db::models::{DietaryRestriction, Ingredient, Recipe};
use crate::error::Result;
use rusqlite::Connection;
use tracing::debug;

/// A collection that can be searched by id or by name fragment
pub trait Resolvable: Sized {
    /// Human-readable collection name, used in logs and messages
    const KIND: &'static str;

    fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>>;

    fn find_first_by_name(conn: &Connection, fragment: &str) -> Result<Option<Self>>;
}

impl Resolvable for Recipe {
    const KIND: &'static str = "recipe";

    fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        Recipe::find_by_id(conn, id)
    }

    fn find_first_by_name(conn: &Connection, fragment: &str) -> Result<Option<Self>> {
        Recipe::find_first_by_name(conn, fragment)
    }
}

impl Resolvable for Ingredient {
    const KIND: &'static str = "ingredient";

    fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        Ingredient::find_by_id(conn, id)
    }

    fn find_first_by_name(conn: &Connection, fragment: &str) -> Result<Option<Self>> {
        Ingredient::find_first_by_name(conn, fragment)
    }
}

impl Resolvable for DietaryRestriction {
    const KIND: &'static str = "dietary restriction";

    fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        DietaryRestriction::find_by_id(conn, id)
    }

    fn find_first_by_name(conn: &Connection, fragment: &str) -> Result<Option<Self>> {
        DietaryRestriction::find_first_by_name(conn, fragment)
    }
}

/// Resolve `lookup` against the collection of `T`
pub fn resolve<T: Resolvable>(conn: &Connection, lookup: &Lookup) -> Result<Option<T>> {
    let found = match lookup {
        Lookup::Id(id) => T::find_by_id(conn, *id)?,
        Lookup::Name(name) => T::find_first_by_name(conn, name)?,
        Lookup::IdOrName { id, name } => match T::find_by_id(conn, *id)? {
            Some(entity) => Some(entity),
            None => {
                debug!("No {} with id {}, falling back to name {:?}", T::KIND, id, name);
                T::find_first_by_name(conn, name)?
            }
        },
    };

    if found.is_none() {
        debug!("No {} matches {}", T::KIND, lookup);
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Storage;

    fn storage_with_ingredients() -> Storage {
        let storage = Storage::open_in_memory().unwrap();
        for (id, name) in [(1, "Spaghetti"), (2, "Eggs"), (6, "Salmon"), (9, "Smoked Salmon")] {
            Ingredient::new(id, name).insert(storage.conn()).unwrap();
        }
        storage
    }

    #[test]
    fn test_resolve_by_id() {
        let storage = storage_with_ingredients();
        let found: Ingredient = resolve(storage.conn(), &Lookup::id(6)).unwrap().unwrap();
        assert_eq!(found.name, "Salmon");
    }

    #[test]
    fn test_resolve_unknown_id_is_none() {
        let storage = storage_with_ingredients();
        let found: Option<Ingredient> = resolve(storage.conn(), &Lookup::id(19)).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_resolve_by_name_takes_first_match() {
        let storage = storage_with_ingredients();
        let found: Ingredient = resolve(storage.conn(), &Lookup::name("Salmon")).unwrap().unwrap();
        assert_eq!(found.id, 6);
    }

    #[test]
    fn test_resolve_by_name_requires_whole_fragment() {
        let storage = storage_with_ingredients();
        let hit: Option<Ingredient> = resolve(storage.conn(), &Lookup::name("Spa")).unwrap();
        let miss: Option<Ingredient> =
            resolve(storage.conn(), &Lookup::name("Spaghettio")).unwrap();
        assert_eq!(hit.unwrap().id, 1);
        assert!(miss.is_none());
    }

    #[test]
    fn test_valid_id_beats_unrelated_name() {
        let storage = storage_with_ingredients();
        let found: Ingredient = resolve(storage.conn(), &Lookup::id_or_name(2, "Salmon"))
            .unwrap()
            .unwrap();
        assert_eq!(found.name, "Eggs");
    }

    #[test]
    fn test_unknown_id_falls_back_to_name() {
        let storage = storage_with_ingredients();
        let found: Ingredient = resolve(storage.conn(), &Lookup::id_or_name(5436, "Smoked"))
            .unwrap()
            .unwrap();
        assert_eq!(found.id, 9);
    }

    #[test]
    fn test_both_keys_missing_is_none() {
        let storage = storage_with_ingredients();
        let found: Option<Ingredient> =
            resolve(storage.conn(), &Lookup::id_or_name(5436, "Boba")).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_same_policy_for_restrictions() {
        let storage = Storage::open_in_memory().unwrap();
        DietaryRestriction::new(4, "Nut-Free").insert(storage.conn()).unwrap();

        let by_name: DietaryRestriction =
            resolve(storage.conn(), &Lookup::name("Nut")).unwrap().unwrap();
        let fallback: DietaryRestriction =
            resolve(storage.conn(), &Lookup::id_or_name(99, "Nut-Free")).unwrap().unwrap();
        assert_eq!(by_name.id, 4);
        assert_eq!(fallback.id, 4);
    }
}
