// src/db/migrations.rs
//! Database migration implementations
//!
//! Each function handles one schema version upgrade.

use crate::error::Result;
use rusqlite::Connection;
use tracing::debug;

/// Initial schema - Version 1
///
/// Creates the five catalog collections and the key sequence:
/// - recipes, ingredients, dietary_restrictions: primary entities
/// - recipe_ingredients: recipe <-> ingredient join with quantity
/// - ingredient_restrictions: ingredient <-> dietary restriction join
/// - key_sequence: single-row primary key counter
///
/// Entity ids are assigned by the key sequence or by fixtures, in any
/// order, so they are kept apart from `seq`. Collection order is `seq`.
///
/// Join rows carry no foreign-key cascades. Integrity on delete is the
/// deletion coordinator's job, so every cascade is explicit in code.
pub fn migrate_v1(conn: &Connection) -> Result<()> {
    debug!("Creating schema version 1");

    conn.execute_batch(
        "
        CREATE TABLE recipes (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id INTEGER NOT NULL UNIQUE,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            servings INTEGER NOT NULL CHECK(servings > 0)
        );

        CREATE TABLE ingredients (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id INTEGER NOT NULL UNIQUE,
            name TEXT NOT NULL
        );

        CREATE TABLE dietary_restrictions (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id INTEGER NOT NULL UNIQUE,
            name TEXT NOT NULL
        );

        CREATE TABLE recipe_ingredients (
            recipe_id INTEGER NOT NULL,
            ingredient_id INTEGER NOT NULL,
            amount REAL NOT NULL CHECK(amount > 0),
            unit TEXT NOT NULL CHECK(unit IN ('grams', 'millilitres')),
            UNIQUE(recipe_id, ingredient_id)
        );

        CREATE INDEX idx_recipe_ingredients_recipe ON recipe_ingredients(recipe_id);
        CREATE INDEX idx_recipe_ingredients_ingredient ON recipe_ingredients(ingredient_id);

        CREATE TABLE ingredient_restrictions (
            ingredient_id INTEGER NOT NULL,
            dietary_restriction_id INTEGER NOT NULL,
            UNIQUE(ingredient_id, dietary_restriction_id)
        );

        CREATE INDEX idx_ingredient_restrictions_restriction
            ON ingredient_restrictions(dietary_restriction_id);

        CREATE TABLE key_sequence (
            id INTEGER PRIMARY KEY CHECK(id = 1),
            last_key INTEGER NOT NULL
        );

        INSERT INTO key_sequence (id, last_key) VALUES (1, 0);
        ",
    )?;

    Ok(())
}
