// src/cli/mod.rs
//! CLI definitions for the recipe catalog
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.
//!
//! Storage lives in memory only, so every invocation starts from a freshly
//! seeded catalog:
//! - `serve` - Serve the catalog over HTTP
//! - `recipes` / `by-ingredient` / `by-diet` - Queries
//! - `delete-ingredient` / `delete-recipe` - Deletes, reporting what remains
//! - `add-recipe` - Add a recipe and show it

use clap::{Args, Parser, Subcommand};
use recipe_catalog::LookupParams;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "recipe-catalog")]
#[command(author = "Recipe Catalog Contributors")]
#[command(version)]
#[command(about = "In-memory recipe catalog with ingredient and dietary-restriction lookups", long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed the catalog from this fixture instead of the built-in sample
    #[arg(long, global = true, value_name = "PATH")]
    pub fixture: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Entity selection shared by queries and deletes
#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// Primary key of the entity
    #[arg(short, long, value_name = "ID")]
    pub id: Option<i64>,

    /// Case-sensitive name substring
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,
}

impl LookupArgs {
    pub fn params(&self) -> LookupParams {
        LookupParams::new(self.id, self.name.clone())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the catalog over HTTP
    Serve {
        /// Address to bind to (overrides server.bind)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// List recipes by id or name
    Recipes {
        #[command(flatten)]
        lookup: LookupArgs,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List recipes that use an ingredient
    ByIngredient {
        #[command(flatten)]
        lookup: LookupArgs,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List recipes compliant with a dietary restriction
    ByDiet {
        #[command(flatten)]
        lookup: LookupArgs,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete an ingredient used by exactly one recipe
    DeleteIngredient {
        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// Delete a recipe and its ingredient links
    DeleteRecipe {
        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// Add a recipe to the catalog
    AddRecipe {
        /// Recipe name
        name: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        servings: i64,

        /// Ingredient line, repeatable
        #[arg(long = "ingredient", value_name = "NAME:AMOUNT:UNIT", required = true)]
        ingredients: Vec<String>,
    },
}
