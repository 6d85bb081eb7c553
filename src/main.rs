// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use recipe_catalog::CatalogConfig;
use std::path::Path;
use tracing::debug;

/// Configuration file if given, defaults otherwise; `--fixture` wins over both
fn load_config(path: Option<&Path>, fixture: Option<&Path>) -> Result<CatalogConfig> {
    let mut config = match path {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };
    if let Some(fixture) = fixture {
        config.storage.fixture = Some(fixture.to_path_buf());
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.fixture.as_deref())?;

    // Initialize tracing subscriber for logging; RUST_LOG overrides the config
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .init();
    debug!("Configuration: {:?}", config);

    match cli.command {
        Some(Commands::Serve { bind }) => commands::cmd_serve(&config, bind.as_deref()).await,
        Some(Commands::Recipes { lookup, json }) => {
            commands::cmd_recipes(&config, &lookup.params(), json)
        }
        Some(Commands::ByIngredient { lookup, json }) => {
            commands::cmd_by_ingredient(&config, &lookup.params(), json)
        }
        Some(Commands::ByDiet { lookup, json }) => {
            commands::cmd_by_diet(&config, &lookup.params(), json)
        }
        Some(Commands::DeleteIngredient { lookup }) => {
            commands::cmd_delete_ingredient(&config, &lookup.params())
        }
        Some(Commands::DeleteRecipe { lookup }) => {
            commands::cmd_delete_recipe(&config, &lookup.params())
        }
        Some(Commands::AddRecipe {
            name,
            description,
            servings,
            ingredients,
        }) => commands::cmd_add_recipe(&config, &name, &description, servings, &ingredients),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
