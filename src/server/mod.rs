// src/server/mod.rs
//! HTTP API for the recipe catalog
//!
//! This module provides an axum server that:
//! - Answers recipe queries by ingredient, by diet, and by id or name
//! - Adds recipes
//! - Deletes ingredients and recipes with their cascades
//!
//! All handlers share one [`Catalog`] behind a single async mutex, so every
//! request sees the storage either before or after another request's
//! mutation, never in between.

mod handlers;
mod routes;

pub use routes::create_router;

use crate::catalog::Catalog;
use crate::config::CatalogConfig;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared handler state
pub type SharedCatalog = Arc<Mutex<Catalog>>;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

impl ServerConfig {
    pub fn from_catalog_config(config: &CatalogConfig) -> Result<Self> {
        Ok(Self {
            bind_addr: config.bind_addr()?,
        })
    }
}

/// Run the HTTP server until it is shut down
pub async fn run_server(config: ServerConfig, catalog: Catalog) -> Result<()> {
    let stats = catalog.stats()?;
    tracing::info!("Starting recipe catalog on {}", config.bind_addr);
    tracing::info!(
        "Catalog: {} recipe(s), {} ingredient(s)",
        stats.recipes,
        stats.ingredients
    );

    let state: SharedCatalog = Arc::new(Mutex::new(catalog));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Recipe catalog is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}
