// src/commands/serve.rs

//! HTTP server command

use super::open_catalog;
use anyhow::Result;
use recipe_catalog::CatalogConfig;
use recipe_catalog::server::{ServerConfig, run_server};
use tracing::info;

/// Serve a freshly seeded catalog until interrupted
pub async fn cmd_serve(config: &CatalogConfig, bind: Option<&str>) -> Result<()> {
    let mut server_config = ServerConfig::from_catalog_config(config)?;
    if let Some(bind) = bind {
        server_config.bind_addr = bind
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address {}: {}", bind, e))?;
    }

    let catalog = open_catalog(config)?;
    info!("Catalog seeded, starting server");
    run_server(server_config, catalog).await
}
