//! Products API - REST server for the product catalogue

use axum::Router;
use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use core_config::FromEnv;
use domain_products::SharedProductService;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

/// Assemble the REST application: product routes, docs, middleware and `/health`.
fn build_app(config: &Config, products: SharedProductService) -> eyre::Result<Router> {
    let api_routes = api::routes(products);
    let router = create_router::<openapi::ApiDoc>(
        api_routes,
        health_router(config.app),
        &config.server,
    )?;
    Ok(router)
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let app = build_app(&config, api::products::in_memory_service())?;

    info!(
        name = config.app.name,
        version = config.app.version,
        "Starting Products API on {}",
        config.server.address()
    );

    create_production_app(app, &config.server, config.shutdown_timeout, async {
        info!("Shutting down: in-memory product catalogue discarded");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
