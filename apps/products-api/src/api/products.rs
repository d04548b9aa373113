//! Products API routes

use axum::Router;
use domain_products::{handlers, CatalogService, InMemoryProductRepository, SharedProductService};
use std::sync::Arc;

/// Product service backed by the process-local store
pub fn in_memory_service() -> SharedProductService {
    let repository = InMemoryProductRepository::new();
    Arc::new(CatalogService::new(repository))
}

/// Create products router
pub fn router(service: SharedProductService) -> Router {
    handlers::router(service)
}
