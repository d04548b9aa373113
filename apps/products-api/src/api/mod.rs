//! API routes module

pub mod products;

use axum::Router;
use domain_products::SharedProductService;

/// Create all API routes (mounted under `/api` by the server)
pub fn routes(products: SharedProductService) -> Router {
    Router::new().nest("/products", products::router(products))
}
