//! Products Domain
//!
//! Create/list operations on the product catalogue.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (GET/POST on the collection)
//! └──────┬──────┘
//!        │  Arc<dyn ProductService>
//! ┌──────▼──────┐
//! │   Service   │  ← Identifier assignment
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, CatalogService, InMemoryProductRepository};
//! use std::sync::Arc;
//!
//! let service = CatalogService::new(InMemoryProductRepository::new());
//! let router: axum::Router = handlers::router(Arc::new(service));
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::{ApiDoc, SharedProductService};
pub use memory::InMemoryProductRepository;
pub use models::Product;
pub use repository::ProductRepository;
pub use service::{CatalogService, ProductService};
