//! Product Service - Business logic layer

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;

/// Operations the HTTP layer consumes.
///
/// Handlers hold this as `Arc<dyn ProductService>`, so any implementation
/// (or a mock in tests) can back the endpoints.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductService: Send + Sync {
    /// All products, in the order the implementation defines
    async fn get_all_products(&self) -> ProductResult<Vec<Product>>;

    /// Persist a product and return the stored record
    async fn create_product(&self, product: Product) -> ProductResult<Product>;
}

/// Repository-backed [`ProductService`].
///
/// Assigns identifiers on create and otherwise stores records as received.
pub struct CatalogService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> CatalogService<R> {
    /// Create a new CatalogService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }
}

#[async_trait]
impl<R: ProductRepository> ProductService for CatalogService<R> {
    #[instrument(skip(self))]
    async fn get_all_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Any identifier sent by the client is replaced by a freshly allocated one.
    #[instrument(skip(self, product), fields(product_name = ?product.name))]
    async fn create_product(&self, product: Product) -> ProductResult<Product> {
        let id = self.repository.next_id().await?;
        if let Some(requested) = product.id {
            debug!(requested, assigned = id, "Ignoring client-supplied product id");
        }

        self.repository.insert(product.with_id(id)).await
    }
}

impl<R: ProductRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
