//! In-memory product store

use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

/// Process-local [`ProductRepository`].
///
/// Clones share the same storage. Contents are lost when the process exits.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
    sequence: Arc<AtomicI64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. The id sequence continues after the largest seeded id.
    pub fn with_products(products: Vec<Product>) -> Self {
        let last_id = products.iter().filter_map(|p| p.id).max().unwrap_or(0);
        Self {
            products: Arc::new(RwLock::new(products)),
            sequence: Arc::new(AtomicI64::new(last_id.max(0))),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    #[instrument(skip(self, product), fields(product_id = ?product.id))]
    async fn insert(&self, product: Product) -> ProductResult<Product> {
        self.products.write().await.push(product.clone());
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn next_id(&self) -> ProductResult<i64> {
        self.sequence
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                current.checked_add(1)
            })
            .map(|previous| previous + 1)
            .map_err(|_| ProductError::Internal("product id sequence exhausted".to_string()))
    }
}
