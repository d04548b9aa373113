use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// Implementations can use different storage backends; the service only relies
/// on insertion order being preserved by `list`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a product that already carries its identifier
    async fn insert(&self, product: Product) -> ProductResult<Product>;

    /// All stored products, in insertion order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Allocate the next identifier (1, 2, 3, ...; never reused)
    async fn next_id(&self) -> ProductResult<i64>;
}
