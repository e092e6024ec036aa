use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::Product;

/// Repository trait for Product persistence
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends (MongoDB,
/// in-memory, etc.); each single-record operation must appear atomic
/// to concurrent readers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// List all products, in storage order
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// List products flagged as needing restock
    async fn list_needing_restock(&self) -> ProductResult<Vec<Product>>;

    /// Persist a product, inserting or replacing by id
    ///
    /// The single save boundary: both the create and update paths land
    /// here, after the service has normalized the entity.
    async fn save(&self, product: &Product) -> ProductResult<()>;

    /// Delete a product by ID; returns false when nothing was deleted
    async fn delete(&self, id: Uuid) -> ProductResult<bool>;
}
