//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{
    Collection, Database, IndexModel,
    bson::{Bson, Document, doc, to_bson},
    options::IndexOptions,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
///
/// Documents are keyed by the entity `id` field (a uuid string with a
/// unique index) rather than the driver-assigned `_id`, so the stored
/// document and the wire representation stay identical.
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository over the `products` collection
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Product>(collection_name);
        Self { collection }
    }

    /// Initialize indexes for lookup and predicate queries
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "id": 1 })
                .options(
                    IndexOptions::builder()
                        .unique(true)
                        .name("idx_id_unique".to_string())
                        .build(),
                )
                .build(),
            IndexModel::builder()
                .keys(doc! { "need_restock": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_need_restock".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Product> {
        &self.collection
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "id": to_bson(&id).unwrap_or(Bson::Null) }
    }

    fn restock_filter() -> Document {
        doc! { "need_restock": true }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(doc! {}).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn list_needing_restock(&self) -> ProductResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let cursor = self.collection.find(Self::restock_filter()).await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn save(&self, product: &Product) -> ProductResult<()> {
        self.collection
            .replace_one(Self::id_filter(product.id), product)
            .upsert(true)
            .await?;

        tracing::info!(product_id = %product.id, "Product saved");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count > 0 {
            tracing::info!(product_id = %id, "Product deleted");
        }
        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateProduct;
    use crate::restock::{self, RestockPolicy};

    #[test]
    fn test_id_filter_uses_entity_id_field() {
        let id = Uuid::now_v7();
        let filter = MongoProductRepository::id_filter(id);
        assert_eq!(filter.get_str("id").unwrap(), id.to_string());
    }

    #[test]
    fn test_restock_filter_matches_flagged_documents() {
        let filter = MongoProductRepository::restock_filter();
        assert!(filter.get_bool("need_restock").unwrap());
    }

    // Round-trip against a live server; mirrors the service's
    // normalize-then-save write path.
    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_save_get_delete_round_trip() {
        let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let db = client.database("domain_products_test");
        let repo = MongoProductRepository::with_collection(&db, "products_round_trip");

        let mut product = Product::new(CreateProduct {
            name: "Round trip".to_string(),
            description: String::new(),
            price: 1.5,
            total_quantity: 10,
            available_quantity: 1,
        });
        restock::normalize(&mut product, RestockPolicy::default());

        repo.save(&product).await.unwrap();

        let fetched = repo.get_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Round trip");
        assert!(fetched.need_restock);

        let flagged = repo.list_needing_restock().await.unwrap();
        assert!(flagged.iter().any(|p| p.id == product.id));

        assert!(repo.delete(product.id).await.unwrap());
        assert!(repo.get_by_id(product.id).await.unwrap().is_none());
    }
}
