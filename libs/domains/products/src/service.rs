//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, RestockStatus, UpdateProduct};
use crate::repository::ProductRepository;
use crate::restock::{self, RestockPolicy};

/// Product service providing business logic operations
///
/// The service layer owns validation, the restock invariants, and the
/// translation of caller intent into entity mutations; the repository
/// only moves records. Every normal write runs the normalization hook
/// immediately before the save; the flag override is the one path that
/// skips it.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
    policy: RestockPolicy,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository and policy
    pub fn new(repository: R, policy: RestockPolicy) -> Self {
        Self {
            repository: Arc::new(repository),
            policy,
        }
    }

    /// Parse a caller-supplied identifier.
    ///
    /// A malformed id maps to NotFound, not to a validation error:
    /// callers cannot distinguish bad id syntax from an absent record.
    fn parse_id(&self, id: &str) -> ProductResult<Uuid> {
        Uuid::parse_str(id).map_err(|_| ProductError::NotFound(id.to_string()))
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let mut product = Product::new(input);
        restock::normalize(&mut product, self.policy);

        self.repository.save(&product).await?;

        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        let id = self.parse_id(id)?;
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// List all products
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// List products currently flagged for restocking
    #[instrument(skip(self))]
    pub async fn list_needing_restock(&self) -> ProductResult<Vec<Product>> {
        self.repository.list_needing_restock().await
    }

    /// Update an existing product from a partial payload
    #[instrument(skip(self, input))]
    pub async fn update_product(&self, id: &str, input: UpdateProduct) -> ProductResult<Product> {
        if input.is_empty() {
            return Err(ProductError::Validation(
                "no updatable fields provided".to_string(),
            ));
        }

        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        // When the caller is explicit about both quantities at once, an
        // inconsistency is a caller error worth surfacing; the
        // single-field path clamps silently at the normalization hook
        // instead.
        if let (Some(total), Some(available)) = (input.total_quantity, input.available_quantity) {
            if available > total {
                return Err(ProductError::Validation(format!(
                    "available_quantity {} exceeds total_quantity {}",
                    available, total
                )));
            }
        }

        let mut product = self.get_product(id).await?;

        product.apply_update(input);
        restock::normalize(&mut product, self.policy);

        self.repository.save(&product).await?;

        tracing::info!(product_id = %product.id, "Product updated");
        Ok(product)
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> ProductResult<()> {
        let parsed = self.parse_id(id)?;

        if !self.repository.delete(parsed).await? {
            return Err(ProductError::NotFound(id.to_string()));
        }

        tracing::info!(product_id = %parsed, "Product deleted");
        Ok(())
    }

    /// Override the restock flag directly.
    ///
    /// This is the one write path that skips normalization: the flag is
    /// written exactly as requested and may disagree with the derived
    /// value until the next normal save recomputes it.
    #[instrument(skip(self, value))]
    pub async fn set_restock_flag(
        &self,
        id: &str,
        value: &serde_json::Value,
    ) -> ProductResult<Product> {
        let flag = restock::parse_restock_flag(value)
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let mut product = self.get_product(id).await?;
        product.need_restock = flag;

        self.repository.save(&product).await?;

        tracing::info!(product_id = %product.id, need_restock = flag, "Restock flag overridden");
        Ok(product)
    }

    /// Read-only restock view of a product
    #[instrument(skip(self))]
    pub async fn restock_status(&self, id: &str) -> ProductResult<RestockStatus> {
        let product = self.get_product(id).await?;
        Ok(RestockStatus::from(&product))
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            policy: self.policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use serde_json::json;

    fn service(repository: MockProductRepository) -> ProductService<MockProductRepository> {
        ProductService::new(repository, RestockPolicy::default())
    }

    fn stored_product(total: i32, available: i32) -> Product {
        Product {
            id: Uuid::now_v7(),
            name: "Widget".to_string(),
            description: String::new(),
            price: 5.0,
            total_quantity: total,
            available_quantity: available,
            need_restock: false,
        }
    }

    fn create_input(total: i32, available: i32) -> CreateProduct {
        CreateProduct {
            name: "Widget".to_string(),
            description: String::new(),
            price: 5.0,
            total_quantity: total,
            available_quantity: available,
        }
    }

    #[tokio::test]
    async fn test_create_clamps_and_derives_flag() {
        let mut repo = MockProductRepository::new();
        repo.expect_save()
            .withf(|p: &Product| p.available_quantity == 10 && !p.need_restock)
            .times(1)
            .returning(|_| Ok(()));

        let product = service(repo).create_product(create_input(10, 15)).await.unwrap();

        assert_eq!(product.available_quantity, 10);
        assert_eq!(product.total_quantity, 10);
        assert!(!product.need_restock);
    }

    #[tokio::test]
    async fn test_create_flags_low_stock() {
        let mut repo = MockProductRepository::new();
        repo.expect_save().times(1).returning(|_| Ok(()));

        let product = service(repo).create_product(create_input(100, 19)).await.unwrap();
        assert!(product.need_restock);
    }

    #[tokio::test]
    async fn test_create_rejects_constraint_violations() {
        let repo = MockProductRepository::new();

        let mut input = create_input(10, 5);
        input.price = -1.0;

        let err = service(repo).create_product(input).await.unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_not_found() {
        let repo = MockProductRepository::new();

        let err = service(repo).get_product("not-a-uuid").await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_get_missing_id_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let id = Uuid::now_v7().to_string();
        let err = service(repo).get_product(&id).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_combined_fields_rejected_without_mutation() {
        let mut repo = MockProductRepository::new();
        // Neither a read nor a write may happen: the payload is rejected
        // before the entity is touched.
        repo.expect_get_by_id().never();
        repo.expect_save().never();

        let input = UpdateProduct {
            total_quantity: Some(10),
            available_quantity: Some(15),
            ..Default::default()
        };

        let id = Uuid::now_v7().to_string();
        let err = service(repo).update_product(&id, input).await.unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_combined_fields_consistent_is_accepted() {
        let existing = stored_product(5, 5);
        let existing_id = existing.id;

        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_save()
            .withf(|p: &Product| p.total_quantity == 20 && p.available_quantity == 20)
            .times(1)
            .returning(|_| Ok(()));

        let input = UpdateProduct {
            total_quantity: Some(20),
            available_quantity: Some(20),
            ..Default::default()
        };

        let updated = service(repo)
            .update_product(&existing_id.to_string(), input)
            .await
            .unwrap();
        assert!(!updated.need_restock);
    }

    #[tokio::test]
    async fn test_update_single_field_clamps_silently() {
        let existing = stored_product(10, 4);
        let existing_id = existing.id;

        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_save()
            .withf(|p: &Product| p.available_quantity == 10)
            .times(1)
            .returning(|_| Ok(()));

        let input = UpdateProduct {
            available_quantity: Some(15),
            ..Default::default()
        };

        let updated = service(repo)
            .update_product(&existing_id.to_string(), input)
            .await
            .unwrap();

        assert_eq!(updated.available_quantity, 10);
        assert!(!updated.need_restock);
    }

    #[tokio::test]
    async fn test_update_empty_payload_rejected() {
        let repo = MockProductRepository::new();

        let id = Uuid::now_v7().to_string();
        let err = service(repo)
            .update_product(&id, UpdateProduct::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_recomputes_restock_flag() {
        let existing = stored_product(100, 50);
        let existing_id = existing.id;

        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_save()
            .withf(|p: &Product| p.need_restock)
            .times(1)
            .returning(|_| Ok(()));

        let input = UpdateProduct {
            available_quantity: Some(19),
            ..Default::default()
        };

        let updated = service(repo)
            .update_product(&existing_id.to_string(), input)
            .await
            .unwrap();
        assert!(updated.need_restock);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().returning(|_| Ok(false));

        let id = Uuid::now_v7().to_string();
        let err = service(repo).delete_product(&id).await.unwrap_err();
        assert!(matches!(err, ProductError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_success() {
        let mut repo = MockProductRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(true));

        let id = Uuid::now_v7().to_string();
        service(repo).delete_product(&id).await.unwrap();
    }

    #[tokio::test]
    async fn test_set_restock_flag_skips_normalization() {
        // Availability is healthy, so the derived value would be false;
        // the override must win anyway.
        let existing = stored_product(100, 90);
        let existing_id = existing.id;

        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_save()
            .withf(|p: &Product| p.need_restock && p.available_quantity == 90)
            .times(1)
            .returning(|_| Ok(()));

        let updated = service(repo)
            .set_restock_flag(&existing_id.to_string(), &json!("YES"))
            .await
            .unwrap();
        assert!(updated.need_restock);
    }

    #[tokio::test]
    async fn test_set_restock_flag_rejects_unknown_token() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id().never();
        repo.expect_save().never();

        let id = Uuid::now_v7().to_string();
        let err = service(repo)
            .set_restock_flag(&id, &json!("maybe"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn test_restock_status_view() {
        let mut existing = stored_product(100, 19);
        existing.need_restock = true;
        let existing_id = existing.id;

        let mut repo = MockProductRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(existing.clone())));

        let status = service(repo)
            .restock_status(&existing_id.to_string())
            .await
            .unwrap();

        assert_eq!(status.id, existing_id);
        assert!(status.need_restock);
        assert_eq!(status.available_quantity, 19);
        assert_eq!(status.total_quantity, 100);
    }
}
