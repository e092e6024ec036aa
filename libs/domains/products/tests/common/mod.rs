//! Shared test support: an in-memory ProductRepository double.
//!
//! Handler tests drive the real routers and service against this map
//! instead of a live MongoDB, so the suite runs without external
//! services. The MongoDB implementation has its own `#[ignore]`d
//! round-trip tests.

use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

use domain_products::{Product, ProductRepository, ProductResult};

/// In-memory ProductRepository backed by a mutex-guarded vec
#[derive(Default)]
pub struct MemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn get_by_id(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        Ok(self.products.lock().unwrap().clone())
    }

    async fn list_needing_restock(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().filter(|p| p.need_restock).cloned().collect())
    }

    async fn save(&self, product: &Product) -> ProductResult<()> {
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => *slot = product.clone(),
            None => products.push(product.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> ProductResult<bool> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() != before)
    }
}
