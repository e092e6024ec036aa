//! Product API routes
//!
//! Wires the products domain to HTTP routes over the MongoDB repository.

use axum::Router;
use domain_products::{MongoProductRepository, ProductService, handlers};
use std::sync::Arc;

use crate::state::AppState;

/// Create the product CRUD router
pub fn router(state: &AppState) -> Router {
    handlers::product_router(service(state))
}

/// Build a product service over the MongoDB repository
pub fn service(state: &AppState) -> Arc<ProductService<MongoProductRepository>> {
    let repository = MongoProductRepository::new(&state.db);
    Arc::new(ProductService::new(repository, state.config.restock))
}

/// Initialize product indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    let repository = MongoProductRepository::new(&state.db);
    repository.init_indexes().await?;
    Ok(())
}
