//! API routes module
//!
//! Routes mount at the root path table: /product, /restock, /health.

pub mod health;
pub mod products;
pub mod restock;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/product", products::router(state))
        .nest("/restock", restock::router(state))
        .merge(health::router(state.clone()))
}

/// Initialize database indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    products::init_indexes(state).await
}
