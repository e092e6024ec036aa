//! Restock API routes

use axum::Router;
use domain_products::handlers;

use crate::api::products;
use crate::state::AppState;

/// Create the restock router (status, override, list)
pub fn router(state: &AppState) -> Router {
    handlers::restock_router(products::service(state))
}
