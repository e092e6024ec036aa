//! Products Domain
//!
//! A complete domain implementation for inventory-managed products
//! backed by MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, restock invariants
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! The restock rule and the pre-save normalization hook live in
//! [`restock`]; the service applies the hook before every normal save,
//! and the flag-override operation is the one write that skips it.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{
//!     handlers,
//!     mongodb::MongoProductRepository,
//!     restock::RestockPolicy,
//!     service::ProductService,
//! };
//! use mongodb::Client;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a MongoDB client
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("mydb");
//!
//! // Create a repository and service
//! let repository = MongoProductRepository::new(&db);
//! let service = Arc::new(ProductService::new(repository, RestockPolicy::default()));
//!
//! // Create Axum routers
//! let products = handlers::product_router(service.clone());
//! let restock = handlers::restock_router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod restock;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::{ProductApiDoc, RestockApiDoc};
pub use models::{
    CreateProduct, MessageResponse, Product, RestockOverride, RestockStatus, UpdateProduct,
};
pub use mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use restock::{RestockPolicy, needs_restock, normalize, parse_restock_flag};
pub use service::ProductService;
