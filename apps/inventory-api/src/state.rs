//! Application state management

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloned per handler (inexpensive, the Mongo client shares its
/// underlying connection pool).
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
}
