//! Configuration for the Inventory API

use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, env_flag, env_or_default, server::ServerConfig,
};
use database::mongodb::MongoConfig;
use domain_products::RestockPolicy;

pub use core_config::Environment;

/// Application configuration, resolved once at startup and read-only after
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// APP_DEBUG: forces verbose tracing when RUST_LOG is unset
    pub debug: bool,
    /// RESTOCK_THRESHOLD: fraction of total stock below which
    /// availability is flagged low
    pub restock: RestockPolicy,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let debug = env_flag("APP_DEBUG");
        let restock = restock_policy_from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            debug,
            restock,
        })
    }
}

fn restock_policy_from_env() -> Result<RestockPolicy, ConfigError> {
    let raw = env_or_default("RESTOCK_THRESHOLD", "0.2");

    let threshold: f64 = raw.parse().map_err(|e| ConfigError::ParseError {
        key: "RESTOCK_THRESHOLD".to_string(),
        details: format!("{}", e),
    })?;

    RestockPolicy::new(threshold).map_err(|e| ConfigError::ParseError {
        key: "RESTOCK_THRESHOLD".to_string(),
        details: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restock_policy_default() {
        temp_env::with_var_unset("RESTOCK_THRESHOLD", || {
            let policy = restock_policy_from_env().unwrap();
            assert_eq!(policy.threshold(), 0.2);
        });
    }

    #[test]
    fn test_restock_policy_override() {
        temp_env::with_var("RESTOCK_THRESHOLD", Some("0.5"), || {
            let policy = restock_policy_from_env().unwrap();
            assert_eq!(policy.threshold(), 0.5);
        });
    }

    #[test]
    fn test_restock_policy_rejects_garbage() {
        temp_env::with_var("RESTOCK_THRESHOLD", Some("plenty"), || {
            assert!(restock_policy_from_env().is_err());
        });
    }

    #[test]
    fn test_restock_policy_rejects_out_of_range() {
        for value in ["0", "-0.2", "1.5"] {
            temp_env::with_var("RESTOCK_THRESHOLD", Some(value), || {
                assert!(restock_policy_from_env().is_err(), "accepted {}", value);
            });
        }
    }
}
