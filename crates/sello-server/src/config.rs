//! Environment-driven server configuration.

use std::{env, fmt::Display, str::FromStr};

use sello_db::DbConfig;
use tracing::{info, warn};

pub struct ServerConfig {
    pub port: u16,
    /// Tenant code this deployment serves.
    pub tenant_code: String,
    pub db: DbConfig,
}

impl ServerConfig {
    pub fn load() -> Self {
        Self {
            port: try_load("SELLO_PORT", "8080"),
            tenant_code: try_load("SELLO_TENANT_CODE", "default"),
            db: DbConfig {
                url: try_load("SELLO_DB_URL", "127.0.0.1:8000"),
                namespace: try_load("SELLO_DB_NAMESPACE", "sello"),
                database: try_load("SELLO_DB_DATABASE", "main"),
                username: try_load("SELLO_DB_USERNAME", "root"),
                password: try_load("SELLO_DB_PASSWORD", "root"),
            },
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
