use super::{cors_config, server_config::ServerConfig, storage_config::StorageConfig};
use poem::middleware::Cors;

/// Aggregated runtime configuration, loaded once at startup.
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            storage: StorageConfig::from_env(),
            cors: cors_config::init_cors(),
        }
    }
}
