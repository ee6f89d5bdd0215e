use std::env;

use persistence::store::JsonFileStore;

/// Paths of the JSON file stores backing the service.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub carts_file: String,
    pub products_file: String,
}

impl StorageConfig {
    /// Reads `CARTS_FILE` (default "data/carts.json") and `PRODUCTS_FILE`
    /// (default "data/products.json").
    pub fn from_env() -> Self {
        let carts_file = env::var("CARTS_FILE").unwrap_or_else(|_| "data/carts.json".to_string());
        let products_file =
            env::var("PRODUCTS_FILE").unwrap_or_else(|_| "data/products.json".to_string());

        Self {
            carts_file,
            products_file,
        }
    }
}

/// Opened stores handed to the dependency container.
pub struct Storage {
    pub carts: JsonFileStore,
    pub products: JsonFileStore,
}

/// Opens both stores, seeding each with an empty collection when absent.
/// The products file is the hand-off point from the external catalog and is
/// only ever read afterwards.
///
/// # Errors
/// Returns error when a store file cannot be created or probed.
pub async fn init_storage(config: &StorageConfig) -> anyhow::Result<Storage> {
    let carts = JsonFileStore::new(config.carts_file.as_str());
    carts.init().await?;

    let products = JsonFileStore::new(config.products_file.as_str());
    products.init().await?;

    Ok(Storage { carts, products })
}
