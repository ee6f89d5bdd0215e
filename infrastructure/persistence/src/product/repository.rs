use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::product::repository::ProductRepository;

use crate::store::JsonFileStore;

use super::entity::ProductEntity;

/// Read-only view over the product catalog file handed off by the catalog
/// service.
pub struct ProductRepositoryJsonFile {
    store: JsonFileStore,
}

impl ProductRepositoryJsonFile {
    pub fn new(store: JsonFileStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryJsonFile {
    async fn exists(&self, id: i64) -> Result<bool, RepositoryError> {
        let entities: Vec<ProductEntity> = self.store.read().await?;
        Ok(entities.iter().any(|e| e.id == id))
    }
}
