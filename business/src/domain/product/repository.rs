use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Existence check against the external product catalog. Products are owned
/// by the catalog; the cart service never mutates them.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn exists(&self, id: i64) -> Result<bool, RepositoryError>;
}
