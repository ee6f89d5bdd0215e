use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Cart;

/// Single storage port for the cart collection. Every handler path depends
/// on this capability set; there is no second persistence strategy.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Cart>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<Cart, RepositoryError>;
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
    async fn replace_all(&self, carts: &[Cart]) -> Result<(), RepositoryError>;
}
