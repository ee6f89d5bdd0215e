use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use crate::store::JsonFileStore;

use super::entity::CartEntity;

pub struct CartRepositoryJsonFile {
    store: JsonFileStore,
}

impl CartRepositoryJsonFile {
    pub fn new(store: JsonFileStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryJsonFile {
    async fn list_all(&self) -> Result<Vec<Cart>, RepositoryError> {
        let entities: Vec<CartEntity> = self.store.read().await?;
        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Cart, RepositoryError> {
        let entities: Vec<CartEntity> = self.store.read().await?;
        entities
            .into_iter()
            .find(|e| e.id == id)
            .map(|e| e.into_domain())
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        // Re-reads the collection and swaps in the single target record, so
        // a save never clobbers sibling carts written since the caller's
        // load.
        let mut entities: Vec<CartEntity> = self.store.read().await?;
        let entity = CartEntity::from_domain(cart);
        match entities.iter_mut().find(|e| e.id == cart.id) {
            Some(slot) => *slot = entity,
            None => entities.push(entity),
        }
        self.store.write(&entities).await?;
        Ok(())
    }

    async fn replace_all(&self, carts: &[Cart]) -> Result<(), RepositoryError> {
        let entities: Vec<CartEntity> = carts.iter().map(CartEntity::from_domain).collect();
        self.store.write(&entities).await?;
        Ok(())
    }
}
