use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_product::{
    RemoveProductFromCartParams, RemoveProductFromCartUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct RemoveProductFromCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
    pub write_guard: Arc<Mutex<()>>,
}

#[async_trait]
impl RemoveProductFromCartUseCase for RemoveProductFromCartUseCaseImpl {
    async fn execute(&self, params: RemoveProductFromCartParams) -> Result<Cart, CartError> {
        let _guard = self.write_guard.lock().await;

        let mut cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        if !cart.remove_item(params.product_id) {
            return Err(CartError::ItemNotFound);
        }

        self.repository.save(&cart).await?;

        self.logger.info(&format!(
            "Removed product {} from cart {}",
            params.product_id, params.cart_id
        ));
        Ok(cart)
    }
}
