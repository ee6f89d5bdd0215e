use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_product::{AddProductToCartParams, AddProductToCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;

pub struct AddProductToCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
    pub write_guard: Arc<Mutex<()>>,
}

#[async_trait]
impl AddProductToCartUseCase for AddProductToCartUseCaseImpl {
    async fn execute(&self, params: AddProductToCartParams) -> Result<Cart, CartError> {
        // Serializes the load-mutate-save span against concurrent writers.
        let _guard = self.write_guard.lock().await;

        let mut cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        if !self.product_repository.exists(params.product_id).await? {
            self.logger.warn(&format!(
                "Rejected add to cart {}: product {} not in catalog",
                params.cart_id, params.product_id
            ));
            return Err(CartError::ProductNotInCatalog);
        }

        cart.add_item(params.product_id, params.quantity);
        self.repository.save(&cart).await?;

        self.logger.info(&format!(
            "Added product {} (quantity {}) to cart {}",
            params.product_id, params.quantity, params.cart_id
        ));
        Ok(cart)
    }
}
