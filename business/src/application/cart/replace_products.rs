use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::replace_products::{
    ReplaceProductsParams, ReplaceProductsUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct ReplaceProductsUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
    pub write_guard: Arc<Mutex<()>>,
}

#[async_trait]
impl ReplaceProductsUseCase for ReplaceProductsUseCaseImpl {
    async fn execute(&self, params: ReplaceProductsParams) -> Result<Cart, CartError> {
        let _guard = self.write_guard.lock().await;

        // Cart lookup first: a missing cart answers 404 even when the
        // payload is also invalid.
        let mut cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        let products = params.products.ok_or(CartError::InvalidProductsPayload)?;

        // One line per product: duplicate ids would break the cart invariant.
        let mut seen = HashSet::new();
        if products.iter().any(|item| !seen.insert(item.product_id)) {
            return Err(CartError::InvalidProductsPayload);
        }

        cart.products = products;
        self.repository.save(&cart).await?;

        self.logger.info(&format!(
            "Replaced product list of cart {} ({} lines)",
            cart.id,
            cart.products.len()
        ));
        Ok(cart)
    }
}
