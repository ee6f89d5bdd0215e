use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem};

pub struct ReplaceProductsParams {
    pub cart_id: i64,
    /// `None` when the submitted payload did not carry a well-formed
    /// products array. Kept until after the cart lookup so a missing cart
    /// still answers 404 ahead of payload validation.
    pub products: Option<Vec<CartItem>>,
}

#[async_trait]
pub trait ReplaceProductsUseCase: Send + Sync {
    async fn execute(&self, params: ReplaceProductsParams) -> Result<Cart, CartError>;
}
