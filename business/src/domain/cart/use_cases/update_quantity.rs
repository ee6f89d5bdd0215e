use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct UpdateItemQuantityParams {
    pub cart_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

#[async_trait]
pub trait UpdateItemQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateItemQuantityParams) -> Result<Cart, CartError>;
}
