use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct RemoveProductFromCartParams {
    pub cart_id: i64,
    pub product_id: i64,
}

#[async_trait]
pub trait RemoveProductFromCartUseCase: Send + Sync {
    async fn execute(&self, params: RemoveProductFromCartParams) -> Result<Cart, CartError>;
}
