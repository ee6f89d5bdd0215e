use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct GetCartByIdParams {
    pub id: i64,
}

#[async_trait]
pub trait GetCartByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetCartByIdParams) -> Result<Cart, CartError>;
}
