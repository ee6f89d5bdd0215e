use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;

pub struct ClearCartParams {
    pub cart_id: i64,
}

/// Empties a cart's product list; the cart record itself is retained.
#[async_trait]
pub trait ClearCartUseCase: Send + Sync {
    async fn execute(&self, params: ClearCartParams) -> Result<Cart, CartError>;
}
