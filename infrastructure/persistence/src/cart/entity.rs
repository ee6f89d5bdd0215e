use serde::{Deserialize, Serialize};

use business::domain::cart::model::{Cart, CartItem};

#[derive(Debug, Serialize, Deserialize)]
pub struct CartItemEntity {
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CartEntity {
    pub id: i64,
    pub products: Vec<CartItemEntity>,
}

impl CartEntity {
    pub fn from_domain(cart: &Cart) -> Self {
        Self {
            id: cart.id,
            products: cart
                .products
                .iter()
                .map(|item| CartItemEntity {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }

    pub fn into_domain(self) -> Cart {
        Cart {
            id: self.id,
            products: self
                .products
                .into_iter()
                .map(|item| CartItem {
                    product_id: item.product_id,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}
