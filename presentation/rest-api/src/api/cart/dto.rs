use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem};

#[derive(Debug, Clone, Object)]
pub struct CartItemDto {
    /// Product referenced by this cart line
    pub product_id: i64,
    /// Units of the product in the cart
    pub quantity: i64,
}

impl From<CartItem> for CartItemDto {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Cart identifier
    pub id: i64,
    /// Cart lines, at most one per product
    pub products: Vec<CartItemDto>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            id: cart.id,
            products: cart.products.into_iter().map(|item| item.into()).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct AddProductRequest {
    /// Units to add onto the cart line
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateQuantityRequest {
    /// Replacement value for the cart line quantity
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct ReplaceProductsRequest {
    /// Replacement product list; must be an array of cart lines
    pub products: serde_json::Value,
}

impl ReplaceProductsRequest {
    /// `None` unless the payload is an array of well-formed cart lines.
    /// The caller turns `None` into the invalid-payload rejection after the
    /// cart lookup.
    pub fn into_products(self) -> Option<Vec<CartItem>> {
        let items = match self.products {
            serde_json::Value::Array(items) => items,
            _ => return None,
        };

        items
            .into_iter()
            .map(|item| {
                let product_id = item.get("product_id")?.as_i64()?;
                let quantity = item.get("quantity")?.as_i64()?;
                Some(CartItem {
                    product_id,
                    quantity,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_accept_array_of_cart_lines() {
        let request = ReplaceProductsRequest {
            products: json!([
                {"product_id": 7, "quantity": 2},
                {"product_id": 9, "quantity": 1}
            ]),
        };

        let products = request.into_products().unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].product_id, 7);
    }

    #[test]
    fn should_reject_non_array_payload() {
        let request = ReplaceProductsRequest {
            products: json!("definitely not an array"),
        };

        assert!(request.into_products().is_none());
    }

    #[test]
    fn should_reject_malformed_array_element() {
        let request = ReplaceProductsRequest {
            products: json!([{"product_id": 7}]),
        };

        assert!(request.into_products().is_none());
    }
}
