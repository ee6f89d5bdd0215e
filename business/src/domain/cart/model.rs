/// One line of a cart. Quantities are passed through as provided; the
/// service performs no positivity validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: i64,
    pub quantity: i64,
}

/// A shopping cart. The record outlives its contents: clearing a cart
/// empties `products`, it never deletes the cart itself.
///
/// Invariant: `products` holds at most one line per `product_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub id: i64,
    pub products: Vec<CartItem>,
}

impl Cart {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            products: Vec::new(),
        }
    }

    /// Increment the quantity of an existing line, or append a new one.
    pub fn add_item(&mut self, product_id: i64, quantity: i64) {
        match self
            .products
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            Some(item) => item.quantity += quantity,
            None => self.products.push(CartItem {
                product_id,
                quantity,
            }),
        }
    }

    /// Remove the line for `product_id`. Returns `false` when the cart has
    /// no such line.
    pub fn remove_item(&mut self, product_id: i64) -> bool {
        let before = self.products.len();
        self.products.retain(|item| item.product_id != product_id);
        self.products.len() != before
    }

    /// Overwrite the quantity of the line for `product_id`. Returns `false`
    /// when the cart has no such line.
    pub fn set_item_quantity(&mut self, product_id: i64, quantity: i64) -> bool {
        match self
            .products
            .iter_mut()
            .find(|item| item.product_id == product_id)
        {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }
}
