use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateItemQuantityParams, UpdateItemQuantityUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateItemQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
    pub write_guard: Arc<Mutex<()>>,
}

#[async_trait]
impl UpdateItemQuantityUseCase for UpdateItemQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateItemQuantityParams) -> Result<Cart, CartError> {
        let _guard = self.write_guard.lock().await;

        let mut cart = self
            .repository
            .get_by_id(params.cart_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::NotFound,
                other => CartError::Repository(other),
            })?;

        // Overwrites with the provided value as-is; the contract carries no
        // positivity validation.
        if !cart.set_item_quantity(params.product_id, params.quantity) {
            return Err(CartError::ItemNotFound);
        }

        self.repository.save(&cart).await?;

        self.logger.info(&format!(
            "Set quantity of product {} in cart {} to {}",
            params.product_id, params.cart_id, params.quantity
        ));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::CartItem;
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn list_all(&self) -> Result<Vec<Cart>, RepositoryError>;
            async fn get_by_id(&self, id: i64) -> Result<Cart, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
            async fn replace_all(&self, carts: &[Cart]) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn write_guard() -> Arc<Mutex<()>> {
        Arc::new(Mutex::new(()))
    }

    fn cart_with_one_line() -> Cart {
        let mut cart = Cart::new(1);
        cart.products.push(CartItem {
            product_id: 7,
            quantity: 2,
        });
        cart
    }

    #[tokio::test]
    async fn should_overwrite_quantity_with_provided_value() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(cart_with_one_line()));
        mock_repo
            .expect_save()
            .withf(|cart| cart.products[0].quantity == 10)
            .returning(|_| Ok(()));

        let use_case = UpdateItemQuantityUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            write_guard: write_guard(),
        };

        let result = use_case
            .execute(UpdateItemQuantityParams {
                cart_id: 1,
                product_id: 7,
                quantity: 10,
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().products[0].quantity, 10);
    }

    #[tokio::test]
    async fn should_return_item_not_found_without_altering_any_line() {
        let mut mock_repo = MockCartRepo::new();
        // No save expectation: the failed update must not touch the store.
        mock_repo
            .expect_get_by_id()
            .returning(|_| Ok(cart_with_one_line()));

        let use_case = UpdateItemQuantityUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            write_guard: write_guard(),
        };

        let result = use_case
            .execute(UpdateItemQuantityParams {
                cart_id: 1,
                product_id: 9,
                quantity: 10,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }

    #[tokio::test]
    async fn should_return_not_found_when_cart_missing() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateItemQuantityUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            write_guard: write_guard(),
        };

        let result = use_case
            .execute(UpdateItemQuantityParams {
                cart_id: 99,
                product_id: 7,
                quantity: 10,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }
}
