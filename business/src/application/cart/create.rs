use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::create::CreateCartUseCase;
use crate::domain::logger::Logger;

pub struct CreateCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
    pub write_guard: Arc<Mutex<()>>,
}

#[async_trait]
impl CreateCartUseCase for CreateCartUseCaseImpl {
    async fn execute(&self) -> Result<Cart, CartError> {
        // Holds the store guard across id assignment and the write so two
        // concurrent creates cannot mint the same id.
        let _guard = self.write_guard.lock().await;

        let mut carts = self.repository.list_all().await?;
        let next_id = carts.iter().map(|cart| cart.id).max().unwrap_or(0) + 1;
        let cart = Cart::new(next_id);

        carts.push(cart.clone());
        self.repository.replace_all(&carts).await?;

        self.logger.info(&format!("Cart created: {}", cart.id));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
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

    #[tokio::test]
    async fn should_assign_id_one_when_no_carts_exist() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_list_all().returning(|| Ok(Vec::new()));
        mock_repo
            .expect_replace_all()
            .withf(|carts| carts.len() == 1 && carts[0].id == 1 && carts[0].products.is_empty())
            .returning(|_| Ok(()));

        let use_case = CreateCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            write_guard: write_guard(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        let cart = result.unwrap();
        assert_eq!(cart.id, 1);
        assert!(cart.products.is_empty());
    }

    #[tokio::test]
    async fn should_assign_max_plus_one_when_ids_are_sparse() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_list_all()
            .returning(|| Ok(vec![Cart::new(1), Cart::new(3)]));
        mock_repo
            .expect_replace_all()
            .withf(|carts| carts.len() == 3 && carts[2].id == 4)
            .returning(|_| Ok(()));

        let use_case = CreateCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            write_guard: write_guard(),
        };

        let result = use_case.execute().await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, 4);
    }

    #[tokio::test]
    async fn should_surface_repository_error() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_list_all()
            .returning(|| Err(RepositoryError::Persistence));

        let use_case = CreateCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            write_guard: write_guard(),
        };

        let result = use_case.execute().await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), CartError::Repository(_)));
    }
}
