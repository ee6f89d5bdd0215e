use std::sync::Arc;

use tokio::sync::Mutex;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryJsonFile;
use persistence::product::repository::ProductRepositoryJsonFile;

use business::application::cart::add_product::AddProductToCartUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::create::CreateCartUseCaseImpl;
use business::application::cart::get_by_id::GetCartByIdUseCaseImpl;
use business::application::cart::remove_product::RemoveProductFromCartUseCaseImpl;
use business::application::cart::replace_products::ReplaceProductsUseCaseImpl;
use business::application::cart::update_quantity::UpdateItemQuantityUseCaseImpl;

use crate::config::storage_config::Storage;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
}

impl DependencyContainer {
    pub fn new(storage: Storage) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let cart_repository = Arc::new(CartRepositoryJsonFile::new(storage.carts));
        let product_repository = Arc::new(ProductRepositoryJsonFile::new(storage.products));

        // One write guard for the cart store: mutating use cases serialize
        // their load-mutate-save span on it.
        let write_guard = Arc::new(Mutex::new(()));

        // Cart use cases
        let create_use_case = Arc::new(CreateCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
            write_guard: write_guard.clone(),
        });
        let get_by_id_use_case = Arc::new(GetCartByIdUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let add_product_use_case = Arc::new(AddProductToCartUseCaseImpl {
            repository: cart_repository.clone(),
            product_repository,
            logger: logger.clone(),
            write_guard: write_guard.clone(),
        });
        let remove_product_use_case = Arc::new(RemoveProductFromCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
            write_guard: write_guard.clone(),
        });
        let clear_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
            write_guard: write_guard.clone(),
        });
        let replace_products_use_case = Arc::new(ReplaceProductsUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
            write_guard: write_guard.clone(),
        });
        let update_quantity_use_case = Arc::new(UpdateItemQuantityUseCaseImpl {
            repository: cart_repository,
            logger,
            write_guard,
        });

        let cart_api = crate::api::cart::routes::CartApi::new(
            create_use_case,
            get_by_id_use_case,
            add_product_use_case,
            remove_product_use_case,
            clear_use_case,
            replace_products_use_case,
            update_quantity_use_case,
        );

        Self {
            health_api,
            cart_api,
        }
    }
}
