#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.product_not_in_catalog")]
    ProductNotInCatalog,
    #[error("cart.invalid_products_payload")]
    InvalidProductsPayload,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
