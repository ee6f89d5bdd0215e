use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, error) = match &self {
            CartError::NotFound => (StatusCode::NOT_FOUND, "cart.not_found"),
            CartError::ItemNotFound => (StatusCode::NOT_FOUND, "cart.item_not_found"),
            // A catalog miss on add answers 400, not 404: contract of the
            // add-product operation.
            CartError::ProductNotInCatalog => {
                (StatusCode::BAD_REQUEST, "cart.product_not_in_catalog")
            }
            CartError::InvalidProductsPayload => {
                (StatusCode::BAD_REQUEST, "cart.invalid_products_payload")
            }
            CartError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "repository.persistence")
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
            }),
        )
    }
}
