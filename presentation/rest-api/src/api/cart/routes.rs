use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_product::{
    AddProductToCartParams, AddProductToCartUseCase,
};
use business::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use business::domain::cart::use_cases::create::CreateCartUseCase;
use business::domain::cart::use_cases::get_by_id::{GetCartByIdParams, GetCartByIdUseCase};
use business::domain::cart::use_cases::remove_product::{
    RemoveProductFromCartParams, RemoveProductFromCartUseCase,
};
use business::domain::cart::use_cases::replace_products::{
    ReplaceProductsParams, ReplaceProductsUseCase,
};
use business::domain::cart::use_cases::update_quantity::{
    UpdateItemQuantityParams, UpdateItemQuantityUseCase,
};

use crate::api::cart::dto::{
    AddProductRequest, CartResponse, MessageResponse, ReplaceProductsRequest,
    UpdateQuantityRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    create_use_case: Arc<dyn CreateCartUseCase>,
    get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
    add_product_use_case: Arc<dyn AddProductToCartUseCase>,
    remove_product_use_case: Arc<dyn RemoveProductFromCartUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
    replace_products_use_case: Arc<dyn ReplaceProductsUseCase>,
    update_quantity_use_case: Arc<dyn UpdateItemQuantityUseCase>,
}

impl CartApi {
    pub fn new(
        create_use_case: Arc<dyn CreateCartUseCase>,
        get_by_id_use_case: Arc<dyn GetCartByIdUseCase>,
        add_product_use_case: Arc<dyn AddProductToCartUseCase>,
        remove_product_use_case: Arc<dyn RemoveProductFromCartUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
        replace_products_use_case: Arc<dyn ReplaceProductsUseCase>,
        update_quantity_use_case: Arc<dyn UpdateItemQuantityUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_by_id_use_case,
            add_product_use_case,
            remove_product_use_case,
            clear_use_case,
            replace_products_use_case,
            update_quantity_use_case,
        }
    }
}

/// Cart management API
///
/// Endpoints for shopping carts and their product lines.
#[OpenApi]
impl CartApi {
    /// Create a cart
    ///
    /// Creates an empty cart under the next free id (max existing id + 1)
    /// and returns it.
    #[oai(path = "/api/carts", method = "post", tag = "ApiTags::Carts")]
    async fn create(&self) -> CreateCartResponse {
        match self.create_use_case.execute().await {
            Ok(cart) => CreateCartResponse::Created(Json(cart.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateCartResponse::InternalError(json)
            }
        }
    }

    /// Fetch a cart
    #[oai(path = "/api/carts/:cid", method = "get", tag = "ApiTags::Carts")]
    async fn get_by_id(&self, cid: Path<i64>) -> GetCartResponse {
        match self
            .get_by_id_use_case
            .execute(GetCartByIdParams { id: cid.0 })
            .await
        {
            Ok(cart) => GetCartResponse::Ok(Json(cart.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetCartResponse::NotFound(json),
                    _ => GetCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a product to a cart
    ///
    /// Increments the line quantity when the product is already in the
    /// cart, appends a new line otherwise. The product id must exist in the
    /// catalog.
    #[oai(
        path = "/api/carts/:cid/product/:pid",
        method = "post",
        tag = "ApiTags::Carts"
    )]
    async fn add_product(
        &self,
        cid: Path<i64>,
        pid: Path<i64>,
        body: Json<AddProductRequest>,
    ) -> AddProductResponse {
        let params = AddProductToCartParams {
            cart_id: cid.0,
            product_id: pid.0,
            quantity: body.0.quantity,
        };

        match self.add_product_use_case.execute(params).await {
            Ok(_) => AddProductResponse::Ok(Json(MessageResponse {
                message: "cart.product_added".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddProductResponse::BadRequest(json),
                    404 => AddProductResponse::NotFound(json),
                    _ => AddProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product from a cart
    #[oai(
        path = "/api/carts/:cid/products/:pid",
        method = "delete",
        tag = "ApiTags::Carts"
    )]
    async fn remove_product(&self, cid: Path<i64>, pid: Path<i64>) -> RemoveProductResponse {
        let params = RemoveProductFromCartParams {
            cart_id: cid.0,
            product_id: pid.0,
        };

        match self.remove_product_use_case.execute(params).await {
            Ok(_) => RemoveProductResponse::Ok(Json(MessageResponse {
                message: "cart.product_removed".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveProductResponse::NotFound(json),
                    _ => RemoveProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Clear a cart
    ///
    /// Empties the cart's product list; the cart record itself is retained.
    #[oai(path = "/api/carts/:cid", method = "delete", tag = "ApiTags::Carts")]
    async fn clear(&self, cid: Path<i64>) -> ClearCartResponse {
        match self
            .clear_use_case
            .execute(ClearCartParams { cart_id: cid.0 })
            .await
        {
            Ok(_) => ClearCartResponse::Ok(Json(MessageResponse {
                message: "cart.cleared".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ClearCartResponse::NotFound(json),
                    _ => ClearCartResponse::InternalError(json),
                }
            }
        }
    }

    /// Replace a cart's products
    ///
    /// Swaps the whole product list for the submitted array.
    #[oai(path = "/api/carts/:cid", method = "put", tag = "ApiTags::Carts")]
    async fn replace_products(
        &self,
        cid: Path<i64>,
        body: Json<ReplaceProductsRequest>,
    ) -> ReplaceProductsResponse {
        let params = ReplaceProductsParams {
            cart_id: cid.0,
            products: body.0.into_products(),
        };

        match self.replace_products_use_case.execute(params).await {
            Ok(_) => ReplaceProductsResponse::Ok(Json(MessageResponse {
                message: "cart.products_replaced".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ReplaceProductsResponse::BadRequest(json),
                    404 => ReplaceProductsResponse::NotFound(json),
                    _ => ReplaceProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a cart line quantity
    ///
    /// Overwrites the quantity of an existing line with the provided value.
    #[oai(
        path = "/api/carts/:cid/products/:pid",
        method = "put",
        tag = "ApiTags::Carts"
    )]
    async fn update_quantity(
        &self,
        cid: Path<i64>,
        pid: Path<i64>,
        body: Json<UpdateQuantityRequest>,
    ) -> UpdateQuantityResponse {
        let params = UpdateItemQuantityParams {
            cart_id: cid.0,
            product_id: pid.0,
            quantity: body.0.quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(_) => UpdateQuantityResponse::Ok(Json(MessageResponse {
                message: "cart.quantity_updated".to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => UpdateQuantityResponse::NotFound(json),
                    _ => UpdateQuantityResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateCartResponse {
    #[oai(status = 201)]
    Created(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddProductResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveProductResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReplaceProductsResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateQuantityResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
