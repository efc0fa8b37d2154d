use crate::models::{
    AddCartItemRequest, ApiResponse, AuthUser, CartItemResponse, CheckoutResponse,
    RemoveCartItemRequest, UpdateCartItemRequest,
};
use crate::services::{CartService, CheckoutService};
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

pub async fn add_item(
    cart_service: web::Data<CartService>,
    user: AuthUser,
    request: web::Json<AddCartItemRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    match cart_service
        .add_item(&user, request.product_id, request.quantity)
        .await
    {
        Ok(item) => Ok(HttpResponse::Created().json(ApiResponse::success(
            201,
            json!({
                "result": "Product added to cart",
                "cart_item": CartItemResponse::from(item)
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn get_cart(
    cart_service: web::Data<CartService>,
    user: AuthUser,
) -> Result<HttpResponse> {
    match cart_service.get_cart(&user).await {
        Ok(cart) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            200,
            json!({
                "result": "Cart retrieved",
                "cart": cart
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn update_item(
    cart_service: web::Data<CartService>,
    user: AuthUser,
    request: web::Json<UpdateCartItemRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    match cart_service
        .update_item(&user, request.cart_id, request.cart_item_id, request.quantity)
        .await
    {
        Ok(item) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            200,
            json!({
                "result": "Cart item updated",
                "cart_item": CartItemResponse::from(item)
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn remove_item(
    cart_service: web::Data<CartService>,
    user: AuthUser,
    request: web::Json<RemoveCartItemRequest>,
) -> Result<HttpResponse> {
    match cart_service
        .remove_item(&user, request.cart_id, request.cart_item_id)
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::message(200, "Cart item removed"))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn checkout(
    checkout_service: web::Data<CheckoutService>,
    user: AuthUser,
) -> Result<HttpResponse> {
    match checkout_service.checkout(&user).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            200,
            CheckoutResponse {
                result: "Checkout successful".into(),
                summary,
            },
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn cart_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/cart")
            .route("", web::post().to(add_item))
            .route("", web::get().to(get_cart))
            .route("", web::put().to(update_item))
            .route("", web::delete().to(remove_item))
            .route("/checkout/now", web::post().to(checkout)),
    );
}
