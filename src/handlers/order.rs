use crate::models::{ApiResponse, AuthUser};
use crate::services::OrderService;
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

pub async fn get_orders(
    order_service: web::Data<OrderService>,
    user: AuthUser,
) -> Result<HttpResponse> {
    match order_service.list_orders(&user).await {
        Ok(orders) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            200,
            json!({
                "result": "Orders retrieved",
                "orders": orders
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn get_order(
    order_service: web::Data<OrderService>,
    user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match order_service.get_order(&user, path.into_inner()).await {
        Ok(order) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            200,
            json!({
                "result": "Order retrieved",
                "order": order
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn order_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .route("", web::get().to(get_orders))
            .route("/{id}", web::get().to(get_order)),
    );
}
