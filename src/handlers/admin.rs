use crate::models::{
    ApiResponse, AuthUser, BrandResponse, CategoryResponse, NameRequest, ProductRequest,
    ProductResponse, ProductStatusRequest, UpdateOrderStatusRequest,
};
use crate::services::{CatalogService, MembershipService, OrderService};
use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

// ---- 商品 ----

pub async fn get_product(
    catalog_service: web::Data<CatalogService>,
    user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match catalog_service.get_product(&user, path.into_inner()).await {
        Ok(product) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            200,
            json!({
                "result": "Product retrieved successfully",
                "product": ProductResponse::from(product)
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn create_product(
    catalog_service: web::Data<CatalogService>,
    user: AuthUser,
    request: web::Json<ProductRequest>,
) -> Result<HttpResponse> {
    match catalog_service
        .create_product(&user, request.into_inner())
        .await
    {
        Ok(product) => Ok(HttpResponse::Created().json(ApiResponse::success(
            201,
            json!({
                "result": "Product created successfully",
                "product": ProductResponse::from(product)
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn update_product(
    catalog_service: web::Data<CatalogService>,
    user: AuthUser,
    path: web::Path<i32>,
    request: web::Json<ProductRequest>,
) -> Result<HttpResponse> {
    match catalog_service
        .update_product(&user, path.into_inner(), request.into_inner())
        .await
    {
        Ok(product) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            200,
            json!({
                "result": "Product updated successfully",
                "product": ProductResponse::from(product)
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn delete_product(
    catalog_service: web::Data<CatalogService>,
    user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match catalog_service.delete_product(&user, path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::message(
            200,
            "Product deleted successfully",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn update_product_status(
    catalog_service: web::Data<CatalogService>,
    user: AuthUser,
    path: web::Path<i32>,
    request: web::Json<ProductStatusRequest>,
) -> Result<HttpResponse> {
    match catalog_service
        .set_product_status(&user, path.into_inner(), request.is_deleted)
        .await
    {
        Ok(product) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            200,
            json!({
                "result": "Product status updated successfully",
                "product": ProductResponse::from(product)
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

// ---- 品牌 ----

pub async fn get_brand(
    catalog_service: web::Data<CatalogService>,
    user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match catalog_service.get_brand(&user, path.into_inner()).await {
        Ok(brand) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            200,
            json!({
                "result": "Brand retrieved successfully",
                "brand": BrandResponse::from(brand)
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn create_brand(
    catalog_service: web::Data<CatalogService>,
    user: AuthUser,
    request: web::Json<NameRequest>,
) -> Result<HttpResponse> {
    match catalog_service.create_brand(&user, &request.name).await {
        Ok(brand) => Ok(HttpResponse::Created().json(ApiResponse::success(
            201,
            json!({
                "result": "Brand created successfully",
                "brand": BrandResponse::from(brand)
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn update_brand(
    catalog_service: web::Data<CatalogService>,
    user: AuthUser,
    path: web::Path<i32>,
    request: web::Json<NameRequest>,
) -> Result<HttpResponse> {
    match catalog_service
        .update_brand(&user, path.into_inner(), &request.name)
        .await
    {
        Ok(brand) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            200,
            json!({
                "result": "Brand updated successfully",
                "brand": BrandResponse::from(brand)
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn delete_brand(
    catalog_service: web::Data<CatalogService>,
    user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match catalog_service.delete_brand(&user, path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::message(
            200,
            "Brand deleted successfully",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

// ---- 分类 ----

pub async fn get_category(
    catalog_service: web::Data<CatalogService>,
    user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match catalog_service.get_category(&user, path.into_inner()).await {
        Ok(category) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            200,
            json!({
                "result": "Category retrieved successfully",
                "category": CategoryResponse::from(category)
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn create_category(
    catalog_service: web::Data<CatalogService>,
    user: AuthUser,
    request: web::Json<NameRequest>,
) -> Result<HttpResponse> {
    match catalog_service.create_category(&user, &request.name).await {
        Ok(category) => Ok(HttpResponse::Created().json(ApiResponse::success(
            201,
            json!({
                "result": "Category created successfully",
                "category": CategoryResponse::from(category)
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn update_category(
    catalog_service: web::Data<CatalogService>,
    user: AuthUser,
    path: web::Path<i32>,
    request: web::Json<NameRequest>,
) -> Result<HttpResponse> {
    match catalog_service
        .update_category(&user, path.into_inner(), &request.name)
        .await
    {
        Ok(category) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            200,
            json!({
                "result": "Category updated successfully",
                "category": CategoryResponse::from(category)
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn delete_category(
    catalog_service: web::Data<CatalogService>,
    user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match catalog_service.delete_category(&user, path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::message(
            200,
            "Category deleted successfully",
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

// ---- 订单 ----

pub async fn list_orders(
    order_service: web::Data<OrderService>,
    user: AuthUser,
) -> Result<HttpResponse> {
    match order_service.list_all_orders(&user).await {
        Ok(orders) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            200,
            json!({
                "result": "Orders retrieved successfully",
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
    match order_service.get_any_order(&user, path.into_inner()).await {
        Ok(order) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            200,
            json!({
                "result": "Order retrieved successfully",
                "order": order
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

pub async fn update_order_status(
    order_service: web::Data<OrderService>,
    user: AuthUser,
    path: web::Path<i32>,
    request: web::Json<UpdateOrderStatusRequest>,
) -> Result<HttpResponse> {
    match order_service
        .update_order_status(&user, path.into_inner(), request.status)
        .await
    {
        Ok(order) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            200,
            json!({
                "result": "Order status updated",
                "order": order
            }),
        ))),
        Err(e) => Ok(e.error_response()),
    }
}

// ---- 会员等级 ----

pub async fn delete_membership(
    membership_service: web::Data<MembershipService>,
    user: AuthUser,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    match membership_service.delete_tier(&user, path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::message(200, "Membership deleted"))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn admin_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/products", web::post().to(create_product))
            .route("/products/{id}", web::get().to(get_product))
            .route("/products/{id}", web::put().to(update_product))
            .route("/products/{id}", web::delete().to(delete_product))
            .route("/products/{id}/status", web::put().to(update_product_status))
            .route("/brands", web::post().to(create_brand))
            .route("/brands/{id}", web::get().to(get_brand))
            .route("/brands/{id}", web::put().to(update_brand))
            .route("/brands/{id}", web::delete().to(delete_brand))
            .route("/categories", web::post().to(create_category))
            .route("/categories/{id}", web::get().to(get_category))
            .route("/categories/{id}", web::put().to(update_category))
            .route("/categories/{id}", web::delete().to(delete_category))
            .route("/orders", web::get().to(list_orders))
            .route("/orders/{id}", web::get().to(get_order))
            .route("/orders/{id}/status", web::put().to(update_order_status))
            .route("/memberships/{id}", web::delete().to(delete_membership)),
    );
}
