pub mod admin;
pub mod auth;
pub mod cart;
pub mod membership;
pub mod order;

pub use admin::admin_config;
pub use auth::auth_config;
pub use cart::cart_config;
pub use membership::membership_config;
pub use order::order_config;

use crate::error::AppError;
use crate::services::Services;
use actix_web::web;

/// 请求体解析失败时仍返回统一的错误结构
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid request body: {err}")).into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("Invalid path parameter: {err}")).into()
    })
}

/// 注册全部服务与路由
pub fn configure(cfg: &mut web::ServiceConfig, services: &Services) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .app_data(web::Data::new(services.auth.clone()))
        .app_data(web::Data::new(services.cart.clone()))
        .app_data(web::Data::new(services.catalog.clone()))
        .app_data(web::Data::new(services.checkout.clone()))
        .app_data(web::Data::new(services.membership.clone()))
        .app_data(web::Data::new(services.order.clone()));

    auth_config(cfg);
    cart_config(cfg);
    order_config(cfg);
    membership_config(cfg);
    admin_config(cfg);
}
