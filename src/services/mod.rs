pub mod auth_service;
pub mod cart_service;
pub mod catalog_service;
pub mod checkout_service;
pub mod membership_service;
pub mod order_service;
pub mod tier_policy;

pub use auth_service::AuthService;
pub use cart_service::CartService;
pub use catalog_service::CatalogService;
pub use checkout_service::{CheckoutAmounts, CheckoutService};
pub use membership_service::MembershipService;
pub use order_service::OrderService;

use crate::config::CheckoutConfig;
use crate::utils::JwtService;
use sea_orm::DatabaseConnection;

/// 启动时创建一次，每个 worker 克隆一份
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub cart: CartService,
    pub catalog: CatalogService,
    pub checkout: CheckoutService,
    pub membership: MembershipService,
    pub order: OrderService,
}

impl Services {
    pub fn new(pool: DatabaseConnection, jwt_service: JwtService, checkout: CheckoutConfig) -> Self {
        Self {
            auth: AuthService::new(pool.clone(), jwt_service),
            cart: CartService::new(pool.clone()),
            catalog: CatalogService::new(pool.clone()),
            checkout: CheckoutService::new(pool.clone(), checkout),
            membership: MembershipService::new(pool.clone()),
            order: OrderService::new(pool),
        }
    }
}
