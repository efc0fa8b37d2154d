use crate::entities::{OrderStatus, order_entity as orders};
use crate::error::{AppError, AppResult};
use crate::models::{AuthUser, OrderResponse, OrderSummary};
use crate::repositories::{MembershipRepository, OrderRepository};
use crate::services::tier_policy;
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct OrderService {
    pool: DatabaseConnection,
}

impl OrderService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// 当前用户的订单，最新的在前
    pub async fn list_orders(&self, auth: &AuthUser) -> AppResult<Vec<OrderResponse>> {
        let orders = OrderRepository::list_for_user(&self.pool, auth.user_id).await?;
        self.with_lines(orders).await
    }

    pub async fn get_order(&self, auth: &AuthUser, id: i32) -> AppResult<OrderResponse> {
        let order = OrderRepository::find_for_user(&self.pool, id, auth.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".into()))?;
        let mut list = self.with_lines(vec![order]).await?;
        list.pop()
            .ok_or_else(|| AppError::NotFound("Order not found".into()))
    }

    /// 全部用户的订单（仅管理员）
    pub async fn list_all_orders(&self, auth: &AuthUser) -> AppResult<Vec<OrderResponse>> {
        auth.require_admin()?;
        let orders = OrderRepository::list_all(&self.pool).await?;
        self.with_lines(orders).await
    }

    /// 任意订单详情（仅管理员）
    pub async fn get_any_order(&self, auth: &AuthUser, id: i32) -> AppResult<OrderResponse> {
        auth.require_admin()?;
        let order = OrderRepository::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".into()))?;
        let mut list = self.with_lines(vec![order]).await?;
        list.pop()
            .ok_or_else(|| AppError::NotFound("Order not found".into()))
    }

    /// 修改订单状态（仅管理员），订单其它字段不可变
    pub async fn update_order_status(
        &self,
        auth: &AuthUser,
        id: i32,
        status: OrderStatus,
    ) -> AppResult<OrderResponse> {
        auth.require_admin()?;

        let order = OrderRepository::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".into()))?;
        let previous = order.status;
        let order = OrderRepository::update_status(&self.pool, order, status).await?;
        log::info!(
            "Order {} status {} -> {} by {}",
            order.order_number,
            previous,
            order.status,
            auth.user_id
        );

        let mut list = self.with_lines(vec![order]).await?;
        list.pop()
            .ok_or_else(|| AppError::InternalError("Order vanished after update".into()))
    }

    /// 附加订单条目，并由折扣快照反推等级名称
    async fn with_lines(&self, orders: Vec<orders::Model>) -> AppResult<Vec<OrderResponse>> {
        let tiers = MembershipRepository::all(&self.pool).await?;
        let ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
        let mut lines = OrderRepository::lines_for_orders(&self.pool, &ids).await?;

        Ok(orders
            .into_iter()
            .map(|order| {
                let membership_status = tier_policy::status_for_discount(order.discount, &tiers)
                    .unwrap_or_default()
                    .to_string();
                let items = lines
                    .remove(&order.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(Into::into)
                    .collect();
                OrderResponse {
                    order: OrderSummary::new(order, membership_status),
                    items,
                }
            })
            .collect())
    }
}
