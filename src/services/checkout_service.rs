use crate::config::CheckoutConfig;
use crate::error::{AppError, AppResult};
use crate::models::{AuthUser, CartLine, CheckoutSummary, OrderSummary};
use crate::repositories::{
    CartRepository, MembershipRepository, OrderRepository, ProductRepository, UserRepository,
};
use crate::services::tier_policy;
use crate::utils::generate_order_number;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

/// 订单金额（单位：分）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutAmounts {
    pub total_amount: i64,
    pub discount_amount: i64,
    pub final_amount: i64,
}

impl CheckoutAmounts {
    /// 折扣金额向下取整到分
    pub fn compute(total_amount: i64, discount_percentage: i32) -> Self {
        let discount_amount = total_amount * i64::from(discount_percentage) / 100;
        Self {
            total_amount,
            discount_amount,
            final_amount: total_amount - discount_amount,
        }
    }
}

/// 逐行校验库存，任何一行不满足都不做修改
fn validate_lines(lines: &[CartLine]) -> AppResult<()> {
    for line in lines {
        if line.product.is_deleted {
            return Err(AppError::ValidationError(format!(
                "Product {} is no longer available",
                line.product.name
            )));
        }
        if !line.product.can_supply(line.item.quantity) {
            return Err(AppError::ValidationError(format!(
                "Not enough stock for product {}",
                line.product.name
            )));
        }
    }
    Ok(())
}

fn cart_total(lines: &[CartLine]) -> i64 {
    lines.iter().map(|line| line.item.line_total()).sum()
}

#[derive(Clone)]
pub struct CheckoutService {
    pool: DatabaseConnection,
    config: CheckoutConfig,
}

impl CheckoutService {
    pub fn new(pool: DatabaseConnection, config: CheckoutConfig) -> Self {
        Self { pool, config }
    }

    /// 结算当前购物车
    ///
    /// 逻辑:
    /// 1. 读取用户、未结算购物车及其有效条目
    /// 2. 全部条目先校验库存，再统一修改
    /// 3. 按快照单价计算总额
    /// 4. 条件扣减库存 (update where quantity >= n)，失败则整体回滚
    /// 5. 按用户当前等级计算折扣
    /// 6. 生成唯一订单号，写入订单与订单条目
    /// 7. 关闭购物车，按累计件数重算会员等级
    ///
    /// 所有写操作在同一事务内；提交前任何错误都会丢弃事务。
    pub async fn checkout(&self, auth: &AuthUser) -> AppResult<CheckoutSummary> {
        let txn = self.pool.begin().await?;

        let user = UserRepository::find_by_id(&txn, auth.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;

        let cart = CartRepository::find_open_for_user(&txn, user.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cart not found".into()))?;

        let lines = CartRepository::live_lines(&txn, cart.id).await?;
        if lines.is_empty() {
            return Err(AppError::NotFound("Cart is empty".into()));
        }

        validate_lines(&lines)?;
        let total_amount = cart_total(&lines);

        for line in &lines {
            let updated =
                ProductRepository::decrement_stock(&txn, line.product.id, line.item.quantity)
                    .await?;
            if !updated {
                // 并发结算抢先扣减了库存
                return Err(AppError::ValidationError(format!(
                    "Not enough stock for product {}",
                    line.product.name
                )));
            }
        }

        let tiers = MembershipRepository::all(&txn).await?;
        let discount = tier_policy::discount_for(&user.membership_status, &tiers);
        let amounts = CheckoutAmounts::compute(total_amount, discount);

        let order_number = self.unique_order_number(&txn).await?;
        let order = OrderRepository::create(&txn, user.id, &order_number, discount).await?;
        OrderRepository::insert_lines(&txn, order.id, &lines).await?;

        CartRepository::close(&txn, cart).await?;

        let purchased = OrderRepository::purchased_item_count(&txn, user.id, None).await?;
        let previous_status = user.membership_status.clone();
        let membership_status = match tier_policy::tier_for(purchased, &tiers) {
            Some(tier) => {
                let status = tier.status.clone();
                UserRepository::set_membership_status(&txn, user, &status).await?;
                status
            }
            None => previous_status.clone(),
        };
        if membership_status != previous_status {
            log::info!(
                "User {} membership changed: {} -> {}",
                auth.user_id,
                previous_status,
                membership_status
            );
        }

        txn.commit().await?;

        log::info!(
            "checkout completed: user={} order={} items={} total={} final={}",
            auth.user_id,
            order.order_number,
            lines.len(),
            amounts.total_amount,
            amounts.final_amount
        );

        Ok(CheckoutSummary {
            order: OrderSummary::new(order, membership_status),
            total_amount: amounts.total_amount,
            discount_amount: amounts.discount_amount,
            final_amount: amounts.final_amount,
        })
    }

    /// 生成未被占用的订单号，超出重试次数视为内部错误
    async fn unique_order_number<C: ConnectionTrait>(&self, db: &C) -> AppResult<String> {
        for _ in 0..self.config.order_number_attempts.max(1) {
            let candidate = generate_order_number(self.config.order_number_length);
            if !OrderRepository::order_number_exists(db, &candidate).await? {
                return Ok(candidate);
            }
            log::warn!("Order number collision: {candidate}");
        }
        Err(AppError::InternalError(
            "Failed to generate a unique order number".into(),
        ))
    }
}
