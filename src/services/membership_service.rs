use crate::entities::{OrderStatus, membership_entity as memberships};
use crate::error::{AppError, AppResult};
use crate::models::AuthUser;
use crate::repositories::{MembershipRepository, OrderRepository, UserRepository};
use crate::services::tier_policy;
use sea_orm::{DatabaseConnection, TransactionTrait};

#[derive(Clone)]
pub struct MembershipService {
    pool: DatabaseConnection,
}

impl MembershipService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_tiers(&self) -> AppResult<Vec<memberships::Model>> {
        MembershipRepository::all(&self.pool).await
    }

    pub async fn get_tier(&self, id: i32) -> AppResult<memberships::Model> {
        MembershipRepository::find_by_id(&self.pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Membership not found".into()))
    }

    /// 按已完成订单的累计件数重算用户等级并保存，返回新的等级名称
    pub async fn recompute_for_user(&self, auth: &AuthUser, user_id: i32) -> AppResult<String> {
        let txn = self.pool.begin().await?;

        let user = UserRepository::find_by_id(&txn, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;

        let purchased =
            OrderRepository::purchased_item_count(&txn, user.id, Some(OrderStatus::Completed))
                .await?;
        let tiers = MembershipRepository::all(&txn).await?;
        let status = tier_policy::tier_for(purchased, &tiers)
            .map(|t| t.status.clone())
            .ok_or_else(|| AppError::InternalError("No membership tiers configured".into()))?;

        let previous = user.membership_status.clone();
        let user = UserRepository::set_membership_status(&txn, user, &status).await?;
        txn.commit().await?;

        if previous != user.membership_status {
            log::info!(
                "User {} membership recomputed by {}: {} -> {} ({} items)",
                user.id,
                auth.user_id,
                previous,
                user.membership_status,
                purchased
            );
        }
        Ok(user.membership_status)
    }

    /// 删除等级（仅管理员）；仍有用户持有该等级时拒绝
    pub async fn delete_tier(&self, auth: &AuthUser, id: i32) -> AppResult<()> {
        auth.require_admin()?;

        let tier = self.get_tier(id).await?;
        let holders = UserRepository::count_with_membership_status(&self.pool, &tier.status).await?;
        if holders > 0 {
            return Err(AppError::ValidationError(
                "Cannot delete membership that is assigned to a user".into(),
            ));
        }

        let status = tier.status.clone();
        MembershipRepository::delete(&self.pool, tier).await?;
        log::info!("Membership {} ({}) deleted by {}", id, status, auth.user_id);
        Ok(())
    }
}
