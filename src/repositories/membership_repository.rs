use crate::entities::membership_entity as memberships;
use crate::error::AppResult;
use sea_orm::{ConnectionTrait, EntityTrait, ModelTrait, QueryOrder};

pub struct MembershipRepository;

impl MembershipRepository {
    /// 全部等级，按 min_items 升序
    pub async fn all<C: ConnectionTrait>(db: &C) -> AppResult<Vec<memberships::Model>> {
        Ok(memberships::Entity::find()
            .order_by_asc(memberships::Column::MinItems)
            .all(db)
            .await?)
    }

    pub async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: i32,
    ) -> AppResult<Option<memberships::Model>> {
        Ok(memberships::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, membership: memberships::Model) -> AppResult<()> {
        membership.delete(db).await?;
        Ok(())
    }
}
