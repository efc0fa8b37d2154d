use crate::entities::{role_entity as roles, user_entity as users};
use crate::error::AppResult;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, Set,
};

pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<users::Model>> {
        Ok(users::Entity::find_by_id(id).one(db).await?)
    }

    /// 按用户名或邮箱查找
    pub async fn find_by_identifier<C: ConnectionTrait>(
        db: &C,
        identifier: &str,
    ) -> AppResult<Option<users::Model>> {
        Ok(users::Entity::find()
            .filter(
                Condition::any()
                    .add(users::Column::Username.eq(identifier))
                    .add(users::Column::Email.eq(identifier)),
            )
            .one(db)
            .await?)
    }

    pub async fn username_or_email_taken<C: ConnectionTrait>(
        db: &C,
        username: &str,
        email: &str,
    ) -> AppResult<bool> {
        let count = users::Entity::find()
            .filter(
                Condition::any()
                    .add(users::Column::Username.eq(username))
                    .add(users::Column::Email.eq(email)),
            )
            .count(db)
            .await?;
        Ok(count > 0)
    }

    pub async fn insert<C: ConnectionTrait>(
        db: &C,
        user: users::ActiveModel,
    ) -> AppResult<users::Model> {
        Ok(user.insert(db).await?)
    }

    pub async fn set_membership_status<C: ConnectionTrait>(
        db: &C,
        user: users::Model,
        status: &str,
    ) -> AppResult<users::Model> {
        if user.membership_status == status {
            return Ok(user);
        }
        let mut am = user.into_active_model();
        am.membership_status = Set(status.to_string());
        am.updated_at = Set(Some(Utc::now()));
        Ok(am.update(db).await?)
    }

    /// 持有某个会员等级的用户数
    pub async fn count_with_membership_status<C: ConnectionTrait>(
        db: &C,
        status: &str,
    ) -> AppResult<u64> {
        Ok(users::Entity::find()
            .filter(users::Column::MembershipStatus.eq(status))
            .count(db)
            .await?)
    }

    pub async fn find_role<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<roles::Model>> {
        Ok(roles::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn find_role_by_name<C: ConnectionTrait>(
        db: &C,
        name: &str,
    ) -> AppResult<Option<roles::Model>> {
        Ok(roles::Entity::find()
            .filter(roles::Column::Name.eq(name))
            .one(db)
            .await?)
    }
}
