use crate::entities::brand_entity as brands;
use crate::error::AppResult;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, ModelTrait, Set};

pub struct BrandRepository;

impl BrandRepository {
    pub async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: i32,
    ) -> AppResult<Option<brands::Model>> {
        Ok(brands::Entity::find_by_id(id).one(db).await?)
    }

    pub async fn insert<C: ConnectionTrait>(db: &C, name: &str) -> AppResult<brands::Model> {
        let now = Utc::now();
        Ok(brands::ActiveModel {
            name: Set(name.to_string()),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(db)
        .await?)
    }

    pub async fn rename<C: ConnectionTrait>(
        db: &C,
        model: brands::Model,
        name: &str,
    ) -> AppResult<brands::Model> {
        let mut am = model.into_active_model();
        am.name = Set(name.to_string());
        am.updated_at = Set(Some(Utc::now()));
        Ok(am.update(db).await?)
    }

    pub async fn delete<C: ConnectionTrait>(db: &C, model: brands::Model) -> AppResult<()> {
        model.delete(db).await?;
        Ok(())
    }
}
