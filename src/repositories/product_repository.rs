use crate::entities::product_entity as products;
use crate::error::AppResult;
use crate::models::ProductRequest;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, Set, UpdateResult,
};

pub struct ProductRepository;

impl ProductRepository {
    pub async fn find_by_id<C: ConnectionTrait>(
        db: &C,
        id: i32,
    ) -> AppResult<Option<products::Model>> {
        Ok(products::Entity::find_by_id(id).one(db).await?)
    }

    /// 原子扣减库存 (where quantity >= n and not deleted)。
    /// 返回 false 表示库存已被其它请求占用或商品已下架。
    pub async fn decrement_stock<C: ConnectionTrait>(
        db: &C,
        product_id: i32,
        quantity: i32,
    ) -> AppResult<bool> {
        let result: UpdateResult = products::Entity::update_many()
            .col_expr(
                products::Column::Quantity,
                Expr::col(products::Column::Quantity).sub(quantity),
            )
            .col_expr(products::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(products::Column::Id.eq(product_id))
            .filter(products::Column::IsDeleted.eq(false))
            .filter(products::Column::Quantity.gte(quantity))
            .exec(db)
            .await?;
        Ok(result.rows_affected == 1)
    }

    pub async fn insert<C: ConnectionTrait>(
        db: &C,
        request: &ProductRequest,
    ) -> AppResult<products::Model> {
        let now = Utc::now();
        Ok(products::ActiveModel {
            name: Set(request.name.clone()),
            description: Set(request.description.clone()),
            price: Set(request.price),
            quantity: Set(request.quantity),
            category_id: Set(request.category_id),
            brand_id: Set(request.brand_id),
            is_deleted: Set(false),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(db)
        .await?)
    }

    /// 覆盖商品的可编辑字段，不改变下架标记
    pub async fn update<C: ConnectionTrait>(
        db: &C,
        product: products::Model,
        request: &ProductRequest,
    ) -> AppResult<products::Model> {
        let mut am = product.into_active_model();
        am.name = Set(request.name.clone());
        am.description = Set(request.description.clone());
        am.price = Set(request.price);
        am.quantity = Set(request.quantity);
        am.category_id = Set(request.category_id);
        am.brand_id = Set(request.brand_id);
        am.updated_at = Set(Some(Utc::now()));
        Ok(am.update(db).await?)
    }

    pub async fn set_deleted<C: ConnectionTrait>(
        db: &C,
        product: products::Model,
        is_deleted: bool,
    ) -> AppResult<products::Model> {
        let mut am = product.into_active_model();
        am.is_deleted = Set(is_deleted);
        am.updated_at = Set(Some(Utc::now()));
        Ok(am.update(db).await?)
    }

    /// 引用该品牌的商品数（含已下架）
    pub async fn count_for_brand<C: ConnectionTrait>(db: &C, brand_id: i32) -> AppResult<u64> {
        Ok(products::Entity::find()
            .filter(products::Column::BrandId.eq(brand_id))
            .count(db)
            .await?)
    }

    /// 引用该分类的商品数（含已下架）
    pub async fn count_for_category<C: ConnectionTrait>(
        db: &C,
        category_id: i32,
    ) -> AppResult<u64> {
        Ok(products::Entity::find()
            .filter(products::Column::CategoryId.eq(category_id))
            .count(db)
            .await?)
    }
}
